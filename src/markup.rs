use std::fmt;

use crate::map::StaticMap;
use crate::utils::escape_html;

/// `<img>` tag with a 1x/2x `srcset`; every attribute value is escaped.
pub fn render_img_tag(map: &StaticMap) -> String {
    let srcset = format!("{} 1x, {} 2x", map.url(), map.url_2x());
    let style = format!("width: {}px; height: {}px;", map.width(), map.height());
    format!(
        r#"<img src="{}" alt="{}" style="{}" srcset="{}" />"#,
        escape_html(map.url()),
        escape_html(map.alt()),
        escape_html(&style),
        escape_html(&srcset)
    )
}

impl fmt::Display for StaticMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_img_tag(self))
    }
}
