use tracing::{debug, warn};

use crate::config::default_access_token;
use crate::constants::{AUTO_VIEWPORT_PADDING, MAPBOX_STYLES_URL, MAX_REQUEST_URL_BYTES};
use crate::error::Result;
use crate::features::MapKind;
use crate::style::resolve_style;
use crate::token::check_access_token;
use crate::types::{FeatureCollection, MapOptions, Record};
use crate::viewport::Viewport;

/// A fully resolved Static Images API request. Every field is computed up
/// front and nothing changes after construction.
#[derive(Clone, Debug)]
pub struct StaticMap {
    kind: MapKind,
    width: u32,
    height: u32,
    alt: String,
    style: String,
    access_token: String,
    geojson: FeatureCollection,
    viewport: Viewport,
    size: String,
    query: String,
    url: String,
    url_2x: String,
}

impl StaticMap {
    /// Builds a marker map, falling back to `MAPBOX_ACCESS_TOKEN` for the token.
    pub fn points(records: &[Record], options: &MapOptions) -> Result<Self> {
        let fallback = default_access_token();
        Self::build(MapKind::Point, records, options, fallback.as_deref())
    }

    /// Builds a filled-area map, falling back to `MAPBOX_ACCESS_TOKEN` for the token.
    pub fn areas(records: &[Record], options: &MapOptions) -> Result<Self> {
        let fallback = default_access_token();
        Self::build(MapKind::Area, records, options, fallback.as_deref())
    }

    pub fn build(
        kind: MapKind,
        records: &[Record],
        options: &MapOptions,
        fallback_token: Option<&str>,
    ) -> Result<Self> {
        let style = resolve_style(&options.style)?;
        let geojson = FeatureCollection::new(kind.generate_features(records, &options.markers)?);
        let overlay = format!(
            "geojson({})",
            urlencoding::encode(&serde_json::to_string(&geojson)?)
        );
        let viewport = Viewport::from_geojson(&geojson);
        let size = format!("{}x{}", options.width, options.height);
        let access_token =
            check_access_token(options.access_token.as_deref(), fallback_token)?.to_string();
        let query = build_query(&access_token, viewport);

        debug!(
            "Built {:?} map: {} features, style {}, viewport {}",
            kind,
            geojson.features.len(),
            style,
            viewport
        );

        let base = format!("{MAPBOX_STYLES_URL}/{style}/static/{overlay}/{viewport}/{size}");
        let url = format!("{base}?{query}");
        let url_2x = format!("{base}@2x?{query}");

        let map = Self {
            kind,
            width: options.width,
            height: options.height,
            alt: options.alt.clone(),
            style,
            access_token,
            geojson,
            viewport,
            size,
            query,
            url,
            url_2x,
        };
        map.check_request_size();
        Ok(map)
    }

    fn check_request_size(&self) {
        if self.exceeds_request_limit() {
            warn!(
                "URL exceeds {} byte limit of API ({} bytes)",
                MAX_REQUEST_URL_BYTES,
                self.url_2x.len()
            );
        }
    }

    /// True when the 2x URL is longer than the API accepts. Construction
    /// still succeeds; the request itself is what will fail.
    pub fn exceeds_request_limit(&self) -> bool {
        self.url_2x.len() > MAX_REQUEST_URL_BYTES
    }

    pub fn kind(&self) -> MapKind {
        self.kind
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn geojson(&self) -> &FeatureCollection {
        &self.geojson
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn url_2x(&self) -> &str {
        &self.url_2x
    }
}

fn build_query(access_token: &str, viewport: Viewport) -> String {
    let mut query = format!("access_token={}", urlencoding::encode(access_token));
    if viewport.is_auto() {
        query.push_str(&format!("&padding={AUTO_VIEWPORT_PADDING}"));
    }
    query
}
