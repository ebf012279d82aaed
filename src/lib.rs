//! Builds Mapbox Static Images API URLs and `<img>` markup from point or area
//! records. Nothing here performs network I/O; the URL is handed to the API
//! by whoever renders the markup.

pub mod config;
pub mod constants;
pub mod error;
pub mod features;
pub mod map;
pub mod markup;
pub mod style;
pub mod token;
pub mod types;
pub mod utils;
pub mod viewport;

pub use error::{MapError, Result};
pub use features::MapKind;
pub use map::StaticMap;
pub use markup::render_img_tag;
pub use types::{Feature, FeatureCollection, Geometry, MapOptions, Markers, Record};
pub use viewport::Viewport;
