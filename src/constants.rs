pub const MAPBOX_STYLES_URL: &str = "https://api.mapbox.com/styles/v1";
pub const MAPBOX_STYLE_SCHEME_PREFIX: &str = "mapbox://styles/";
pub const ACCESS_TOKEN_ENV: &str = "MAPBOX_ACCESS_TOKEN";
pub const PUBLIC_TOKEN_PREFIX: &str = "pk.";
pub const SECRET_TOKEN_PREFIX: &str = "sk.";

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const DEFAULT_STYLE: &str = "mapbox/streets-v12";
pub const DEFAULT_ALT: &str = "Map";
pub const DEFAULT_MARKER_COLOR: &str = "#f84d4d";
pub const DEFAULT_AREA_COLOR: &str = "#0090ff";

pub const COORDINATE_PRECISION: i32 = 7;
pub const SINGLE_POINT_ZOOM: u8 = 15;
pub const AUTO_VIEWPORT_PADDING: u32 = 40;

pub const AREA_FILL_OPACITY: f64 = 0.3;
pub const AREA_STROKE_WIDTH: u32 = 1;
pub const AREA_STROKE_OPACITY: f64 = 0.7;

// https://docs.mapbox.com/api/overview/#url-length-limits
pub const MAX_REQUEST_URL_BYTES: usize = 8192;
