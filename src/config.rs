use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::constants::{ACCESS_TOKEN_ENV, DEFAULT_ALT, DEFAULT_HEIGHT, DEFAULT_STYLE, DEFAULT_WIDTH};
use crate::features::MapKind;
use crate::types::{MapOptions, Markers};

/// What the binary prints for a built map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Html,
    Url,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "url" | "urls" => Ok(OutputFormat::Url),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub kind: MapKind,
    pub output: OutputFormat,
    pub input_path: Option<PathBuf>,
    pub options: MapOptions,
    pub fallback_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let kind = env_parsed("MAPKICK_KIND", MapKind::Point)?;
        let output = env_parsed("MAPKICK_OUTPUT", OutputFormat::Html)?;
        let input_path = env_optional("MAPKICK_INPUT").map(PathBuf::from);

        let options = MapOptions {
            width: env_u32("MAPKICK_WIDTH", DEFAULT_WIDTH)?,
            height: env_u32("MAPKICK_HEIGHT", DEFAULT_HEIGHT)?,
            style: env_string("MAPKICK_STYLE", DEFAULT_STYLE),
            alt: env_string("MAPKICK_ALT", DEFAULT_ALT),
            markers: Markers {
                color: env_optional("MAPKICK_COLOR"),
                icon: env_optional("MAPKICK_ICON"),
            },
            access_token: None,
        };

        Ok(Self {
            kind,
            output,
            input_path,
            options,
            fallback_token: default_access_token(),
        })
    }
}

/// Process-wide default token, read from `MAPBOX_ACCESS_TOKEN`.
pub fn default_access_token() -> Option<String> {
    env_optional(ACCESS_TOKEN_ENV)
}

fn env_string(name: &str, default: &str) -> String {
    env_optional(name).unwrap_or_else(|| default.to_string())
}

fn env_optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn env_u32(name: &str, default: u32) -> Result<u32> {
    match env_optional(name) {
        Some(value) => value
            .trim()
            .parse::<u32>()
            .with_context(|| format!("Failed to parse {}={} as u32", name, value)),
        None => Ok(default),
    }
}

fn env_parsed<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    match env_optional(name) {
        Some(value) => value
            .parse::<T>()
            .map_err(|error| anyhow!("Failed to parse {}={}: {}", name, value, error)),
        None => Ok(default),
    }
}
