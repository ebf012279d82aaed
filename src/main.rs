use std::io::Read;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use mapkick_static::config::{Config, OutputFormat};
use mapkick_static::utils::init_tracing;
use mapkick_static::{Record, StaticMap};

fn main() -> Result<()> {
    init_tracing();

    let mut cfg = Config::from_env()?;
    if let Some(path) = std::env::args().nth(1) {
        cfg.input_path = Some(path.into());
    }

    let input = match cfg.input_path.as_ref() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read records from stdin")?;
            buffer
        }
    };

    let records: Vec<Record> =
        serde_json::from_str(&input).context("Failed to parse records as a JSON array")?;
    info!("Loaded {} records", records.len());

    let map = StaticMap::build(
        cfg.kind,
        &records,
        &cfg.options,
        cfg.fallback_token.as_deref(),
    )
    .context("Failed to build static map")?;

    match cfg.output {
        OutputFormat::Html => println!("{map}"),
        OutputFormat::Url => {
            println!("{}", map.url());
            println!("{}", map.url_2x());
        }
        OutputFormat::Json => {
            let summary = json!({
                "url": map.url(),
                "url2x": map.url_2x(),
                "viewport": map.viewport().to_string(),
                "bytes": map.url_2x().len(),
                "exceedsLimit": map.exceeds_request_limit(),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).context("Failed to encode summary")?
            );
        }
    }
    Ok(())
}
