use std::collections::HashSet;

use mapkick_static::style::resolve_style;
use mapkick_static::token::check_access_token;
use mapkick_static::utils::round_coordinate;
use mapkick_static::{MapError, MapKind, MapOptions, Record, StaticMap, Viewport};
use proptest::prelude::*;
use serde_json::{json, Value};

const TOKEN: &str = "pk.token";

fn ensure_env_token() {
    std::env::set_var("MAPBOX_ACCESS_TOKEN", TOKEN);
}

fn decode_overlay(url: &str) -> Value {
    let start = url.find("geojson(").expect("overlay start") + "geojson(".len();
    let end = start + url[start..].find(')').expect("overlay end");
    let decoded = urlencoding::decode(&url[start..end]).expect("percent decoding");
    serde_json::from_str(&decoded).expect("overlay json")
}

fn square(offset: f64) -> Value {
    json!({
        "type": "Polygon",
        "coordinates": [[
            [offset, offset],
            [offset + 1.0, offset],
            [offset + 1.0, offset + 1.0],
            [offset, offset]
        ]]
    })
}

#[test]
fn static_map_from_environment_token() {
    ensure_env_token();
    let map = StaticMap::points(&[Record::point(1.23, 4.56)], &MapOptions::default()).unwrap();

    assert!(map.url().contains("https://api.mapbox.com/"));
    assert!(map.to_string().starts_with("<img "));
    assert_eq!(map.viewport().to_string(), "4.56,1.23,15");
}

#[test]
fn static_area_map_from_empty_records() {
    ensure_env_token();
    let map = StaticMap::areas(&[], &MapOptions::default()).unwrap();

    assert!(map.url().contains("https://api.mapbox.com/"));
    assert!(map.url().contains("/0,0,0/"));
    assert!(map.to_string().starts_with("<img "));
}

#[test]
fn invalid_style_is_rejected() {
    let options = MapOptions {
        style: "custom".to_string(),
        ..MapOptions::default()
    };
    let error = StaticMap::build(MapKind::Point, &[], &options, Some(TOKEN)).unwrap_err();
    assert!(error.to_string().contains("Invalid style"));
}

#[test]
fn secret_token_is_rejected() {
    let options = MapOptions {
        access_token: Some("sk.token".to_string()),
        ..MapOptions::default()
    };
    let error = StaticMap::build(MapKind::Point, &[], &options, Some(TOKEN)).unwrap_err();
    assert!(matches!(error, MapError::SecretToken));
    assert!(error.to_string().contains("Expected public access token"));
}

#[test]
fn invalid_token_is_rejected() {
    let options = MapOptions {
        access_token: Some("token".to_string()),
        ..MapOptions::default()
    };
    let error = StaticMap::build(MapKind::Point, &[], &options, Some(TOKEN)).unwrap_err();
    assert!(error.to_string().contains("Invalid access token"));
}

#[test]
fn request_too_large_still_returns_a_map() {
    let records: Vec<Record> = (0..265)
        .map(|i| {
            let step = i as f64 * 0.000_137;
            Record::point(10.1234567 + step, 20.7654321 + step)
        })
        .collect();
    let map = StaticMap::build(MapKind::Point, &records, &MapOptions::default(), Some(TOKEN)).unwrap();

    assert!(map.exceeds_request_limit());
    assert!(map.url_2x().len() > 8192);
    assert!(map.to_string().starts_with("<img "));
}

#[test]
fn point_overlay_round_trips_to_one_feature_per_group() {
    let records = vec![
        Record::point(1.0, 2.0),
        Record::point(3.0, 4.0).with_color("#000000"),
        Record::point(5.0, 6.0),
        Record::point(7.0, 8.0).with_icon("park"),
        Record::point(9.0, 10.0).with_color("#000000"),
    ];
    let map = StaticMap::build(MapKind::Point, &records, &MapOptions::default(), Some(TOKEN)).unwrap();
    let geojson = decode_overlay(map.url());

    assert_eq!(geojson["type"], "FeatureCollection");
    let features = geojson["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(features[0]["geometry"]["coordinates"], json!([[2.0, 1.0], [6.0, 5.0]]));
    assert_eq!(features[1]["properties"], json!({"marker-color": "#000000"}));
    assert_eq!(
        features[2]["properties"],
        json!({"marker-color": "#f84d4d", "marker-symbol": "park"})
    );
    assert_eq!(map.viewport(), Viewport::Auto);
}

#[test]
fn area_overlay_round_trips_to_one_feature_per_record() {
    let records = vec![
        Record::area(square(0.0)),
        Record::area(square(2.0)).with_color("#ff00ff"),
        Record::area(square(4.0)),
    ];
    let map = StaticMap::build(MapKind::Area, &records, &MapOptions::default(), Some(TOKEN)).unwrap();
    let geojson = decode_overlay(map.url_2x());

    let features = geojson["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(features[1]["geometry"], square(2.0));
    assert_eq!(features[1]["properties"]["fill"], "#ff00ff");
    assert_eq!(features[2]["properties"]["stroke"], "#0090ff");
    assert!(map.url().ends_with("/auto/800x500?access_token=pk.token&padding=40"));
}

#[test]
fn records_deserialize_from_loose_json() {
    let records: Vec<Record> = serde_json::from_value(json!([
        {"lat": 40.7128, "lng": -74.006, "color": "#111111"},
        {"latitude": 34.0522, "lon": -118.2437, "x_icon": "star"}
    ]))
    .unwrap();
    let map = StaticMap::build(MapKind::Point, &records, &MapOptions::default(), Some(TOKEN)).unwrap();
    let geojson = decode_overlay(map.url());

    assert_eq!(
        geojson["features"][0]["geometry"]["coordinates"],
        json!([[-74.006, 40.7128]])
    );
    assert_eq!(geojson["features"][1]["properties"]["marker-symbol"], "star");
}

proptest! {
    #[test]
    fn public_tokens_pass_through(suffix in "[A-Za-z0-9._-]{0,40}") {
        let token = format!("pk.{suffix}");
        prop_assert_eq!(check_access_token(Some(token.as_str()), None).unwrap(), token.as_str());
    }

    #[test]
    fn secret_tokens_are_rejected(suffix in "[A-Za-z0-9._-]{0,40}") {
        let token = format!("sk.{suffix}");
        prop_assert!(matches!(check_access_token(Some(token.as_str()), Some(TOKEN)), Err(MapError::SecretToken)));
    }

    #[test]
    fn other_tokens_are_invalid(token in "[A-Za-z0-9._-]{1,40}") {
        prop_assume!(!token.starts_with("pk.") && !token.starts_with("sk."));
        prop_assert!(matches!(check_access_token(Some(token.as_str()), None), Err(MapError::InvalidToken)));
    }

    #[test]
    fn simple_styles_resolve_unchanged(owner in "[a-z0-9-]{1,16}", id in "[a-z0-9-]{1,16}") {
        let style = format!("{owner}/{id}");
        prop_assert_eq!(resolve_style(&style).unwrap(), style.clone());
        prop_assert_eq!(resolve_style(&format!("mapbox://styles/{style}")).unwrap(), style);
    }

    #[test]
    fn styles_without_one_separator_are_invalid(style in "[a-z0-9-]{0,16}(/[a-z0-9-]{0,8}){2,3}") {
        prop_assert!(matches!(resolve_style(&style), Err(MapError::InvalidStyle(_))));
    }

    #[test]
    fn rounding_stays_within_half_a_unit(value in -180.0f64..180.0) {
        let rounded = round_coordinate(value);
        prop_assert!((rounded - value).abs() <= 5.1e-8);
        prop_assert_eq!(round_coordinate(rounded), rounded);
    }

    #[test]
    fn feature_count_matches_distinct_groups(
        picks in prop::collection::vec((0usize..3, 0usize..3), 0..40)
    ) {
        let colors = ["#aa0000", "#00aa00", "#0000aa"];
        let icons = [None, Some("cafe"), Some("park")];
        let records: Vec<Record> = picks
            .iter()
            .enumerate()
            .map(|(i, (c, ic))| {
                let record = Record::point(i as f64 * 0.01, i as f64 * 0.02).with_color(colors[*c]);
                match icons[*ic] {
                    Some(icon) => record.with_icon(icon),
                    None => record,
                }
            })
            .collect();
        let distinct: HashSet<(usize, usize)> = picks.iter().copied().collect();

        let map = StaticMap::build(MapKind::Point, &records, &MapOptions::default(), Some(TOKEN)).unwrap();
        let geojson = decode_overlay(map.url());
        prop_assert_eq!(geojson["features"].as_array().unwrap().len(), distinct.len());
    }
}
