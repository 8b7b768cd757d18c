//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{parse_config, read_config, ApplicationCfg, InsetCfg, DEFAULT_CONFIG};
use std::env;

#[test]
fn test_default_config() {
    let config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "")
        .expect("parse_config returned Err");
    assert_eq!(config.draw.radius, Some(3));
    assert!(config.draw.grid_lines);
    assert!(config.draw.inset.is_empty());
    assert_eq!(config.explore.margin, 5.0);
}

#[test]
fn test_empty_config() {
    let config: ApplicationCfg = parse_config("".to_string(), "").unwrap();
    assert_eq!(config.draw.radius, None);
    assert!(config.draw.grid_lines);
    assert_eq!(config.explore.margin, 5.0);
}

#[test]
fn test_inset_table() {
    let toml = r#"
        [draw]
        radius = 4
        grid_lines = false

        [[draw.inset]]
        max_zoom = 12
        meters = 80.0

        [[draw.inset]]
        max_zoom = 16
        meters = 12.5
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.draw.radius, Some(4));
    assert!(!config.draw.grid_lines);
    assert_eq!(
        config.draw.inset,
        vec![
            InsetCfg {
                max_zoom: 12,
                meters: 80.0
            },
            InsetCfg {
                max_zoom: 16,
                meters: 12.5
            },
        ]
    );
}

#[test]
fn test_env_template() {
    env::set_var("TILE_HUNT_TEST_MARGIN", "7.5");
    let toml = r#"
        [explore]
        margin = {{ env.TILE_HUNT_TEST_MARGIN }}
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.explore.margin, 7.5);
}

#[test]
fn test_template_error() {
    let toml = r#"
        [explore]
        margin = {{ env.TILE_HUNT_UNDEFINED_VARIABLE }}
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert!(config.err().unwrap().starts_with("Template error: "));
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/core/mod.rs");
    assert!(config.err().unwrap().starts_with("src/core/mod.rs - "));

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!("Could not find config file!", config.err().unwrap());
}

#[test]
fn test_type_error() {
    let toml = r#"
        [draw]
        radius = "three"
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert!(config.err().unwrap().contains("radius"));
}
