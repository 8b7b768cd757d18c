//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ApplicationCfg {
    #[serde(default)]
    pub draw: DrawCfg,
    #[serde(default)]
    pub explore: ExploreCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DrawCfg {
    /// Number of tiles drawn around the current tile (clamped to 2..5, default 3)
    pub radius: Option<i32>,
    /// Draw lines between adjacent tiles
    #[serde(default = "default_grid_lines")]
    pub grid_lines: bool,
    /// Outline inset by map zoom level
    #[serde(default)]
    pub inset: Vec<InsetCfg>,
}

impl Default for DrawCfg {
    fn default() -> DrawCfg {
        DrawCfg {
            radius: None,
            grid_lines: default_grid_lines(),
            inset: Vec::new(),
        }
    }
}

pub fn default_grid_lines() -> bool {
    true
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct InsetCfg {
    /// Highest map zoom level this inset applies to
    pub max_zoom: u8,
    /// Inset in meters
    pub meters: f64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ExploreCfg {
    /// Distance in meters a position must keep from the tile border
    #[serde(default = "default_margin")]
    pub margin: f64,
}

impl Default for ExploreCfg {
    fn default() -> ExploreCfg {
        ExploreCfg {
            margin: default_margin(),
        }
    }
}

pub const DEFAULT_MARGIN: f64 = 5.0;

pub fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

pub const DEFAULT_CONFIG: &'static str = r#"
[draw]
radius = 3
grid_lines = true

[explore]
margin = 5.0
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
///
/// The configuration is rendered as template first, with environment
/// variables available as `{{env.VARNAME}}`.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let env: HashMap<String, String> = env::vars().collect();
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
