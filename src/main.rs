//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use std::env;
use std::io::Write;
use std::process;
use tile_grid::{tile_for_coordinate, Corner};
use tile_hunt_core::core::stats::Statistics;
use tile_hunt_core::core::{read_config, ApplicationCfg, Config};
use tile_hunt_core::square::{largest_square, largest_square_dense};
use tile_hunt_service::draw_service::{DrawService, DrawSettings};
use tile_hunt_service::explore::{ExploreSettings, ExploreTracker};
use tile_hunt_service::geojson::draw_cycle_to_geojson;
use tile_hunt_service::tiles::read_tile_sets;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        let ts = time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            ts,
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log = match (args.value_of("loglevel"), env::var("RUST_LOG")) {
        (None, Ok(rust_log_env)) => rust_log_env,
        (loglevel, _) => loglevel.unwrap_or("info").to_string(),
    };
    builder.parse_filters(&rust_log);

    builder.init();
}

fn parse_floats(numlist: &str, name: &str) -> Result<Vec<f64>, String> {
    numlist
        .split(",")
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| format!("Error parsing '{}' as list of float values", name))
        })
        .collect()
}

fn parse_coord(args: &ArgMatches<'_>, name: &str) -> Result<(f64, f64), String> {
    let numlist = args
        .value_of(name)
        .ok_or(format!("Missing '{}' coordinate", name))?;
    match parse_floats(numlist, name)?.as_slice() {
        [lat, lon] => Ok((*lat, *lon)),
        _ => Err(format!("Error parsing '{}' as lat,lon pair", name)),
    }
}

fn parse_bool(args: &ArgMatches<'_>, name: &str, default: bool) -> Result<bool, String> {
    args.value_of(name).map_or(Ok(default), |s| {
        s.parse::<bool>()
            .map_err(|_| format!("Error parsing '{}' as boolean value", name))
    })
}

fn config_from_args(args: &ArgMatches<'_>) -> Result<ApplicationCfg, String> {
    match args.value_of("config") {
        Some(path) => {
            info!("Reading configuration from '{}'", path);
            read_config(path)
        }
        None => Ok(ApplicationCfg::default()),
    }
}

fn tile(args: &ArgMatches<'_>) -> Result<(), String> {
    let (lat, lon) = parse_coord(args, "coord")?;
    let tile = tile_for_coordinate(lat, lon);
    let tl = tile.corner(Corner::TopLeft);
    let br = tile.corner(Corner::BottomRight);
    let center = tile.center();
    println!("tile: {}/{}", tile.x, tile.y);
    println!("bounds: {},{} {},{}", tl.lat, tl.lon, br.lat, br.lon);
    println!("center: {},{}", center.lat, center.lon);
    Ok(())
}

fn square(args: &ArgMatches<'_>) -> Result<(), String> {
    let tiles = read_tile_sets(args.value_of("tiles").unwrap_or_default())?;
    let square = if parse_bool(args, "dense", false)? {
        largest_square_dense(&tiles.explored)
    } else {
        largest_square(&tiles.explored)
    };
    match square {
        Some(square) => println!("{}", square),
        None => println!("no explored tiles"),
    }
    Ok(())
}

fn draw(args: &ArgMatches<'_>) -> Result<(), String> {
    let config = config_from_args(args)?;
    let settings = DrawSettings::from_config(&config)?;
    let tiles = read_tile_sets(args.value_of("tiles").unwrap_or_default())?;
    let (lat, lon) = parse_coord(args, "center")?;
    let zoom = args.value_of("zoom").map_or(Ok(16.0), |s| {
        s.parse::<f64>()
            .map_err(|_| "Error parsing 'zoom' as float value".to_string())
    })?;
    let with_stats = parse_bool(args, "stats", false)?;

    let square = largest_square(&tiles.explored);
    let center = tile_for_coordinate(lat, lon);
    let service = DrawService::new(settings);
    let mut stats = Statistics::new();
    let cycle = service.draw(
        &tiles.explored,
        &tiles.recent,
        square.as_ref(),
        &center,
        zoom,
        if with_stats { Some(&mut stats) } else { None },
    );
    println!("{}", draw_cycle_to_geojson(&cycle));
    if with_stats {
        eprint!("{}", stats);
    }
    Ok(())
}

fn explore(args: &ArgMatches<'_>) -> Result<(), String> {
    let config = config_from_args(args)?;
    let settings = ExploreSettings::from_config(&config)?;
    let mut tiles = read_tile_sets(args.value_of("tiles").unwrap_or_default())?;
    let points = parse_floats(args.value_of("points").unwrap_or_default(), "points")?;
    if points.len() % 2 != 0 {
        return Err("Error parsing 'points' as list of lat,lon pairs".to_string());
    }
    let mut tracker = ExploreTracker::new(tiles.explored.clone(), &settings);
    for pair in points.chunks(2) {
        if let Some(tile) = tracker.visit(pair[0], pair[1]) {
            tiles.recent.insert(tile);
        }
    }
    if let Some(square) = tracker.square() {
        info!("largest square: {}", square);
    }
    tiles.explored = tracker.explored().clone();
    println!("{}", tiles.to_json());
    Ok(())
}

fn gen_config() -> String {
    let mut config = DrawSettings::gen_config();
    config.push_str(&ExploreSettings::gen_config());
    config
}

fn main() {
    dotenv().ok();
    let mut app = App::new("tile_hunt")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("outlines, grid lines and largest square of explored map tiles")
        .subcommand(SubCommand::with_name("tile")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--coord=<lat,lon> 'Geographic position'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Tile of a position"))
        .subcommand(SubCommand::with_name("square")
                        .args_from_usage("--tiles=<FILE> 'Tile set file'
                                              --dense=[false|true] 'Use dense bounding box search'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Largest explored square"))
        .subcommand(SubCommand::with_name("draw")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --tiles=<FILE> 'Tile set file'
                                              --center=<lat,lon> 'Current position'
                                              --zoom=[LEVEL] 'Map zoom level (Default: 16)'
                                              --stats=[false|true] 'Print draw statistics'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Draw cycle as GeoJSON"))
        .subcommand(SubCommand::with_name("explore")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --tiles=<FILE> 'Tile set file'
                                              --points=<lat1,lon1,lat2,lon2,..> 'Visited positions'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Explore tiles along visited positions"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => {
            let result = match matches.subcommand() {
                ("tile", Some(sub_m)) => {
                    init_logger(sub_m);
                    tile(sub_m)
                }
                ("square", Some(sub_m)) => {
                    init_logger(sub_m);
                    square(sub_m)
                }
                ("draw", Some(sub_m)) => {
                    init_logger(sub_m);
                    draw(sub_m)
                }
                ("explore", Some(sub_m)) => {
                    init_logger(sub_m);
                    explore(sub_m)
                }
                ("genconfig", Some(sub_m)) => {
                    init_logger(sub_m);
                    println!("{}", gen_config());
                    Ok(())
                }
                _ => {
                    let _ = app.print_help();
                    println!("");
                    Ok(())
                }
            };
            if let Err(e) = result {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    }
}
