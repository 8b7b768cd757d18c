//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Draw cycle statistics

use stats::{MinMax, OnlineStats};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

type MeasurementType = u64;

struct Collector {
    online: OnlineStats,
    minmax: MinMax<MeasurementType>,
}

impl Collector {
    fn new() -> Collector {
        Collector {
            online: OnlineStats::new(),
            minmax: MinMax::new(),
        }
    }
}

#[derive(PartialEq, Debug)]
pub struct StatResults {
    pub len: usize,
    pub min: MeasurementType,
    pub max: MeasurementType,
    pub mean: f64,
    pub stddev: f64,
}

impl StatResults {
    fn empty() -> StatResults {
        StatResults {
            len: 0,
            min: 0,
            max: 0,
            mean: 0.0,
            stddev: 0.0,
        }
    }
}

/// Measurements grouped by key, e.g. `cluster.tiles` or `time.outline`
#[derive(Default)]
pub struct Statistics(BTreeMap<String, Collector>);

impl Default for Collector {
    fn default() -> Collector {
        Collector::new()
    }
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics(BTreeMap::new())
    }
    pub fn add(&mut self, key: &str, value: MeasurementType) {
        let collector = self.0.entry(key.to_string()).or_default();
        collector.online.add(value);
        collector.minmax.add(value);
    }
    /// Record an elapsed time in microseconds
    pub fn add_duration(&mut self, key: &str, elapsed: Duration) {
        self.add(key, elapsed.as_micros() as MeasurementType);
    }
    pub fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|k| k.as_str()).collect()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Results for `key`, all zero if nothing was recorded
    pub fn results(&self, key: &str) -> StatResults {
        match self.0.get(key) {
            Some(collector) => StatResults {
                len: collector.minmax.len(),
                min: *collector.minmax.min().unwrap_or(&0),
                max: *collector.minmax.max().unwrap_or(&0),
                mean: collector.online.mean(),
                stddev: collector.online.stddev(),
            },
            None => StatResults::empty(),
        }
    }
}

impl fmt::Display for StatResults {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "n={} min={} max={} mean={:.2} +/- {:.2}",
            self.len, self.min, self.max, self.mean, self.stddev
        )
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for key in self.0.keys() {
            writeln!(f, "{}: {}", key, self.results(key))?;
        }
        Ok(())
    }
}

#[test]
fn usage() {
    let mut stats = Statistics::new();
    assert!(stats.is_empty());
    stats.add("cluster.tiles", 1);
    assert_eq!(stats.results("cluster.tiles").mean, 1.0);
    stats.add("cluster.tiles", 2);
    assert_eq!(stats.results("cluster.tiles").mean, 1.5);
    stats.add("cluster.rings", 2);
    assert_eq!(stats.results("cluster.rings").mean, 2.0);
    stats.add("cluster.tiles", 3);
    let tiles = stats.results("cluster.tiles");
    assert_eq!(tiles.mean, 2.0);
    assert_eq!(tiles.stddev, 0.816496580927726);
    assert_eq!(tiles.len, 3);
    assert_eq!(tiles.min, 1);
    assert_eq!(tiles.max, 3);
    assert_eq!(stats.keys(), vec!["cluster.rings", "cluster.tiles"]);

    assert_eq!(stats.results("cluster.squares"), StatResults::empty());
}

#[test]
fn durations() {
    let mut stats = Statistics::new();
    stats.add_duration("time.outline", Duration::from_millis(3));
    stats.add_duration("time.outline", Duration::from_micros(1000));
    let res = stats.results("time.outline");
    assert_eq!(res.min, 1000);
    assert_eq!(res.max, 3000);
    assert_eq!(
        format!("{}", stats),
        "time.outline: n=2 min=1000 max=3000 mean=2000.00 +/- 1000.00\n"
    );
}
