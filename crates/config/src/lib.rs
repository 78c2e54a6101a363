//! Provides tools for managing portal configuration data
//!
//! The [`Config`] struct holds every knob the portal pages used to hard-code: where the
//! snapshot files live, where rendered fragments go, the ladder type bracket, poll and
//! refresh periods, and the class name alias table for known-bad upstream data.
//!
//! The config is stored as a json file, a missing file yields [`Config::default`].
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use util::{read_json, write_json};

/// Portal configuration data
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Base url the snapshot files are served from
    pub data_url: String,
    /// Directory rendered html fragments are written to
    pub out_dir: String,
    /// Inclusive ladder type bracket counted as "Expansion"
    pub expansion_types: (i64, i64),
    /// The single ladder type shown on the ranking page
    pub ranking_ladder_type: i64,
    /// Seconds between d2gs status polls
    pub d2gs_poll_secs: u64,
    /// Seconds between page rebuilds
    pub page_refresh_secs: u64,
    /// Use the month bucket when formatting server/pvpgn uptime
    pub long_uptime_format: bool,
    /// Extra class abbreviation aliases, keyed by the raw upstream code.
    ///
    /// The defaults cover two corrupted codes observed in live snapshot data. New aliases
    /// belong here, not in the resolver.
    pub class_aliases: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let mut class_aliases = HashMap::new();
        class_aliases.insert("ZGANSASIN".to_string(), "Assassin".to_string());
        class_aliases.insert("SORSI SOR".to_string(), "Sorceress".to_string());
        Self {
            data_url: "http://127.0.0.1/data".to_string(),
            out_dir: "./public".to_string(),
            expansion_types: (27, 34),
            ranking_ladder_type: 27,
            d2gs_poll_secs: 30,
            page_refresh_secs: 60,
            long_uptime_format: true,
            class_aliases,
        }
    }
}

impl Config {
    /// Load config from file
    pub fn new(file: &str) -> Option<Self> {
        read_json!(file, Self::default())
    }

    /// Write config to file
    pub fn store(&self, path: &str) {
        write_json!(path, &self, "config");
    }
}
