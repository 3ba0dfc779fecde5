//! Runtime configuration

use std::path::PathBuf;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Backing JSON file holding every session and the current plan.
    pub data_file: PathBuf,
    /// Directory served for non-API GET requests.
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5050,
            data_file: PathBuf::from("fitness-data.json"),
            static_dir: PathBuf::from("static"),
        }
    }
}
