//! # Trainlog
//!
//! Personal fitness-tracking backend: workout sessions and the current plan
//! live in a single JSON file and are served to a browser client over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! trainlog [--port 5050] [--data-file fitness-data.json] [--static-dir static]
//! ```
//!
//! ## Modules
//!
//! - `config` - Runtime configuration and defaults
//! - `server` - HTTP API, CORS and cache headers, static file fallback
//! - `stats` - Workout totals and current-streak computation
//! - `store` - Durable JSON document storage with legacy-format migration
pub mod config;
pub mod server;
pub mod stats;
pub mod store;
