//! Durable storage for the workout document
//!
//! One JSON file holds everything: the session history keyed by calendar
//! date and the single current plan. The store rewrites the whole file on
//! every save and migrates the legacy flat layout the first time it loads
//! one.

mod document;
mod error;
mod file;
mod migrate;


pub use document::{Document, Session};
pub use error::{StoreError, StoreResult};
pub use file::DocumentStore;
