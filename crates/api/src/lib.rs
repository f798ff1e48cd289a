//! HTTP API: server configuration, routing, and request/response mapping.
//!
//! The API hosts the recommendation core. It owns the catalog and the registry
//! of sessions; all ranking, explanation and session logic lives in the
//! domain crates.

pub mod app;
pub mod config;
