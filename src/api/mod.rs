//! HTTP API and request processing

pub mod handler;
pub mod helpers;
pub mod ui;

// Re-export the router for convenience
pub use handler::{AppState, router};
