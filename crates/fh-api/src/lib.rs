//! Firmware auto-healer API: library crate for the HTTP server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `fh-e2e-tests`) can access `AppState`, `build_router` and the
//! config types.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod upload;
