//! Flightdeck telemetry API: library crate for the mock telemetry server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `fd-e2e-tests`) can reach `AppState`, `build_router` and the
//! server lifecycle helpers.

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod routes;
pub mod server;
pub mod state;
