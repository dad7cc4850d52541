//! End-to-end tests for the Flightdeck telemetry service.
//!
//! All tests live under `tests/`; this crate ships no runtime code.
