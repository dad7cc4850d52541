//! Shared application state for the Axum server.
//!
//! Immutable after construction, so cloning per request is just two `Arc` bumps.

use std::sync::Arc;

use fd_protocol::NodeIdentity;

use crate::generator::{RandomGenerator, ReadingGenerator};

#[derive(Clone)]
pub struct AppState {
    /// Node name and version resolved at startup.
    pub identity: Arc<NodeIdentity>,
    /// Source of per-request readings.
    pub generator: Arc<dyn ReadingGenerator>,
}

impl AppState {
    /// State with random readings for the given identity.
    pub fn new(identity: NodeIdentity) -> Self {
        Self::with_generator(identity, RandomGenerator)
    }

    pub fn with_generator(
        identity: NodeIdentity,
        generator: impl ReadingGenerator + 'static,
    ) -> Self {
        Self {
            identity: Arc::new(identity),
            generator: Arc::new(generator),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(NodeIdentity::default())
    }
}
