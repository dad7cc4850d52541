//! Sources of flight readings.
//!
//! The router holds a `dyn ReadingGenerator` so tests can pin readings while
//! production draws them from the thread-local RNG.

use fd_protocol::FlightReadings;

/// Produces one set of readings per request.
pub trait ReadingGenerator: Send + Sync {
    fn sample(&self) -> FlightReadings;
}

/// Uniform random readings from `rand::thread_rng`.
///
/// The thread RNG is seeded from the OS once per thread and never reseeded
/// per request.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomGenerator;

impl ReadingGenerator for RandomGenerator {
    fn sample(&self) -> FlightReadings {
        FlightReadings::sample(&mut rand::thread_rng())
    }
}

/// Always returns the same readings.
#[derive(Debug, Clone, Copy)]
pub struct FixedGenerator(pub FlightReadings);

impl ReadingGenerator for FixedGenerator {
    fn sample(&self) -> FlightReadings {
        self.0
    }
}
