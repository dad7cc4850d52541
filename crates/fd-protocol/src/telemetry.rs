use rand::Rng;
use serde::{Deserialize, Serialize};

/// Node name reported when `NODE_NAME` is unset or empty.
pub const DEFAULT_NODE_NAME: &str = "local-dev";

/// Cabin pressure (psi) below which the status flips to `WARNING`.
pub const WARNING_PRESSURE_THRESHOLD: f64 = 14.5;

/// Nominal cabin pressure at sea level, in psi.
const NOMINAL_CABIN_PRESSURE: f64 = 14.7;
/// Full width of the simulated pressure band around nominal.
const PRESSURE_SPREAD: f64 = 0.5;
/// Fuel never drops more than this many percent below full.
const MAX_FUEL_BURN: u8 = 30;
const FULL_TANK: u8 = 100;
const DEGREES_PER_TURN: u16 = 360;

/// One telemetry snapshot served by `GET /api/telemetry`.
///
/// Built fresh for every request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryRecord {
    /// Remaining fuel in percent (70..=100).
    pub fuel_level: u8,
    /// Cabin pressure in psi, within [14.45, 14.95).
    pub cabin_pressure: f64,
    /// Heading in whole degrees (0..=359).
    pub trajectory: u16,
    /// Derived from `cabin_pressure`, see [`MissionStatus::from_cabin_pressure`].
    pub status: MissionStatus,
    /// Deployed application version, possibly empty.
    pub version: String,
    /// Identity of the replica that answered.
    pub node_name: String,
}

impl TelemetryRecord {
    /// Combine sampled readings with the identity of the serving node.
    pub fn from_readings(readings: FlightReadings, identity: &NodeIdentity) -> Self {
        Self {
            fuel_level: readings.fuel_level,
            cabin_pressure: readings.cabin_pressure,
            trajectory: readings.trajectory,
            status: MissionStatus::from_cabin_pressure(readings.cabin_pressure),
            version: identity.version.clone(),
            node_name: identity.node_name.clone(),
        }
    }
}

/// Overall mission health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionStatus {
    Nominal,
    Warning,
}

impl MissionStatus {
    pub fn from_cabin_pressure(psi: f64) -> Self {
        if psi < WARNING_PRESSURE_THRESHOLD {
            Self::Warning
        } else {
            Self::Nominal
        }
    }
}

/// The randomly varying part of a [`TelemetryRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightReadings {
    pub fuel_level: u8,
    pub cabin_pressure: f64,
    pub trajectory: u16,
}

impl FlightReadings {
    /// Draw one set of readings, each uniformly distributed over its range.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let fuel_level = FULL_TANK - rng.gen_range(0..MAX_FUEL_BURN);
        let jitter: f64 = rng.gen_range(0.0..1.0);
        let cabin_pressure =
            NOMINAL_CABIN_PRESSURE + jitter * PRESSURE_SPREAD - PRESSURE_SPREAD / 2.0;
        let trajectory = rng.gen_range(0..DEGREES_PER_TURN);

        Self {
            fuel_level,
            cabin_pressure,
            trajectory,
        }
    }
}

/// Per-process identity stamped onto every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdentity {
    pub node_name: String,
    pub version: String,
}

impl NodeIdentity {
    /// Resolve identity from optional raw values.
    ///
    /// A missing or empty node name becomes [`DEFAULT_NODE_NAME`]; a missing
    /// version becomes the empty string.
    pub fn new(node_name: Option<String>, version: Option<String>) -> Self {
        let node_name = node_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_NODE_NAME.to_string());
        Self {
            node_name,
            version: version.unwrap_or_default(),
        }
    }
}

impl Default for NodeIdentity {
    fn default() -> Self {
        Self::new(None, None)
    }
}
