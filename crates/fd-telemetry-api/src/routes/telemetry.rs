//! Telemetry snapshot endpoint.

use axum::Json;
use axum::extract::State;

use fd_protocol::TelemetryRecord;

use crate::state::AppState;

/// GET /api/telemetry — synthesize one telemetry record.
///
/// Request body and query string are ignored.
pub async fn get_telemetry(State(state): State<AppState>) -> Json<TelemetryRecord> {
    let record = TelemetryRecord::from_readings(state.generator.sample(), &state.identity);

    tracing::debug!(
        status = ?record.status,
        cabin_pressure = record.cabin_pressure,
        node_name = %record.node_name,
        "telemetry generated"
    );

    Json(record)
}
