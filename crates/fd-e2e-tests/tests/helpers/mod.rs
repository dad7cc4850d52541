//! Shared test harness for E2E tests.
//!
//! Boots the real router on an ephemeral loopback port and talks to it over
//! TCP with `reqwest`, exercising the same bind/serve path as the binary.

#![allow(dead_code)]

use std::net::SocketAddr;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use fd_protocol::NodeIdentity;
use fd_telemetry_api::config::ServiceConfig;
use fd_telemetry_api::error::ServerError;
use fd_telemetry_api::routes::build_router;
use fd_telemetry_api::server;
use fd_telemetry_api::state::AppState;

/// A running telemetry server bound to `127.0.0.1:<ephemeral>`.
pub struct TestServer {
    /// Address the listener actually bound.
    pub addr: SocketAddr,
    /// Shared HTTP client.
    pub client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    /// Start a server configured from the given environment pairs.
    pub async fn from_env_pairs(pairs: &[(&str, &str)]) -> Self {
        let owned: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = ServiceConfig::from_lookup(|key| {
            owned
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
        .unwrap();
        Self::start(AppState::new(config.identity())).await
    }

    /// Start a server with default identity (`local-dev`, empty version).
    pub async fn with_defaults() -> Self {
        Self::start(AppState::new(NodeIdentity::default())).await
    }

    /// Start a server around an arbitrary state.
    pub async fn start(state: AppState) -> Self {
        let config = ServiceConfig {
            host: "127.0.0.1".into(),
            port: 0,
            ..ServiceConfig::default()
        };
        let listener = server::bind(&config).await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (tx, rx) = oneshot::channel::<()>();
        let app = build_router(state);
        let handle = tokio::spawn(server::serve(listener, app, async move {
            let _ = rx.await;
        }));

        Self {
            addr,
            client: reqwest::Client::new(),
            shutdown: Some(tx),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET `path` and return the raw response.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    /// GET `/api/telemetry` and parse the body as JSON.
    pub async fn telemetry_json(&self) -> serde_json::Value {
        let response = self.get("/api/telemetry").await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.unwrap()
    }

    /// Trigger graceful shutdown and wait for the serve loop to finish.
    pub async fn stop(mut self) -> Result<(), ServerError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap()
    }
}

/// Assert the documented bounds and the status invariant on one record.
pub fn assert_record_valid(json: &serde_json::Value) {
    let fuel = json["fuelLevel"].as_u64().expect("fuelLevel is an integer");
    let pressure = json["cabinPressure"].as_f64().expect("cabinPressure is a number");
    let trajectory = json["trajectory"].as_u64().expect("trajectory is an integer");
    let status = json["status"].as_str().expect("status is a string");

    assert!((70..=100).contains(&fuel), "fuelLevel {fuel}");
    assert!((14.45..14.95).contains(&pressure), "cabinPressure {pressure}");
    assert!(trajectory <= 359, "trajectory {trajectory}");

    let expected = if pressure < 14.5 { "WARNING" } else { "NOMINAL" };
    assert_eq!(status, expected, "status for pressure {pressure}");
}
