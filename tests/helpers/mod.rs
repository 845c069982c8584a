//! Test helpers: app construction with a stub relay transport.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use neonfolio::config::{Config, ObservabilityConfig, RelayConfig, ServerConfig};
use neonfolio_contact::{MessageRelay, OutboundMessage, RelayError};

/// In-memory relay: records every delivery, optionally fails each one.
#[derive(Default)]
pub struct StubRelay {
    pub fail: bool,
    pub calls: AtomicUsize,
    pub last: Mutex<Option<OutboundMessage>>,
}

impl StubRelay {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageRelay for StubRelay {
    async fn deliver(&self, message: &OutboundMessage) -> Result<(), RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(message.clone());

        if self.fail {
            return Err(RelayError::Rejected(reqwest::StatusCode::BAD_GATEWAY));
        }

        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        relay: RelayConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

/// Build the app around a stub relay and hand back both.
pub fn test_app(fail: bool) -> (axum::Router, Arc<StubRelay>) {
    let relay = Arc::new(StubRelay {
        fail,
        ..Default::default()
    });

    let app = neonfolio::create_app(test_config(), relay.clone());

    (app, relay)
}
