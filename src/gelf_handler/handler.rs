//! Public handler type exported by the crate.

use std::{fmt, io};

use log::warn;
use parking_lot::Mutex;
use thiserror::Error;

use crate::{level::GelfLevel, log_record::GelfRecord};

use super::{
    config::GelfHandlerConfig,
    connection::{ConnectError, ConnectionManager},
    serialise::encode_frame,
    transport::{TlsTransport, Transport},
};

/// One failed step within the send loop.
#[derive(Debug, Error)]
pub enum DeliveryFailure {
    #[error(transparent)]
    Connect(#[from] ConnectError),
    #[error("write failed: {0}")]
    Write(#[from] io::Error),
}

/// Errors surfaced to callers of [`GelfHandler::fire`].
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The record's fields cannot be encoded as GELF JSON. Returned
    /// immediately; nothing is sent.
    #[error("failed to encode log record: {0}")]
    Encode(#[from] serde_json::Error),
    /// Every send attempt failed. Carries the last underlying failure.
    #[error("delivery to {endpoint} failed after {attempts} attempts: {source}")]
    Exhausted {
        endpoint: String,
        attempts: u32,
        #[source]
        source: DeliveryFailure,
    },
}

/// Handler forwarding records to a GELF endpoint as NUL-terminated JSON
/// frames over TLS.
///
/// The connection manager is guarded by a mutex, so `fire` may be called
/// from multiple threads; deliveries are serialised on the single
/// connection handle.
pub struct GelfHandler {
    token: String,
    host: String,
    min_level: GelfLevel,
    send_attempts: u32,
    endpoint: String,
    manager: Mutex<ConnectionManager>,
}

impl GelfHandler {
    /// Construct a handler using the TLS transport described by `config`.
    pub fn with_config(config: GelfHandlerConfig) -> Self {
        let transport = TlsTransport::new(config.endpoint.clone(), config.tls.clone());
        Self::with_transport(config, Box::new(transport))
    }

    /// Construct a handler around an arbitrary transport.
    ///
    /// Lets tests substitute scripted connectors; production callers
    /// normally go through [`GelfHandlerBuilder`](super::GelfHandlerBuilder).
    pub fn with_transport(config: GelfHandlerConfig, transport: Box<dyn Transport>) -> Self {
        let endpoint = config.endpoint.to_string();
        let send_attempts = config.retry.send_attempts;
        let manager = ConnectionManager::new(transport, config.endpoint, config.retry);
        Self {
            token: config.token,
            host: config.host,
            min_level: config.min_level,
            send_attempts,
            endpoint,
            manager: Mutex::new(manager),
        }
    }

    /// Forward one record to the remote endpoint.
    ///
    /// Each attempt dials (or reuses) the connection and writes the whole
    /// frame; a failed write invalidates the handle so the next attempt
    /// reconnects. A failed delivery leaves the handler usable; the next
    /// call starts from a clean slate.
    pub fn fire(&self, record: &GelfRecord) -> Result<(), DeliveryError> {
        let frame = encode_frame(record, &self.token, &self.host)?;
        let mut manager = self.manager.lock();
        let mut last_failure: Option<DeliveryFailure> = None;
        for _ in 0..self.send_attempts {
            let sink = match manager.ensure_connected() {
                Ok(sink) => sink,
                Err(err) => {
                    last_failure = Some(err.into());
                    continue;
                }
            };
            match sink.write_all(&frame).and_then(|()| sink.flush()) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    manager.invalidate();
                    last_failure = Some(DeliveryFailure::Write(err));
                }
            }
        }
        let source = last_failure.unwrap_or_else(|| {
            DeliveryFailure::Write(io::Error::other("no delivery attempts were made"))
        });
        warn!(
            "GelfHandler: giving up on record delivery to {}: {source}",
            self.endpoint
        );
        Err(DeliveryError::Exhausted {
            endpoint: self.endpoint.clone(),
            attempts: self.send_attempts,
            source,
        })
    }

    /// Levels this handler forwards, most severe first.
    pub fn applicable_levels(&self) -> Vec<GelfLevel> {
        GelfLevel::ALL
            .into_iter()
            .filter(|level| *level <= self.min_level)
            .collect()
    }

    /// Least severe level still forwarded.
    pub fn min_level(&self) -> GelfLevel {
        self.min_level
    }
}

impl fmt::Debug for GelfHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GelfHandler")
            .field("endpoint", &self.endpoint)
            .field("min_level", &self.min_level)
            .field("send_attempts", &self.send_attempts)
            .finish()
    }
}
