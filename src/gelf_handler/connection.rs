//! Connection lifecycle management for the GELF handler.

use std::{io, thread};

use log::debug;
use thiserror::Error;

use super::{
    config::{Endpoint, RetryPolicy},
    transport::{Sink, Transport},
};

/// Every attempt to reach the remote endpoint failed.
#[derive(Debug, Error)]
#[error("unable to connect to {endpoint} after {attempts} attempts: {source}")]
pub struct ConnectError {
    pub endpoint: String,
    pub attempts: u32,
    #[source]
    pub source: io::Error,
}

/// Owns the single lazily-dialled connection to the remote endpoint.
///
/// An existing handle is returned without a liveness probe; staleness is
/// only detected by a failed write, after which the caller invalidates the
/// handle. Not safe for concurrent use without an external lock.
pub struct ConnectionManager {
    transport: Box<dyn Transport>,
    endpoint: Endpoint,
    policy: RetryPolicy,
    conn: Option<Sink>,
}

impl ConnectionManager {
    pub fn new(transport: Box<dyn Transport>, endpoint: Endpoint, policy: RetryPolicy) -> Self {
        Self {
            transport,
            endpoint,
            policy,
            conn: None,
        }
    }

    /// Return the live connection, dialling a fresh one when none is held.
    pub fn ensure_connected(&mut self) -> Result<&mut Sink, ConnectError> {
        let sink = match self.conn.take() {
            Some(sink) => sink,
            None => self.establish()?,
        };
        Ok(self.conn.insert(sink))
    }

    /// Drop the held connection so the next call dials fresh.
    pub fn invalidate(&mut self) {
        self.conn = None;
    }

    /// Whether a connection handle is currently held.
    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    fn establish(&self) -> Result<Sink, ConnectError> {
        let mut last_err = None;
        for attempt in 1..=self.policy.connect_attempts {
            if attempt > 1 {
                thread::sleep(self.policy.backoff);
            }
            match self.transport.connect(self.policy.connect_timeout) {
                Ok(sink) => return Ok(sink),
                Err(err) => {
                    debug!(
                        "gelfhook: connection attempt {attempt}/{} to {} failed: {err}",
                        self.policy.connect_attempts, self.endpoint
                    );
                    last_err = Some(err);
                }
            }
        }
        Err(ConnectError {
            endpoint: self.endpoint.to_string(),
            attempts: self.policy.connect_attempts,
            source: last_err
                .unwrap_or_else(|| io::Error::other("no connection attempts were made")),
        })
    }
}
