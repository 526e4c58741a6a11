//! Configuration consumed by the GELF handler.
//!
//! `GelfHandlerBuilder` constructs these values before passing them to
//! [`GelfHandler`](super::GelfHandler) for runtime use.

use std::fmt;
use std::time::Duration;

use crate::level::GelfLevel;

use super::HandlerBuildError;
use super::transport::TlsOptions;

/// Default per-attempt connection timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Default pause between failed connection attempts.
pub const DEFAULT_CONNECT_BACKOFF: Duration = Duration::from_millis(200);
/// Default bound on connection attempts per dial.
pub const DEFAULT_CONNECT_ATTEMPTS: u32 = 5;
/// Default bound on connect-and-write attempts per record.
pub const DEFAULT_SEND_ATTEMPTS: u32 = 5;

/// Remote aggregation endpoint, parsed from a `host:port` string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// Hostname or IP address to connect to.
    pub host: String,
    /// TCP port number.
    pub port: u16,
}

impl Endpoint {
    /// Parse a `host:port` address string.
    pub fn parse(addr: &str) -> Result<Self, HandlerBuildError> {
        let Some((host, port)) = addr.rsplit_once(':') else {
            return Err(HandlerBuildError::InvalidConfig(format!(
                "endpoint address {addr:?} must have the form host:port"
            )));
        };
        if host.trim().is_empty() {
            return Err(HandlerBuildError::InvalidConfig(
                "endpoint host must not be empty".into(),
            ));
        }
        let port = port.parse::<u16>().map_err(|_| {
            HandlerBuildError::InvalidConfig(format!("invalid endpoint port in {addr:?}"))
        })?;
        Ok(Self {
            host: host.to_owned(),
            port,
        })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Bounds and timings for the connect and send retry loops.
///
/// The backoff is a fixed pause taken between connection attempts; there is
/// no overall deadline across the retry sequence.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    pub connect_timeout: Duration,
    pub backoff: Duration,
    pub connect_attempts: u32,
    pub send_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            backoff: DEFAULT_CONNECT_BACKOFF,
            connect_attempts: DEFAULT_CONNECT_ATTEMPTS,
            send_attempts: DEFAULT_SEND_ATTEMPTS,
        }
    }
}

/// Configuration object describing how to construct a [`GelfHandler`](super::GelfHandler).
#[derive(Clone, Debug)]
pub struct GelfHandlerConfig {
    pub endpoint: Endpoint,
    /// Shared authentication token stamped into every payload.
    pub token: String,
    /// Local host identifier stamped into every payload.
    pub host: String,
    pub tls: TlsOptions,
    /// Least severe level still forwarded.
    pub min_level: GelfLevel,
    pub retry: RetryPolicy,
}

/// Defaults target a local GELF listener; production callers override the
/// endpoint and credentials through the builder.
impl Default for GelfHandlerConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint {
                host: "localhost".into(),
                port: 12201,
            },
            token: String::new(),
            host: String::new(),
            tls: TlsOptions::default(),
            min_level: GelfLevel::Debug,
            retry: RetryPolicy::default(),
        }
    }
}
