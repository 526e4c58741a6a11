//! GELF delivery handler.
//!
//! This module defines [`GelfHandler`], the adapter that serialises
//! [`GelfRecord`](crate::log_record::GelfRecord) values into
//! NUL-terminated GELF JSON frames and forwards them to a remote endpoint
//! over TLS. A single lazily-dialled connection is reused across calls and
//! re-established with bounded retries when an attempt or write fails;
//! exhausted deliveries are reported through the `log` facade and returned
//! to the caller as error values.

mod builder;
mod config;
mod connection;
mod handler;
mod serialise;
mod transport;


use std::io;

use thiserror::Error;

pub use builder::GelfHandlerBuilder;
pub use config::{
    DEFAULT_CONNECT_ATTEMPTS, DEFAULT_CONNECT_BACKOFF, DEFAULT_CONNECT_TIMEOUT,
    DEFAULT_SEND_ATTEMPTS, Endpoint, GelfHandlerConfig, RetryPolicy,
};
pub use connection::{ConnectError, ConnectionManager};
pub use handler::{DeliveryError, DeliveryFailure, GelfHandler};
pub use serialise::{GELF_VERSION, TOKEN_FIELD};
pub use transport::{Sink, TlsOptions, TlsTransport, Transport};

/// Errors that may occur while building a handler.
#[derive(Debug, Error)]
pub enum HandlerBuildError {
    /// Invalid user supplied configuration.
    #[error("invalid handler configuration: {0}")]
    InvalidConfig(String),
    /// Underlying I/O error whilst creating the handler.
    #[error(transparent)]
    Io(#[from] io::Error),
}
