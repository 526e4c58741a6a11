//! GELF log shipping over TLS.
//!
//! gelfhook forwards structured log records to a GELF-compatible
//! aggregation endpoint (Graylog, OVHcloud Logs Data Platform, and
//! friends) over a TLS-secured TCP stream. Each record becomes a flat
//! JSON object terminated by a single NUL byte; the authentication token
//! and source host configured at construction are stamped into every
//! payload, overriding caller-supplied fields of the same name.
//!
//! The handler keeps one lazily-dialled connection and retries the
//! connect-and-write sequence a bounded number of times per record,
//! reconnecting after failed writes. Failures are returned to the caller
//! and reported through the `log` facade; a failed delivery never leaves
//! the handler unusable.
//!
//! ```no_run
//! use gelfhook::{GelfHandlerBuilder, GelfLevel, GelfRecord};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let handler = GelfHandlerBuilder::new("logs.example.com:12202", "token", "web-1")
//!     .with_min_level(GelfLevel::Informational)
//!     .build()?;
//! let record = GelfRecord::new(GelfLevel::Error, "[disk] volume /var full")
//!     .with_field("mount", "/var");
//! handler.fire(&record)?;
//! # Ok(())
//! # }
//! ```

mod gelf_handler;
mod level;
mod log_record;

pub use gelf_handler::{
    ConnectError, ConnectionManager, DEFAULT_CONNECT_ATTEMPTS, DEFAULT_CONNECT_BACKOFF,
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_SEND_ATTEMPTS, DeliveryError, DeliveryFailure, Endpoint,
    GELF_VERSION, GelfHandler, GelfHandlerBuilder, GelfHandlerConfig, HandlerBuildError,
    RetryPolicy, Sink, TOKEN_FIELD, TlsOptions, TlsTransport, Transport,
};
pub use level::GelfLevel;
pub use log_record::GelfRecord;
