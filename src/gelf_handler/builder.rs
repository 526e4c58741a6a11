//! Builder for [`GelfHandler`](crate::gelf_handler::GelfHandler).
//!
//! Exposes TLS configuration, the minimum forwarded level, and
//! retry-policy tuning on top of the required endpoint, token, and source
//! host.

use std::time::Duration;

use crate::level::GelfLevel;

use super::{
    HandlerBuildError,
    config::{Endpoint, GelfHandlerConfig},
    handler::GelfHandler,
    transport::TlsOptions,
};

macro_rules! ensure_positive {
    ($value:expr, $field:expr) => {{
        if $value == 0 {
            Err(HandlerBuildError::InvalidConfig(format!(
                "{} must be greater than zero",
                $field
            )))
        } else {
            Ok($value)
        }
    }};
}

macro_rules! option_setter {
    ($(#[$meta:meta])* $fn_name:ident, $field:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $fn_name(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };
}

/// Builder for constructing [`GelfHandler`] instances.
#[derive(Clone, Debug)]
pub struct GelfHandlerBuilder {
    addr: String,
    token: String,
    host: String,
    tls: TlsOptions,
    min_level: Option<GelfLevel>,
    connect_timeout_ms: Option<u64>,
    backoff_ms: Option<u64>,
    connect_attempts: Option<u32>,
    send_attempts: Option<u32>,
}

impl GelfHandlerBuilder {
    /// Start a builder for the given `host:port` endpoint, authentication
    /// token, and local host identifier.
    pub fn new(addr: impl Into<String>, token: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            token: token.into(),
            host: host.into(),
            tls: TlsOptions::default(),
            min_level: None,
            connect_timeout_ms: None,
            backoff_ms: None,
            connect_attempts: None,
            send_attempts: None,
        }
    }

    /// Override the TLS handshake options. The default validates against
    /// the platform trust store and presents the endpoint host.
    pub fn with_tls(mut self, tls: TlsOptions) -> Self {
        self.tls = tls;
        self
    }

    /// Forward only records at or above `level`. Defaults to
    /// [`GelfLevel::Debug`], the most verbose setting.
    pub fn with_min_level(mut self, level: GelfLevel) -> Self {
        self.min_level = Some(level);
        self
    }

    option_setter!(
        #[doc = "Override the per-attempt connection timeout."]
        with_connect_timeout_ms,
        connect_timeout_ms,
        u64
    );
    option_setter!(
        #[doc = "Override the pause between failed connection attempts."]
        with_backoff_ms,
        backoff_ms,
        u64
    );
    option_setter!(
        #[doc = "Override the bound on connection attempts per dial."]
        with_connect_attempts,
        connect_attempts,
        u32
    );
    option_setter!(
        #[doc = "Override the bound on connect-and-write attempts per record."]
        with_send_attempts,
        send_attempts,
        u32
    );

    fn validate(&self) -> Result<(), HandlerBuildError> {
        if let Some(timeout) = self.connect_timeout_ms {
            ensure_positive!(timeout, "connect_timeout_ms")?;
        }
        if let Some(backoff) = self.backoff_ms {
            ensure_positive!(backoff, "backoff_ms")?;
        }
        if let Some(attempts) = self.connect_attempts {
            ensure_positive!(attempts, "connect_attempts")?;
        }
        if let Some(attempts) = self.send_attempts {
            ensure_positive!(attempts, "send_attempts")?;
        }
        Ok(())
    }

    fn build_config(&self) -> Result<GelfHandlerConfig, HandlerBuildError> {
        self.validate()?;
        let mut config = GelfHandlerConfig {
            endpoint: Endpoint::parse(&self.addr)?,
            token: self.token.clone(),
            host: self.host.clone(),
            tls: self.tls.clone(),
            ..GelfHandlerConfig::default()
        };
        if let Some(level) = self.min_level {
            config.min_level = level;
        }
        if let Some(timeout) = self.connect_timeout_ms {
            config.retry.connect_timeout = Duration::from_millis(timeout);
        }
        if let Some(backoff) = self.backoff_ms {
            config.retry.backoff = Duration::from_millis(backoff);
        }
        if let Some(attempts) = self.connect_attempts {
            config.retry.connect_attempts = attempts;
        }
        if let Some(attempts) = self.send_attempts {
            config.retry.send_attempts = attempts;
        }
        Ok(config)
    }

    /// Validate the configuration and construct the handler.
    pub fn build(&self) -> Result<GelfHandler, HandlerBuildError> {
        Ok(GelfHandler::with_config(self.build_config()?))
    }
}
