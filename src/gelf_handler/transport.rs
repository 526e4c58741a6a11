//! Transport primitives for the GELF handler.

use std::{
    io::{self, Write},
    net::{SocketAddr, TcpStream, ToSocketAddrs},
    time::Duration,
};

use native_tls::TlsConnector;

use super::config::Endpoint;

/// Writable stream handed back by a [`Transport`].
pub type Sink = Box<dyn Write + Send>;

/// Connection factory used by the handler.
///
/// The production implementation dials TLS over TCP; tests substitute
/// scripted implementations to exercise the retry behaviour.
pub trait Transport: Send {
    /// Establish a fresh connection within the per-attempt timeout.
    fn connect(&self, timeout: Duration) -> io::Result<Sink>;
}

/// TLS connection options.
#[derive(Clone, Debug, Default)]
pub struct TlsOptions {
    /// Domain presented during the TLS handshake. Defaults to the endpoint
    /// host when unset.
    pub domain: Option<String>,
    /// Skip certificate validation when true (intended for tests).
    pub insecure_skip_verify: bool,
}

impl TlsOptions {
    fn connector(&self) -> io::Result<TlsConnector> {
        let mut builder = TlsConnector::builder();
        if self.insecure_skip_verify {
            builder.danger_accept_invalid_certs(true);
            builder.danger_accept_invalid_hostnames(true);
        }
        builder.build().map_err(io::Error::other)
    }
}

/// Production transport: TCP with a TLS session on top.
pub struct TlsTransport {
    endpoint: Endpoint,
    tls: TlsOptions,
}

impl TlsTransport {
    pub fn new(endpoint: Endpoint, tls: TlsOptions) -> Self {
        Self { endpoint, tls }
    }

    fn socket_addrs(&self) -> io::Result<Vec<SocketAddr>> {
        (self.endpoint.host.as_str(), self.endpoint.port)
            .to_socket_addrs()
            .map(|iter| iter.collect())
    }

    fn connect_tcp(&self, timeout: Duration) -> io::Result<TcpStream> {
        let mut last_err = None;
        for addr in self.socket_addrs()? {
            match TcpStream::connect_timeout(&addr, timeout) {
                Ok(stream) => {
                    stream.set_nonblocking(false)?;
                    return Ok(stream);
                }
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("no addresses resolved for {}", self.endpoint),
            )
        }))
    }

    fn handshake_domain(&self) -> &str {
        self.tls.domain.as_deref().unwrap_or(&self.endpoint.host)
    }
}

impl Transport for TlsTransport {
    fn connect(&self, timeout: Duration) -> io::Result<Sink> {
        let stream = self.connect_tcp(timeout)?;
        let connector = self.tls.connector()?;
        // The handshake itself must also respect the attempt timeout.
        stream.set_read_timeout(Some(timeout))?;
        stream.set_write_timeout(Some(timeout))?;
        let stream = connector
            .connect(self.handshake_domain(), stream)
            .map_err(io::Error::other)?;
        let tcp_ref = stream.get_ref();
        tcp_ref.set_read_timeout(None)?;
        tcp_ref.set_write_timeout(None)?;
        Ok(Box::new(stream))
    }
}
