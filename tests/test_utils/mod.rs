//! Shared doubles for exercising the handler through its public API.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use gelfhook::{Sink, Transport};

/// Thread-safe wrapper around a byte buffer used as a connection sink.
///
/// The inner `Arc<Mutex<Vec<u8>>>` is kept private so tests can't mutate
/// the captured bytes without locking.
#[derive(Clone, Default)]
pub struct SharedBuf {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuf {
    /// Return a snapshot of the buffer contents.
    #[allow(dead_code)]
    pub fn contents(&self) -> Vec<u8> {
        self.buffer.lock().expect("SharedBuf mutex poisoned").clone()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .expect("SharedBuf mutex poisoned")
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Transport that connects instantly and records everything written.
pub struct CapturingTransport {
    capture: SharedBuf,
}

impl CapturingTransport {
    #[allow(dead_code)]
    pub fn new(capture: SharedBuf) -> Self {
        Self { capture }
    }
}

impl Transport for CapturingTransport {
    fn connect(&self, _timeout: Duration) -> io::Result<Sink> {
        Ok(Box::new(self.capture.clone()))
    }
}

/// Transport that refuses every connection attempt.
#[allow(dead_code)]
pub struct RefusingTransport;

impl Transport for RefusingTransport {
    fn connect(&self, _timeout: Duration) -> io::Result<Sink> {
        Err(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
    }
}

/// Strip the frame terminator and decode the JSON body.
#[allow(dead_code)]
pub fn decode_frame(frame: &[u8]) -> serde_json::Value {
    let (last, body) = frame.split_last().expect("frame is not empty");
    assert_eq!(*last, 0, "frame must end with the NUL terminator");
    serde_json::from_slice(body).expect("frame body is valid JSON")
}
