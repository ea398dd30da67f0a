//! JSON-lines `ResponseSink` adapter.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tracing::warn;

use crate::domain::ports::{LoginResponse, ResponseSink};

/// Sink writing each response as one JSON document followed by a newline.
///
/// The sink contract has no error channel, so serialisation and I/O
/// failures are logged and the response is dropped.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W> JsonLinesSink<W> {
    /// Wrap `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> JsonLinesSink<W>
where
    W: Write,
{
    fn write_line(writer: &mut W, response: &LoginResponse) -> std::io::Result<()> {
        serde_json::to_writer(&mut *writer, response)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl<W> ResponseSink for JsonLinesSink<W>
where
    W: Write + Send,
{
    fn send(&self, response: LoginResponse) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(error) = Self::write_line(&mut writer, &response) {
            warn!(%error, "failed to write login response");
        }
    }
}
