//! Snapshot sinks: where the loop thread publishes each frame.

use std::io::Write;

use tracing::debug;

use plaza_core::state::FrameSnapshot;

/// Receives every snapshot the loop produces, on the loop thread.
pub trait SnapshotSink: Send + 'static {
    fn publish(&mut self, snapshot: &FrameSnapshot);
}

impl<F> SnapshotSink for F
where
    F: FnMut(&FrameSnapshot) + Send + 'static,
{
    fn publish(&mut self, snapshot: &FrameSnapshot) {
        self(snapshot)
    }
}

/// Writes one JSON document per line.
pub struct JsonLinesSink<W> {
    writer: W,
    failed: bool,
}

impl<W: Write + Send + 'static> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + 'static> SnapshotSink for JsonLinesSink<W> {
    fn publish(&mut self, snapshot: &FrameSnapshot) {
        if self.failed {
            return;
        }
        let result = serde_json::to_writer(&mut self.writer, snapshot)
            .map_err(std::io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"))
            .and_then(|()| self.writer.flush());
        if let Err(e) = result {
            // Reader went away (closed pipe); stop writing but keep the scene alive.
            debug!(error = %e, "snapshot sink closed");
            self.failed = true;
        }
    }
}
