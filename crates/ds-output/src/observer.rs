//! `RecordingObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ds_sim::{ActionApplied, SimObserver, Snapshot, TerminalReason, TickOutcome};

use crate::row::{ActionRow, SnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that records snapshots and applied actions to any
/// [`OutputWriter`].
///
/// A snapshot row is written every `snapshot_every` ticks, on the tick that
/// ends the story, and once more when the run ends unless the last row
/// already shows the final state.  Actions change the state without
/// advancing the tick counter, so a row is also owed after any action.
/// Every applied action gets a row.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  Check with [`take_error`][Self::take_error] once
/// the run returns.
pub struct RecordingObserver<W: OutputWriter> {
    writer:         W,
    snapshot_every: u64,
    last_written:   Option<u64>,
    /// State changed since the last snapshot row without a new tick.
    dirty:          bool,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> RecordingObserver<W> {
    /// `snapshot_every` of 0 is treated as 1.
    pub fn new(writer: W, snapshot_every: u64) -> Self {
        Self {
            writer,
            snapshot_every: snapshot_every.max(1),
            last_written:   None,
            dirty:          false,
            last_error:     None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_snapshot(&mut self, snapshot: &Snapshot) {
        if self.last_written == Some(snapshot.ticks) && !self.dirty {
            return;
        }
        self.last_written = Some(snapshot.ticks);
        self.dirty = false;
        let result = self.writer.write_snapshot(&SnapshotRow::from(snapshot));
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for RecordingObserver<W> {
    fn on_tick(&mut self, snapshot: &Snapshot, _outcome: &TickOutcome) {
        if snapshot.ticks % self.snapshot_every == 0 {
            self.write_snapshot(snapshot);
        }
    }

    fn on_action(&mut self, applied: &ActionApplied, snapshot: &Snapshot) {
        self.dirty = true;
        let result = self.writer.write_action(&ActionRow::new(snapshot.ticks, applied));
        self.store_err(result);
    }

    fn on_terminal(&mut self, _reason: TerminalReason, snapshot: &Snapshot) {
        self.write_snapshot(snapshot);
    }

    fn on_reset(&mut self) {
        self.last_written = None;
        self.dirty = true;
    }

    fn on_sim_end(&mut self, snapshot: &Snapshot) {
        self.write_snapshot(snapshot);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
