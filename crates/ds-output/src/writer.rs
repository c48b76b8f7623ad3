//! The `OutputWriter` trait implemented by recording backends.

use crate::{ActionRow, OutputResult, SnapshotRow};

/// A sink for recorded rows.
///
/// Errors surface here; [`RecordingObserver`][crate::RecordingObserver]
/// keeps the first one for [`take_error`][crate::RecordingObserver::take_error].
pub trait OutputWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()>;

    fn write_action(&mut self, row: &ActionRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
