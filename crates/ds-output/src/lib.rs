//! `ds-output` — recording of simulation runs.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`row`]      | `SnapshotRow`, `ActionRow` plain data rows                |
//! | [`writer`]   | `OutputWriter` trait                                      |
//! | [`csv`]      | `CsvWriter` → `snapshots.csv`, `actions.csv`              |
//! | [`observer`] | `RecordingObserver<W>` — `SimObserver` → `OutputWriter`   |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ds_output::{CsvWriter, RecordingObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RecordingObserver::new(writer, 60);
//! sim.run_ticks(10_000, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RecordingObserver;
pub use row::{ActionRow, SnapshotRow};
pub use writer::OutputWriter;
