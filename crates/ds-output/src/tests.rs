//! Integration tests for ds-output.

#[cfg(test)]
mod csv_tests {
    use ds_core::{ActionId, Activity, Room};
    use ds_sim::{SimStatus, TerminalReason};
    use tempfile::TempDir;

    use crate::csv::{ACTION_HEADER, CsvWriter, SNAPSHOT_HEADER};
    use crate::row::{ActionRow, SnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(tick: u64, status: SimStatus) -> SnapshotRow {
        SnapshotRow {
            tick,
            day:       1,
            hour:      7,
            minute:    5,
            energy:    79.5,
            sleep:     69.5,
            health:    84.75,
            happiness: 74.6,
            location:  Room::Living,
            activity:  Activity::Relaxing,
            status,
        }
    }

    fn read(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn files_and_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, SNAPSHOT_HEADER);

        let mut rdr = csv::Reader::from_path(dir.path().join("actions.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ACTION_HEADER);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("first");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("snapshots.csv").exists());
    }

    #[test]
    fn snapshot_row_format() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshot(&snap_row(5, SimStatus::Running)).unwrap();
        w.write_snapshot(&snap_row(6, SimStatus::Terminal(TerminalReason::SleepDepleted))).unwrap();
        w.finish().unwrap();

        let rows = read(dir.path().join("snapshots.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "5");
        assert_eq!(&rows[0][2], "07:05");
        assert_eq!(&rows[0][3], "79.50");
        assert_eq!(&rows[0][5], "84.75");
        assert_eq!(&rows[0][7], "living");
        assert_eq!(&rows[0][8], "relaxing");
        assert_eq!(&rows[0][9], "running");
        assert_eq!(&rows[0][10], "");
        assert_eq!(&rows[1][9], "ended");
        assert_eq!(&rows[1][10], "sleep");
    }

    #[test]
    fn action_row_format() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = ActionRow {
            tick:         12,
            action:       ActionId::YogaMat,
            start_day:    1,
            start_minute: 23 * 60 + 30,
            end_day:      2,
            end_minute:   15,
            energy:       50.0,
            sleep:        60.0,
            health:       70.0,
            happiness:    80.0,
        };
        w.write_action(&row).unwrap();
        w.finish().unwrap();

        let rows = read(dir.path().join("actions.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "yoga-mat");
        assert_eq!(&rows[0][3], "23:30");
        assert_eq!(&rows[0][4], "2");
        assert_eq!(&rows[0][5], "00:15");
        assert_eq!(&rows[0][9], "80.00");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use ds_core::{ActionId, Activity, Needs, SimConfig};
    use ds_sim::{Sim, SimBuilder, SimObserver, SimulationState};

    use crate::observer::RecordingObserver;
    use crate::row::{ActionRow, SnapshotRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult};

    /// Keeps rows in memory.
    #[derive(Default)]
    struct MemWriter {
        snapshots: Vec<SnapshotRow>,
        actions:   Vec<ActionRow>,
        finished:  usize,
    }

    impl OutputWriter for MemWriter {
        fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
            self.snapshots.push(*row);
            Ok(())
        }

        fn write_action(&mut self, row: &ActionRow) -> OutputResult<()> {
            self.actions.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// Fails every write.
    struct BrokenWriter;

    impl OutputWriter for BrokenWriter {
        fn write_snapshot(&mut self, _row: &SnapshotRow) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }

        fn write_action(&mut self, _row: &ActionRow) -> OutputResult<()> {
            Err(std::io::Error::other("second failure").into())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn snapshots_at_interval_and_end() {
        let mut sim = Sim::default();
        let mut obs = RecordingObserver::new(MemWriter::default(), 10);
        sim.run_ticks(25, &mut obs);

        let w = obs.into_writer();
        let ticks: Vec<u64> = w.snapshots.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![10, 20, 25]);
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn end_snapshot_not_duplicated() {
        let mut sim = Sim::default();
        let mut obs = RecordingObserver::new(MemWriter::default(), 5);
        sim.run_ticks(10, &mut obs);
        let ticks: Vec<u64> = obs.into_writer().snapshots.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![5, 10]);
    }

    #[test]
    fn terminal_tick_always_recorded() {
        let state = SimulationState::new().with_needs(Needs::new(0.25, 50.0, 50.0, 50.0));
        let mut sim = SimBuilder::new(SimConfig::default()).initial_state(state).build().unwrap();
        let mut obs = RecordingObserver::new(MemWriter::default(), 1_000);
        sim.run_ticks(100, &mut obs);

        let w = obs.into_writer();
        assert_eq!(w.snapshots.len(), 1);
        assert_eq!(w.snapshots[0].tick, 3);
        assert!(matches!(w.snapshots[0].status, ds_sim::SimStatus::Terminal(_)));
    }

    #[test]
    fn actions_recorded() {
        let mut sim = Sim::default();
        let mut obs = RecordingObserver::new(MemWriter::default(), 1);
        sim.tick_with(&mut obs);
        sim.perform_with(ActionId::Bed, &mut obs).unwrap();
        let _ = sim.perform_with(ActionId::Bed, &mut obs);

        let w = obs.into_writer();
        assert_eq!(w.actions.len(), 1);
        let row = w.actions[0];
        assert_eq!(row.tick, 1);
        assert_eq!(row.action, ActionId::Bed);
        assert_eq!(row.start_minute, 7 * 60 + 1);
        assert_eq!(row.end_minute, 15 * 60 + 1);
        assert_eq!(row.energy, 100.0);
    }

    #[test]
    fn final_row_follows_late_action() {
        let mut sim = Sim::default();
        let mut obs = RecordingObserver::new(MemWriter::default(), 1);
        sim.tick_with(&mut obs);
        sim.perform_with(ActionId::Bed, &mut obs).unwrap();
        obs.on_sim_end(&sim.snapshot());

        let w = obs.into_writer();
        assert_eq!(w.snapshots.len(), 2);
        let last = w.snapshots[1];
        assert_eq!(last.tick, 1);
        assert_eq!(last.hour, sim.time().hour());
        assert_eq!(last.hour, 15);
        assert_eq!(last.energy, 100.0);
        assert_eq!(last.activity, Activity::Sleeping);
    }

    #[test]
    fn idle_end_is_not_rewritten() {
        let mut sim = Sim::default();
        let mut obs = RecordingObserver::new(MemWriter::default(), 1);
        sim.tick_with(&mut obs);
        obs.on_sim_end(&sim.snapshot());
        obs.on_sim_end(&sim.snapshot());
        assert_eq!(obs.into_writer().snapshots.len(), 1);
    }

    #[test]
    fn keeps_first_error() {
        let mut sim = Sim::default();
        let mut obs = RecordingObserver::new(BrokenWriter, 1);
        sim.tick_with(&mut obs);
        sim.perform_with(ActionId::Water, &mut obs).unwrap();

        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "disk full"),
            other => panic!("expected the first I/O error, got {other:?}"),
        }
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn csv_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = Sim::default();
        let mut obs = RecordingObserver::new(CsvWriter::new(dir.path()).unwrap(), 60);
        sim.perform_with(ActionId::Shower, &mut obs).unwrap();
        sim.run_ticks(120, &mut obs);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 2);
        let mut rdr = csv::Reader::from_path(dir.path().join("actions.csv")).unwrap();
        assert_eq!(rdr.records().count(), 1);
    }
}
