//! Integration tests for tg-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use tg_core::Point3;
    use tg_tour::{TourEvent, TourPhase};

    use crate::csv::CsvWriter;
    use crate::row::{EventRow, SnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(tick: u64) -> SnapshotRow {
        SnapshotRow {
            tick,
            position:             Point3::new(1.0, 0.5, -2.25),
            heading:              0.5,
            phase:                TourPhase::Moving,
            current_index:        2,
            is_narration_playing: false,
            is_paused:            false,
            is_visitor_near:      true,
        }
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("tour_snapshots.csv").exists());
        assert!(dir.path().join("tour_events.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tour_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "tick", "x", "y", "z", "heading", "phase", "current_index",
                "narration_playing", "paused", "visitor_near",
            ]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tour_events.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "event", "detail"]);
    }

    #[test]
    fn csv_snapshot_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshot(&snap_row(5)).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "tour_snapshots.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "5");        // tick
        assert_eq!(&rows[0][3], "-2.250");   // z
        assert_eq!(&rows[0][5], "moving");   // phase
        assert_eq!(&rows[0][6], "2");        // current_index
        assert_eq!(&rows[0][9], "1");        // visitor_near
    }

    #[test]
    fn csv_event_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_event(&EventRow::new(3, &TourEvent::WaypointReached(1))).unwrap();
        w.write_event(&EventRow::new(9, &TourEvent::TourCompleted)).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "tour_events.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "waypoint_reached");
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[1][0], "9");
        assert_eq!(&rows[1][2], "");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        // Writing after finish is fine; it just needs another finish.
        w.write_snapshot(&snap_row(1)).unwrap();
        w.finish().unwrap();
        assert_eq!(records(&dir, "tour_snapshots.csv").len(), 1);
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use tg_audio::NullAudio;
    use tg_core::{Point3, TourConfig};
    use tg_sequence::{Waypoint, WaypointSequence};
    use tg_tour::{TourBuilder, TourObserver};

    use crate::{CsvWriter, EventRow, OutputError, OutputResult, OutputWriter, SnapshotRow, TourLogObserver};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config() -> TourConfig {
        TourConfig {
            speed: 10.0,
            start_position: Point3::ORIGIN,
            ..TourConfig::default()
        }
    }

    fn two_stops() -> WaypointSequence {
        WaypointSequence::new(
            "two",
            None,
            vec![
                Waypoint::stop(Point3::new(3.0, 0.0, 0.0)),
                Waypoint::stop(Point3::new(3.0, 0.0, 4.0)),
            ],
        )
        .unwrap()
    }

    /// Fails every write with an I/O error carrying the write's ordinal.
    struct FailingWriter {
        writes: usize,
    }

    impl FailingWriter {
        fn fail(&mut self) -> OutputResult<()> {
            self.writes += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.writes))))
        }
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshot(&mut self, _row: &SnapshotRow) -> OutputResult<()> {
            self.fail()
        }
        fn write_event(&mut self, _row: &EventRow) -> OutputResult<()> {
            self.fail()
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut tour = TourBuilder::new(config(), NullAudio::default())
            .observer(TourLogObserver::new(writer))
            .sequence(two_stops())
            .build()
            .unwrap();

        tour.play().unwrap();
        // Stop A on tick 3, stop B (and completion) on tick 7.
        for _ in 0..7 {
            tour.tick(100.0, None);
        }
        assert!(!tour.is_active());
        tour.observer_mut().finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tour_snapshots.csv")).unwrap();
        let snaps: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(snaps.len(), 7);
        assert_eq!(&snaps[6][5], "idle");

        let mut rdr = csv::Reader::from_path(dir.path().join("tour_events.csv")).unwrap();
        let events: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&events[0][0], "1");
        assert_eq!(&events[0][2], "idle->moving");

        let reached: Vec<_> = events.iter().filter(|r| &r[1] == "waypoint_reached").collect();
        assert_eq!(reached.len(), 2);
        assert_eq!(&reached[0][0], "3");
        assert_eq!(&reached[1][0], "7");

        let completed: Vec<_> = events.iter().filter(|r| &r[1] == "tour_completed").collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(&completed[0][0], "7");
    }

    #[test]
    fn snapshot_interval() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = TourLogObserver::with_interval(writer, 2);
        let mut tour = TourBuilder::new(config(), NullAudio::default())
            .sequence(two_stops())
            .build()
            .unwrap();
        tour.play().unwrap();
        for _ in 0..7 {
            let r = tour.tick(100.0, None);
            obs.on_tick_end(&r);
        }
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tour_snapshots.csv")).unwrap();
        let ticks: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(ticks, ["2", "4", "6"]);
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = TourLogObserver::new(FailingWriter { writes: 0 });
        obs.on_waypoint_reached(0);
        obs.on_tour_completed();

        let err = obs.take_error().expect("stored error");
        assert_eq!(err.to_string(), "I/O error: write 1");
        assert!(obs.take_error().is_none());
        assert!(obs.finish().is_ok());
        assert_eq!(obs.writer().writes, 2);
    }
}
