//! Integration tests for tm-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvTraceWriter;
    use crate::row::{FrameRow, RunOutcome, RunRow};
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn frame_row(run_id: u32, frame: u64) -> FrameRow {
        FrameRow {
            run_id,
            frame,
            elapsed_ms:     frame as f64 * 16.0,
            lng:            1.5,
            lat:            -0.25,
            remaining_secs: 3.0,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvTraceWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("frames.csv").exists());
        assert!(dir.path().join("runs.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["run_id", "frame", "elapsed_ms", "lng", "lat", "remaining_secs"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("runs.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["run_id", "outcome", "frames", "final_lng", "final_lat"]);
    }

    #[test]
    fn frame_rows_written() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_frame(&frame_row(0, 1)).unwrap();
        w.write_frame(&frame_row(0, 2)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][1], "2");
        assert_eq!(&rows[1][2], "32.000");
        assert_eq!(&rows[1][3], "1.500000000");
        assert_eq!(&rows[1][4], "-0.250000000");
    }

    #[test]
    fn run_without_position_leaves_blank_columns() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_run(&RunRow {
            run_id:         4,
            outcome:        RunOutcome::Cancelled,
            frames:         0,
            final_position: None,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("runs.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][1], "cancelled");
        assert_eq!(&rows[0][3], "");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tm_animate::{Animator, Pacing, RecordingSink};
    use tm_core::{FrameTime, Path};
    use tm_frame::FrameQueue;

    use crate::row::{FrameRow, RunOutcome, RunRow};
    use crate::writer::TraceWriter;
    use crate::{OutputResult, TraceObserver};

    #[derive(Default)]
    struct MemoryWriter {
        frames:   Vec<FrameRow>,
        runs:     Vec<RunRow>,
        finished: usize,
    }

    impl TraceWriter for MemoryWriter {
        fn write_frame(&mut self, row: &FrameRow) -> OutputResult<()> {
            self.frames.push(*row);
            Ok(())
        }
        fn write_run(&mut self, row: &RunRow) -> OutputResult<()> {
            self.runs.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn records_frames_and_outcomes() {
        let path = Path::from_lng_lat(&[[0.0, 0.0], [2.0, 4.0]]).unwrap();
        let mut anim = Animator::new(RecordingSink::new(), FrameQueue::new())
            .with_observer(TraceObserver::new(MemoryWriter::default()));

        let first = anim.start(path.clone(), Pacing::per_segment_ms(100.0)).unwrap();
        anim.tick(FrameTime(0.0));
        anim.tick(FrameTime(50.0));
        let second = anim.restart(&first);
        anim.tick(FrameTime(60.0));
        anim.tick(FrameTime(160.0));

        let (_, _, mut obs) = anim.into_parts();
        obs.finish();
        assert!(obs.take_error().is_none());
        let w = obs.into_writer();

        assert_eq!(w.frames.len(), 4);
        assert_eq!(w.finished, 1);
        assert_eq!(
            w.runs,
            vec![
                RunRow {
                    run_id:         first.id().0,
                    outcome:        RunOutcome::Cancelled,
                    frames:         2,
                    final_position: Some((1.0, 2.0)),
                },
                RunRow {
                    run_id:         second.id().0,
                    outcome:        RunOutcome::Completed,
                    frames:         2,
                    final_position: Some((2.0, 4.0)),
                },
            ]
        );
    }

    #[test]
    fn csv_trace_end_to_end() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let writer = crate::CsvTraceWriter::new(dir.path()).unwrap();
        let path = Path::from_lng_lat(&[[0.0, 0.0], [0.0, 0.01]]).unwrap();
        let mut anim = Animator::new(RecordingSink::new(), FrameQueue::new())
            .with_observer(TraceObserver::new(writer));

        let run = anim.start(path, Pacing::constant_kmh(3_600.0)).unwrap();
        let mut now = 0.0;
        while anim.is_live(&run) {
            anim.tick(FrameTime(now));
            now += 100.0;
        }
        let (sink, _, mut obs) = anim.into_parts();
        obs.finish();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        assert_eq!(rdr.records().count(), sink.writes());
        let mut runs = csv::Reader::from_path(dir.path().join("runs.csv")).unwrap();
        let rows: Vec<_> = runs.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "completed");
    }
}
