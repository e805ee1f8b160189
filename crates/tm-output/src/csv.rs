//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `frames.csv`
//! - `runs.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{FrameRow, OutputResult, RunRow};

/// Writes frame and run rows to two CSV files.
pub struct CsvTraceWriter {
    frames:   Writer<File>,
    runs:     Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut frames = Writer::from_path(dir.join("frames.csv"))?;
        frames.write_record(["run_id", "frame", "elapsed_ms", "lng", "lat", "remaining_secs"])?;

        let mut runs = Writer::from_path(dir.join("runs.csv"))?;
        runs.write_record(["run_id", "outcome", "frames", "final_lng", "final_lat"])?;

        Ok(Self {
            frames,
            runs,
            finished: false,
        })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_frame(&mut self, row: &FrameRow) -> OutputResult<()> {
        self.frames.write_record(&[
            row.run_id.to_string(),
            row.frame.to_string(),
            format!("{:.3}", row.elapsed_ms),
            format!("{:.9}", row.lng),
            format!("{:.9}", row.lat),
            row.remaining_secs.to_string(),
        ])?;
        Ok(())
    }

    fn write_run(&mut self, row: &RunRow) -> OutputResult<()> {
        let (lng, lat) = match row.final_position {
            Some((lng, lat)) => (format!("{lng:.9}"), format!("{lat:.9}")),
            None => (String::new(), String::new()),
        };
        self.runs.write_record(&[
            row.run_id.to_string(),
            row.outcome.to_string(),
            row.frames.to_string(),
            lng,
            lat,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        self.runs.flush()?;
        Ok(())
    }
}
