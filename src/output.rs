//! Console rendering for course reports.
//!
//! Supports the plain three-line summary and pretty-printed JSON.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::report::CourseReport;

/// Writes the three summary lines of `report`, one per line.
pub fn write_text<W: Write>(writer: &mut W, report: &CourseReport) -> Result<()> {
    for line in report.lines() {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `report` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(writer: &mut W, report: &CourseReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Logs the report using Rust's debug pretty-print format.
pub fn log_pretty(report: &CourseReport) {
    debug!("{:#?}", report);
}
