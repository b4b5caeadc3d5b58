//! CSV report output.
//!
//! The report file is the durable artifact of a run: one row per deployed
//! (or previewed) MCP. It is rewritten from scratch on every run.

use std::path::Path;

use csv::WriterBuilder;
use thiserror::Error;

use super::report::McpRecord;

/// Default output filename for the deploy report.
pub const DEFAULT_REPORT_PATH: &str = "deployed_mcps.csv";

/// Column headers of the report file.
const HEADERS: [&str; 4] = ["mcp", "description", "url", "num_tools"];

/// Error writing the CSV report.
#[derive(Debug, Error)]
#[error("Failed to write {path}: {source}")]
pub struct ReportWriteError {
    /// Path that could not be written.
    pub path: String,
    /// Underlying CSV or IO error.
    pub source: csv::Error,
}

/// Write deploy records to `path` as CSV, overwriting any existing file.
///
/// The header row is always written, so a run with nothing to record still
/// produces a well-formed file.
pub fn write_records(path: &Path, records: &[McpRecord]) -> Result<(), ReportWriteError> {
    let wrap = |source: csv::Error| ReportWriteError {
        path: path.display().to_string(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(wrap)?;
    writer.write_record(HEADERS).map_err(wrap)?;
    for record in records {
        writer.serialize(record).map_err(wrap)?;
    }
    writer
        .flush()
        .map_err(|source| wrap(csv::Error::from(source)))?;
    Ok(())
}
