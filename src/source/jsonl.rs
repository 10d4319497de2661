//! JSON-lines record cache
//!
//! One raw record per line, as relays deliver them. The file is re-read on
//! every fetch; lines that do not parse are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::RecordSource;
use crate::error::SourceResult;
use crate::types::{RawRecord, RecordFilter};

/// Read-only record source backed by a JSON-lines file
#[derive(Debug, Clone)]
pub struct JsonlSource {
    path: PathBuf,
}

impl JsonlSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every parseable record. A missing file is an empty cache.
    pub fn load_records(&self) -> SourceResult<Vec<RawRecord>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Record cache not found");
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            if line.trim().is_empty() {
                continue;
            }

            match RawRecord::from_json_line(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = line_num + 1,
                        error = %e,
                        "Failed to parse record"
                    );
                }
            }
        }

        Ok(records)
    }
}

impl RecordSource for JsonlSource {
    fn fetch(&self, filter: &RecordFilter) -> SourceResult<Vec<RawRecord>> {
        let records = self.load_records()?;
        Ok(filter.apply(&records))
    }
}
