//! JSONL loading module
//!
//! Reads one JSONL file into an ordered sequence of records, tolerating
//! malformed lines and missing files.

use colored::Colorize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{DsMergeError, Result};

/// One dataset record: a schema-less JSON object.
///
/// Keys keep their original order (serde_json `preserve_order`), so records
/// round-trip byte-for-byte apart from whitespace.
pub type Record = Map<String, Value>;

/// Load a single JSONL dataset file.
///
/// Never fails: a missing file, an unreadable file, or malformed lines all
/// degrade to warnings, and the file contributes whatever parsed cleanly
/// (possibly nothing).
pub fn load_dataset(path: &Path) -> Vec<Record> {
    if !path.exists() {
        let err = DsMergeError::MissingSource {
            path: path.to_path_buf(),
        };
        println!("{} Warning: {}", "⚠️".yellow(), err.to_string().yellow());
        return Vec::new();
    }

    match read_records(path) {
        Ok(entries) => {
            println!(
                "Loaded {} entries from {}",
                entries.len().to_string().bright_green(),
                path.display()
            );
            entries
        }
        Err(e) => {
            println!("{} {}", "❌".red(), e.to_string().red());
            Vec::new()
        }
    }
}

/// Read and parse every line of a JSONL file.
///
/// Blank lines are skipped silently. Lines that fail to parse as a JSON
/// object are reported with their 1-based line number and skipped.
fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| DsMergeError::SourceReadFailure {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let reader = BufReader::new(file);
    let mut entries = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| DsMergeError::SourceReadFailure {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<Record>(trimmed) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                let err = DsMergeError::MalformedRecord {
                    file: path.to_path_buf(),
                    line: idx + 1,
                    reason: e.to_string(),
                };
                println!("{} Warning: {}", "⚠️".yellow(), err.to_string().yellow());
            }
        }
    }

    Ok(entries)
}
