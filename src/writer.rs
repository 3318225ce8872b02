//! Output module
//!
//! Deterministic shuffling and JSONL persistence of the final record
//! sequence.

use colored::Colorize;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{DsMergeError, Result};
use crate::loader::Record;

/// Shuffle the dataset in place with the shared seeded RNG.
///
/// Must run after all combiner resampling draws for the run to be
/// reproducible under a fixed seed.
pub fn shuffle_dataset<R: Rng>(entries: &mut [Record], rng: &mut R) {
    entries.shuffle(rng);
}

/// Save the dataset as one compact JSON object per line.
///
/// Creates missing parent directories and overwrites any existing file.
pub fn save_dataset(entries: &[Record], output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| DsMergeError::WriteFailure {
                path: output.to_path_buf(),
                reason: e.to_string(),
            })?;
        }
    }

    let file = File::create(output).map_err(|e| DsMergeError::WriteFailure {
        path: output.to_path_buf(),
        reason: e.to_string(),
    })?;
    let mut writer = BufWriter::new(file);

    for entry in entries {
        let line =
            serde_json::to_string(entry).map_err(|e| DsMergeError::SerializeFailure {
                reason: e.to_string(),
            })?;
        writeln!(writer, "{}", line).map_err(|e| DsMergeError::WriteFailure {
            path: output.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    writer.flush().map_err(|e| DsMergeError::WriteFailure {
        path: output.to_path_buf(),
        reason: e.to_string(),
    })?;

    println!(
        "Saved {} entries to {}",
        entries.len().to_string().bright_green(),
        output.display()
    );

    Ok(())
}
