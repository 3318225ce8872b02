//! Weighted resampling module
//!
//! Merges multiple loaded datasets into one sequence, resampling each
//! source's contribution according to its weight. All random draws come from
//! the caller-owned RNG, in source order, which together with the later
//! shuffle forms the reproducibility contract: same inputs, same weights,
//! same seed, same output.

use colored::Colorize;
use rand::seq::index;
use rand::Rng;
use std::path::Path;

use crate::loader::{load_dataset, Record};

/// Combine multiple dataset files with optional per-source weighting.
///
/// A weights slice whose length differs from the file count is discarded
/// with a warning and every source contributes at weight 1.0. Sources with
/// zero or negative weight are skipped. Contributions are concatenated in
/// source order; intermixing is left to the final shuffle.
pub fn combine_datasets<P: AsRef<Path>, R: Rng>(
    files: &[P],
    weights: Option<&[f64]>,
    rng: &mut R,
) -> Vec<Record> {
    let weights = match weights {
        Some(w) if w.len() != files.len() => {
            println!(
                "{} {}",
                "⚠️".yellow(),
                "Warning: number of weights doesn't match number of files. Using equal weights."
                    .yellow()
            );
            None
        }
        other => other,
    };

    let mut all_entries = Vec::new();

    for (i, file) in files.iter().enumerate() {
        let path = file.as_ref();
        let entries = load_dataset(path);

        if entries.is_empty() {
            continue;
        }

        let weight = weights.map_or(1.0, |w| w[i]);
        if weight <= 0.0 {
            println!(
                "Skipping {} due to zero/negative weight",
                path.display().to_string().yellow()
            );
            continue;
        }

        let original_count = entries.len();
        let resampled = resample(entries, weight, rng);

        if resampled.len() > original_count {
            println!(
                "Oversampled {}: {} -> {} entries (weight: {})",
                path.display(),
                original_count,
                resampled.len(),
                weight
            );
        } else if resampled.len() < original_count {
            println!(
                "Undersampled {}: {} -> {} entries (weight: {})",
                path.display(),
                original_count,
                resampled.len(),
                weight
            );
        }

        all_entries.extend(resampled);
    }

    all_entries
}

/// Resample one source's records to `floor(len * weight)` entries.
///
/// - weight 1.0 (or a target equal to the original size) returns the
///   sequence unchanged, in order, with no RNG draws.
/// - Oversampling contributes `target / len` full copies plus `target % len`
///   extra records sampled uniformly without replacement, so every original
///   record appears at least `target / len` times and the total is exact.
/// - Undersampling draws `target` records uniformly without replacement;
///   original order within the contribution is not preserved.
pub fn resample<R: Rng>(entries: Vec<Record>, weight: f64, rng: &mut R) -> Vec<Record> {
    if weight == 1.0 {
        return entries;
    }

    let len = entries.len();
    let target_count = (len as f64 * weight).floor() as usize;

    if target_count == len {
        // Same size as the source: a full-set sample would only burn RNG
        // draws and scramble order.
        return entries;
    }

    if target_count > len {
        let multiplier = target_count / len;
        let remainder = target_count % len;

        let mut weighted = Vec::with_capacity(target_count);
        for _ in 0..multiplier {
            weighted.extend(entries.iter().cloned());
        }

        if remainder > 0 {
            for idx in index::sample(rng, len, remainder) {
                weighted.push(entries[idx].clone());
            }
        }

        weighted
    } else {
        index::sample(rng, len, target_count)
            .into_iter()
            .map(|idx| entries[idx].clone())
            .collect()
    }
}
