//! CLI argument parsing module
//!
//! Defines the command-line surface via clap's derive API.

use clap::Parser;
use std::path::PathBuf;

/// dsmerge CLI argument struct
#[derive(Parser, Debug)]
#[command(
    name = "dsmerge",
    version,
    about = "Weighted JSONL dataset combiner with deterministic shuffling",
    long_about = r#"
DSMERGE - WEIGHTED JSONL DATASET COMBINER
=========================================

Merges multiple JSONL record files into a single dataset, applying
per-source weighted resampling, hop-1 constant validation, category
statistics, and a seeded deterministic shuffle.

Features:
  • Per-source weight multipliers (oversample / undersample)
  • Reproducible output under a fixed --seed
  • Hop-1 constant-indicator validation (flag or remove)
  • Category statistics per input file and for the combined set
  • Tolerant loading: malformed lines and missing files are skipped

Examples:
  dsmerge --input-files a.jsonl b.jsonl --output-file combined.jsonl
  dsmerge --input-files a.jsonl b.jsonl --output-file out.jsonl --weights 2.0 0.5
  dsmerge --input-files a.jsonl --output-file out.jsonl --seed 7 --no-shuffle
  dsmerge --input-files a.jsonl b.jsonl --analyze-only
  dsmerge --input-files a.jsonl --output-file out.jsonl --strict-hop1-validation
"#
)]
pub struct Args {
    /// Input JSONL files to combine
    #[arg(long, num_args = 1.., required = true)]
    pub input_files: Vec<PathBuf>,

    /// Output file for the combined dataset
    #[arg(long)]
    pub output_file: PathBuf,

    /// Per-source weight multipliers (count must match --input-files, else ignored)
    #[arg(long, num_args = 1..)]
    pub weights: Option<Vec<f64>>,

    /// Random seed for reproducible resampling and shuffling
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Skip the final shuffle, preserving source concatenation order
    #[arg(long)]
    pub no_shuffle: bool,

    /// Only print per-file statistics, without combining or writing
    #[arg(long)]
    pub analyze_only: bool,

    /// Remove hop-1 records containing constant indicators instead of flagging them
    #[arg(long)]
    pub strict_hop1_validation: bool,
}
