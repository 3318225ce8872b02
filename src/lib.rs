//! dsmerge - WEIGHTED JSONL DATASET COMBINER
//!
//! Merges multiple JSONL record files into a single dataset with per-source
//! weighted resampling and a deterministic, seed-reproducible shuffle.
//!
//! # Features
//!
//! - ⚖️ **Weighted resampling**: oversample or undersample each source via
//!   a per-file weight multiplier
//! - 🎲 **Reproducibility**: one seeded RNG drives all resampling and the
//!   final shuffle, so a fixed seed yields byte-identical output
//! - 🔍 **Hop-1 validation**: flags (or removes) hop-1 records whose text
//!   contains constant indicators
//! - 📊 **Category statistics**: per-file and combined counts for func,
//!   role, type, hop_depth, and constant fields
//! - 🛡️ **Tolerant loading**: malformed lines and missing files degrade to
//!   warnings, never aborts
//!
//! # Examples
//!
//! ```bash
//! # Basic usage
//! dsmerge --input-files a.jsonl b.jsonl --output-file combined.jsonl
//!
//! # Double source A's contribution, halve source B's
//! dsmerge --input-files a.jsonl b.jsonl --output-file out.jsonl --weights 2.0 0.5
//!
//! # Statistics only
//! dsmerge --input-files a.jsonl b.jsonl --output-file out.jsonl --analyze-only
//! ```

pub mod cli;
pub mod combiner;
pub mod error;
pub mod loader;
pub mod stats;
pub mod validator;
pub mod writer;

// Re-exports for convenient access
pub use cli::Args;
pub use combiner::{combine_datasets, resample};
pub use error::{DsMergeError, Result};
pub use loader::{load_dataset, Record};
pub use stats::DatasetStats;
pub use validator::{validate_hop1_no_constants, ValidationOutcome, Violation, CONSTANT_INDICATORS};
pub use writer::{save_dataset, shuffle_dataset};
