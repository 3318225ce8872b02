//! dsmerge - WEIGHTED JSONL DATASET COMBINER
//!
//! Main entry point: load → combine → validate → report → shuffle → write.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::path::Path;

use dsmerge::{
    cli::Args,
    combiner::combine_datasets,
    loader::load_dataset,
    stats::DatasetStats,
    validator::validate_hop1_no_constants,
    writer::{save_dataset, shuffle_dataset},
};

fn main() -> Result<()> {
    let args = Args::parse();

    // One seeded RNG for the whole run; the combiner consumes it first, the
    // shuffle second. This draw order is part of the reproducibility
    // contract.
    let mut rng = ChaCha20Rng::seed_from_u64(args.seed);

    print_header(&args);

    // Analyze individual files first
    for path in &args.input_files {
        if path.exists() {
            let entries = load_dataset(path);
            if !entries.is_empty() {
                let stats = DatasetStats::analyze(&entries);
                stats.print(&format!("Statistics for {}", file_name(path)));
            }
        }
    }

    if args.analyze_only {
        println!("\n{}", "Analysis complete. Exiting without combining.".cyan());
        return Ok(());
    }

    // Combine datasets with weighted resampling
    let combined = combine_datasets(&args.input_files, args.weights.as_deref(), &mut rng);

    if combined.is_empty() {
        println!(
            "{} {}",
            "❌".red(),
            "Error: No entries found in any input files!".red()
        );
        return Ok(());
    }

    // Hop-1 constant validation (strict mode removes violators)
    let outcome = validate_hop1_no_constants(combined, args.strict_hop1_validation);
    outcome.print_report();
    let mut entries = outcome.entries;

    // Combined statistics
    DatasetStats::analyze(&entries).print("Combined Dataset Statistics");

    // Deterministic shuffle, unless explicitly disabled
    if args.no_shuffle {
        println!("\nSkipping shuffle (--no-shuffle specified)");
    } else {
        println!(
            "\nShuffling {} entries...",
            entries.len().to_string().bright_green()
        );
        shuffle_dataset(&mut entries, &mut rng);
        println!("Shuffling complete!");
    }

    // Persist
    save_dataset(&entries, &args.output_file)?;

    print_summary(&args, entries.len());

    Ok(())
}

/// Print the run header
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🔀 WEIGHTED JSONL DATASET COMBINER".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());

    println!(
        "  {} Combining {} dataset files:",
        "📂".bright_cyan(),
        args.input_files.len().to_string().bright_green()
    );
    for path in &args.input_files {
        println!("     • {}", path.display());
    }

    if !args.analyze_only {
        println!(
            "  {} Output file: {}",
            "📄".bright_green(),
            args.output_file.display()
        );
    }

    if let Some(ref weights) = args.weights {
        println!("  {} Weights: {:?}", "⚖️".bright_yellow(), weights);
    }

    println!("  {} Seed: {}", "🎲".bright_magenta(), args.seed);

    if args.no_shuffle {
        println!("  {} {}", "⚠️".bright_yellow(), "Shuffle disabled".yellow());
    }

    if args.analyze_only {
        println!("  {} {}", "🔍".bright_cyan(), "Analyze-only mode".cyan());
    }

    if args.strict_hop1_validation {
        println!(
            "  {} {}",
            "🚫".bright_red(),
            "Strict hop-1 validation".red()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// Print the final run summary
fn print_summary(args: &Args, total_entries: usize) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " ✅ Final Summary".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  Combined {} datasets", args.input_files.len());
    println!(
        "  Total entries: {}",
        total_entries.to_string().bright_green()
    );
    println!("  Output file: {}", args.output_file.display());
    println!("  Random seed: {}", args.seed);
    println!("  Shuffled: {}", !args.no_shuffle);
    println!(
        "  Strict hop 1 validation: {}",
        args.strict_hop1_validation
    );
    println!("{}", "═".repeat(50).bright_blue());
}

/// File name component for display, falling back to the whole path
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
