//! Dataset statistics module
//!
//! Tallies category occurrence counts over a record sequence and prints
//! them. Statistics are display-only and never persisted.

use colored::Colorize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::loader::Record;

/// Sentinel used for records missing a category field.
const UNKNOWN: &str = "unknown";

/// Occurrence counts per category over one dataset.
///
/// Category keys are the rendered field values (string fields verbatim,
/// anything else as its canonical JSON text), so a `BTreeMap` gives the
/// natural value ordering the report wants.
#[derive(Debug, Default, PartialEq)]
pub struct DatasetStats {
    pub total_entries: usize,
    pub functions: BTreeMap<String, usize>,
    pub roles: BTreeMap<String, usize>,
    pub types: BTreeMap<String, usize>,
    pub hop_depths: BTreeMap<String, usize>,
    pub constants: BTreeMap<String, usize>,
}

impl DatasetStats {
    /// Tally category counts over a record sequence.
    pub fn analyze(entries: &[Record]) -> Self {
        let mut stats = Self {
            total_entries: entries.len(),
            ..Default::default()
        };

        for entry in entries {
            *stats.functions.entry(field_key(entry, "func")).or_insert(0) += 1;
            *stats.roles.entry(field_key(entry, "role")).or_insert(0) += 1;
            *stats.types.entry(field_key(entry, "type")).or_insert(0) += 1;
            *stats
                .hop_depths
                .entry(field_key(entry, "hop_depth"))
                .or_insert(0) += 1;
            *stats
                .constants
                .entry(field_key(entry, "constant"))
                .or_insert(0) += 1;
        }

        stats
    }

    /// Print all categories with counts and percentages under a title.
    pub fn print(&self, title: &str) {
        println!("\n{}", format!("=== {} ===", title).bright_white().bold());

        if self.total_entries == 0 {
            println!("No statistics available (empty dataset)");
            return;
        }

        println!(
            "Total entries: {}",
            self.total_entries.to_string().bright_green()
        );

        self.print_category("Functions", &self.functions);
        self.print_category("Roles", &self.roles);
        self.print_category("Types", &self.types);
        self.print_category("Hop Depths", &self.hop_depths);
        self.print_category("Constants", &self.constants);
    }

    fn print_category(&self, label: &str, counts: &BTreeMap<String, usize>) {
        println!("\n{}:", label.bright_cyan());
        for (key, count) in counts {
            let percentage = (*count as f64 / self.total_entries as f64) * 100.0;
            println!("  {}: {} ({:.1}%)", key, count, percentage);
        }
    }
}

/// Render a record field as a category key, defaulting to `"unknown"`.
fn field_key(entry: &Record, field: &str) -> String {
    match entry.get(field) {
        None => UNKNOWN.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
    }
}
