//! Hop-1 constant validation module
//!
//! Scans combined records whose `hop_depth` is 1 for constant indicators in
//! their `text` field. A pure filter: records are either kept or dropped,
//! never mutated.

use colored::Colorize;
use serde_json::Value;

use crate::loader::Record;

/// Constant indicators that must not appear in hop-1 record text.
///
/// Deliberately a small hardcoded list tied to the constant value 5; this is
/// not general numeric-literal detection.
pub const CONSTANT_INDICATORS: [&str; 4] = ["5", "five", "Five", "FIVE"];

/// One record that failed hop-1 validation.
#[derive(Debug, Clone)]
pub struct Violation {
    /// The record's `uid`, or `"unknown"` when absent
    pub uid: String,
    /// The record's full `text` field
    pub text: String,
    /// Which indicators were found in the text
    pub found_indicators: Vec<&'static str>,
}

/// Result of a validation pass.
#[derive(Debug)]
pub struct ValidationOutcome {
    /// Records retained after filtering
    pub entries: Vec<Record>,
    /// All violations found, whether or not their records were retained
    pub violations: Vec<Violation>,
    /// Whether strict mode removed violating records
    pub strict: bool,
}

/// Validate that hop-1 records don't contain constant indicators.
///
/// Records with `hop_depth != 1` (including records missing the field) pass
/// through untouched. In non-strict mode violating records are kept but
/// reported; in strict mode they are removed.
pub fn validate_hop1_no_constants(entries: Vec<Record>, strict: bool) -> ValidationOutcome {
    let mut validated = Vec::with_capacity(entries.len());
    let mut violations = Vec::new();

    for entry in entries {
        // Numeric comparison, so a JSON float 1.0 counts as hop 1
        let is_hop1 = entry.get("hop_depth").and_then(Value::as_f64) == Some(1.0);

        if !is_hop1 {
            validated.push(entry);
            continue;
        }

        let text = entry.get("text").and_then(Value::as_str).unwrap_or("");
        let found_indicators: Vec<&'static str> = CONSTANT_INDICATORS
            .iter()
            .copied()
            .filter(|indicator| text.contains(indicator))
            .collect();

        if found_indicators.is_empty() {
            validated.push(entry);
        } else {
            violations.push(Violation {
                uid: entry
                    .get("uid")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                text: text.to_string(),
                found_indicators,
            });

            if !strict {
                validated.push(entry);
            }
        }
    }

    ValidationOutcome {
        entries: validated,
        violations,
        strict,
    }
}

impl ValidationOutcome {
    /// Print the violation report: total count, the first 10 violations with
    /// uid, matched indicators, and a 100-character text snippet, then the
    /// strict/non-strict disposition.
    pub fn print_report(&self) {
        if self.violations.is_empty() {
            println!(
                "{} {}",
                "✅".bright_green(),
                "All hop 1 entries pass constant validation".green()
            );
            return;
        }

        println!(
            "\n{} {}",
            "⚠️".bright_yellow(),
            format!(
                "WARNING: Found {} hop 1 entries with constant indicators:",
                self.violations.len()
            )
            .yellow()
        );

        for (i, violation) in self.violations.iter().take(10).enumerate() {
            println!("  {}. UID: {}", i + 1, violation.uid);
            println!("     Indicators: {:?}", violation.found_indicators);
            println!("     Text snippet: {}...", snippet(&violation.text, 100));
            println!();
        }

        if self.violations.len() > 10 {
            println!("     ... and {} more violations", self.violations.len() - 10);
        }

        if self.strict {
            println!(
                "{} {}",
                "🚫".bright_red(),
                format!("STRICT MODE: Removed {} violating entries", self.violations.len()).red()
            );
        } else {
            println!(
                "{} {}",
                "📝".bright_cyan(),
                "NON-STRICT MODE: Kept all entries but reported violations".cyan()
            );
        }
    }
}

/// First `max_chars` characters of a string (char-safe for UTF-8).
fn snippet(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
