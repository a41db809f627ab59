//! Styled console output for the CLI banner and summaries.
//!
//! Per-file progress goes through the logger; this module only prints the framing
//! around a run.

use colored::*;
use std::collections::HashMap;

/// Prints styled console messages.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints a warning message in yellow.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a bold section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Prints a yellow dry-run notice.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Prints a table of files per destination folder, sorted by folder name.
    ///
    /// ```no_run
    /// use dirsort::output::OutputFormatter;
    /// use std::collections::HashMap;
    ///
    /// let mut counts = HashMap::new();
    /// counts.insert("Documents".to_string(), 15);
    /// counts.insert("Images".to_string(), 8);
    /// OutputFormatter::summary_table("SUMMARY", &counts, 23);
    /// ```
    pub fn summary_table(title: &str, folder_counts: &HashMap<String, usize>, total_files: usize) {
        Self::header(title);

        let mut folders: Vec<_> = folder_counts.iter().collect();
        folders.sort_by_key(|&(name, _)| name);

        let width = folders
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max("Folder".len());

        println!("{:<width$} | {}", "Folder".bold(), "Files".bold(), width = width);
        println!("{}", "-".repeat(width + 10));

        for (folder, count) in &folders {
            println!(
                "{:<width$} | {} {}",
                folder,
                count.to_string().green(),
                plural(**count),
                width = width
            );
        }

        println!("{}", "-".repeat(width + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total_files.to_string().green().bold(),
            plural(total_files),
            width = width
        );
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}
