use crate::cleaner;
use crate::progress;
use crate::prompt;
use crate::scanner::{self, PathItem};
use crate::size;
use crate::theme::Theme;
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "macsweep")]
#[command(version)]
#[command(about = "Reclaim disk space on macOS by cleaning caches, logs, and build leftovers")]
#[command(
    long_about = "Macsweep scans a fixed set of known cache, log, and artifact locations \
    (temp directories, browser and user caches, Homebrew, node_modules, Xcode derived data, \
    Docker reclaimable storage), groups them into categories, and lets you pick which \
    ones to delete.\n\n\
    Examples:\n  \
    macsweep               # Scan, select, confirm, delete\n  \
    macsweep --dry-run     # Scan and show what would be deleted"
)]
pub struct Cli {
    /// Show what would be deleted without removing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Run one full interactive session: scan, list, select, confirm, clean.
    pub fn run(&self) -> Result<()> {
        println!("{}", Theme::header("Scanning categories..."));

        // The engine reports the planned total; the bar takes its length
        // from the first callback instead of rebuilding the catalog here
        let pb = progress::create_scan_progress_bar(0, "Scanning");
        let categories = scanner::scan_all(|completed, total| {
            pb.set_length(total as u64);
            pb.set_position(completed as u64);
        });
        progress::finish_and_clear(&pb);

        if categories.is_empty() {
            println!("{}", Theme::warning("No categories with data found."));
            return Ok(());
        }

        println!();
        println!("{}", Theme::header("Categories found:"));
        for (index, category) in categories.iter().enumerate() {
            println!(
                "{}",
                Theme::category(&format!(
                    "{:2}) {:<20}  {} ({} items)",
                    index + 1,
                    category.name,
                    size::format_size(category.total_size()),
                    category.items.len()
                ))
            );
        }

        println!();
        println!(
            "{}",
            Theme::muted("Select categories (e.g. 1,3,5 or all):")
        );
        let indices = prompt::select_indices(categories.len())?;

        if indices.is_empty() {
            println!("{}", Theme::warning("Nothing selected."));
            return Ok(());
        }

        let selected: Vec<PathItem> = indices
            .iter()
            .flat_map(|&index| categories[index].items.iter().cloned())
            .collect();
        let total: u64 = selected.iter().map(|item| item.size_bytes).sum();

        println!();
        println!("{}", Theme::divider(40));
        println!("{}", Theme::header("Summary:"));
        for item in &selected {
            println!(
                "{}",
                Theme::category(&format!(
                    "- {}  {}",
                    item.target,
                    size::format_size(item.size_bytes)
                ))
            );
        }
        println!(
            "{}",
            Theme::success(&format!("Total: {}", size::format_size(total)))
        );
        println!("{}", Theme::divider(40));

        if self.dry_run {
            println!("{}", Theme::warning("Dry run: nothing will be deleted."));
            return Ok(());
        }

        if !prompt::confirm("Delete everything listed above?")? {
            println!("{}", Theme::warning("Cancelled."));
            return Ok(());
        }

        println!();
        println!("{}", Theme::header("Deleting..."));
        let report = cleaner::clean_items(&selected);

        println!();
        println!(
            "{}",
            Theme::success(&format!(
                "Cleanup finished: {} deleted, {} skipped, {} errors.",
                report.deleted, report.skipped, report.errors
            ))
        );
        Ok(())
    }
}
