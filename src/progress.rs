use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for the multi-category scan
pub fn create_scan_progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.set_message(msg.to_string());
    pb
}

/// Finish and clear progress bar
pub fn finish_and_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_scan_progress_bar() {
        let pb = create_scan_progress_bar(8, "Scanning");
        assert_eq!(pb.length(), Some(8));
        assert_eq!(pb.position(), 0);
        pb.set_position(5);
        assert_eq!(pb.position(), 5);
        pb.finish();
        assert!(pb.is_finished());
    }

    #[test]
    fn test_finish_and_clear() {
        let pb = create_scan_progress_bar(3, "Scanning");
        finish_and_clear(&pb);
        assert!(pb.is_finished());
    }
}
