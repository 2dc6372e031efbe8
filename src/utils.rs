/*!
 * Utility functions for docs-packager
 */

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use walkdir::DirEntry;

/// Create the stderr spinner used by both binaries.
///
/// indicatif hides the bar when stderr is not a terminal, so piped runs only
/// ever see the JSON on stdout.
pub fn spinner(prefix: &'static str) -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos} files ⏱️  {elapsed_precise}")
    {
        progress.set_style(style);
    }
    progress.set_prefix(prefix);
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}

/// True for regular files and for symlinks that resolve to one
pub fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Check whether a directory name marks it as hidden
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
