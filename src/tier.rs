/*!
 * Corpus size classification
 *
 * Downstream tooling picks a processing strategy from the tier alone, so the
 * thresholds here are part of the output contract.
 */

use std::fs;
use std::path::Path;

use indicatif::ProgressBar;
use serde::{Serialize, Serializer};
use walkdir::WalkDir;

use crate::error::{Result, ResultExt};
use crate::report::TierResult;
use crate::utils::{format_file_size, is_regular_file};

/// Extensions the classifier counts
pub const TIER_EXTENSIONS: [&str; 2] = [".md", ".mdx"];

/// Tier 1 needs fewer files than this
pub const TIER_ONE_MAX_FILES: u64 = 30;
/// Tier 1 needs fewer kilobytes than this
pub const TIER_ONE_MAX_KB: u64 = 500;
/// More files than this forces tier 3
pub const TIER_THREE_MIN_FILES: u64 = 100;
/// More kilobytes than this forces tier 3
pub const TIER_THREE_MIN_KB: u64 = 2048;

/// Processing weight of a documentation corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// Small corpus
    One = 1,
    /// Medium corpus
    Two = 2,
    /// Large corpus
    Three = 3,
}

impl Tier {
    /// Map file count and size to a tier. Rules are checked in order and
    /// the first match wins.
    pub fn classify(file_count: u64, size_kb: u64) -> Self {
        if file_count < TIER_ONE_MAX_FILES && size_kb < TIER_ONE_MAX_KB {
            Tier::One
        } else if file_count > TIER_THREE_MIN_FILES || size_kb > TIER_THREE_MIN_KB {
            Tier::Three
        } else {
            Tier::Two
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// Check whether a file name carries one of the counted extensions
pub fn is_doc_file(name: &str) -> bool {
    TIER_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Scan a directory and classify it.
///
/// Every depth is visited, hidden directories included.
pub fn determine_tier(contents_path: &Path, progress: &ProgressBar) -> Result<TierResult> {
    crate::ensure!(
        contents_path.exists(),
        PathNotFound,
        "Path does not exist: {}",
        contents_path.display()
    );
    crate::ensure!(
        contents_path.is_dir(),
        PathNotFound,
        "Path is not a directory: {}",
        contents_path.display()
    );

    let mut file_count = 0u64;
    let mut size_bytes = 0u64;

    for entry in WalkDir::new(contents_path).min_depth(1) {
        let entry = entry.with_context(|| format!("Failed to walk {}", contents_path.display()))?;
        if !is_regular_file(&entry) {
            continue;
        }
        if !is_doc_file(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let metadata = fs::metadata(entry.path())?;
        file_count += 1;
        size_bytes += metadata.len();

        progress.inc(1);
        progress.set_message(format!(
            "{} files, {}",
            file_count,
            format_file_size(size_bytes)
        ));
    }

    let size_kb = size_bytes / 1024;

    Ok(TierResult {
        tier: Tier::classify(file_count, size_kb),
        file_count,
        size_bytes,
        size_kb,
    })
}
