/*!
 * Result records printed by the two utilities
 *
 * Both records are rendered as 2-space indented JSON on standard output,
 * which is the only success signal the orchestrator reads.
 */

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::tier::Tier;

/// Summary of a copy-docs run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyResult {
    /// Number of files copied
    pub files: u64,
    /// Total bytes copied
    pub size_bytes: u64,
    /// Kilobytes, truncated
    pub size_kb: u64,
    /// Resolved output directory
    pub output_path: String,
    /// Resolved `contents` directory under the output path
    pub contents_path: String,
}

impl CopyResult {
    pub fn new(files: u64, size_bytes: u64, output_path: &Path, contents_path: &Path) -> Self {
        Self {
            files,
            size_bytes,
            size_kb: size_bytes / 1024,
            output_path: output_path.display().to_string(),
            contents_path: contents_path.display().to_string(),
        }
    }
}

/// Summary of a determine-tier run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierResult {
    pub tier: Tier,
    pub file_count: u64,
    pub size_bytes: u64,
    pub size_kb: u64,
}

/// Render a result record the way both binaries print it
pub fn to_json<T: Serialize>(record: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_result_truncates_kilobytes() {
        let result = CopyResult::new(3, 2047, Path::new("/out"), Path::new("/out/contents"));
        assert_eq!(result.size_kb, 1);
    }

    #[test]
    fn copy_result_json_layout() {
        let result = CopyResult::new(2, 4096, Path::new("/out"), Path::new("/out/contents"));
        let expected = r#"{
  "files": 2,
  "size_bytes": 4096,
  "size_kb": 4,
  "output_path": "/out",
  "contents_path": "/out/contents"
}"#;
        assert_eq!(to_json(&result).unwrap(), expected);
    }

    #[test]
    fn tier_result_json_layout() {
        let result = TierResult {
            tier: Tier::Two,
            file_count: 42,
            size_bytes: 1_048_576,
            size_kb: 1024,
        };
        let expected = r#"{
  "tier": 2,
  "file_count": 42,
  "size_bytes": 1048576,
  "size_kb": 1024
}"#;
        assert_eq!(to_json(&result).unwrap(), expected);
    }
}
