/*!
 * Documentation collection
 *
 * Copies qualifying files from the content path into `<output>/contents`,
 * mirroring their relative paths, then removes directories left empty.
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use filetime::FileTime;
use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::pattern::ExcludeSet;
use crate::report::CopyResult;
use crate::utils::{format_file_size, is_hidden_name, is_regular_file};

/// Running totals for a collection pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectorStatistics {
    /// Number of files copied
    pub files_copied: u64,
    /// Bytes copied
    pub bytes_copied: u64,
}

/// Copies documentation files into the package layout
pub struct Collector {
    config: Config,
    extensions: Vec<String>,
    excludes: ExcludeSet,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Collector {
    /// Create a collector, compiling the configured exclude patterns
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Result<Self> {
        let extensions = config.package.extensions();
        let excludes = ExcludeSet::new(config.package.exclude())?;

        Ok(Self {
            config,
            extensions,
            excludes,
            progress,
        })
    }

    /// Run the whole pass and return its summary
    pub fn run(&self) -> Result<CopyResult> {
        let content_path = &self.config.content_path;
        crate::ensure!(
            content_path.exists(),
            PathNotFound,
            "Content path does not exist: {}",
            content_path.display()
        );
        let content_path = fs::canonicalize(content_path)?;

        let contents_dir = self.prepare_destination()?;
        let output_path = fs::canonicalize(&self.config.output_path)?;
        let contents_dir = fs::canonicalize(contents_dir)?;

        let stats = self.copy_tree(&content_path, &contents_dir)?;
        prune_empty_dirs(&contents_dir)?;

        Ok(CopyResult::new(
            stats.files_copied,
            stats.bytes_copied,
            &output_path,
            &contents_dir,
        ))
    }

    /// Delete any previous `contents` directory and recreate it empty
    fn prepare_destination(&self) -> Result<PathBuf> {
        let contents_dir = self.config.contents_dir();

        if contents_dir.exists() {
            fs::remove_dir_all(&contents_dir)
                .with_context(|| format!("Failed to clear {}", contents_dir.display()))?;
        }
        fs::create_dir_all(&contents_dir)
            .with_context(|| format!("Failed to create {}", contents_dir.display()))?;

        Ok(contents_dir)
    }

    /// Walk the content tree and copy every selected file. The destination
    /// is skipped when it lives inside the content tree.
    fn copy_tree(&self, content_path: &Path, contents_dir: &Path) -> Result<CollectorStatistics> {
        let mut stats = CollectorStatistics::default();

        let walker = WalkDir::new(content_path)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| !is_hidden_dir(e) && e.path() != contents_dir);

        for entry in walker {
            let entry = entry.with_context(|| format!("Failed to walk {}", content_path.display()))?;
            if !is_regular_file(&entry) {
                continue;
            }

            let rel_path = match entry.path().strip_prefix(content_path) {
                Ok(p) => p,
                Err(_) => continue,
            };
            if !self.should_copy(&entry.file_name().to_string_lossy(), rel_path) {
                continue;
            }

            let bytes = copy_file(entry.path(), &contents_dir.join(rel_path))?;
            stats.files_copied += 1;
            stats.bytes_copied += bytes;

            self.progress.inc(1);
            self.progress.set_message(format!(
                "{} ({})",
                rel_path.display(),
                format_file_size(stats.bytes_copied)
            ));
        }

        Ok(stats)
    }

    /// Check a file against the extension list, then the exclude patterns
    pub fn should_copy(&self, file_name: &str, rel_path: &Path) -> bool {
        if !self.has_extension(file_name) {
            return false;
        }
        !self.excludes.is_match(&rel_path.to_string_lossy())
    }

    fn has_extension(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }
}

/// Hidden directories below the root are never descended into
fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && is_hidden_name(&entry.file_name().to_string_lossy())
}

/// Copy one file, keeping its permissions and timestamps. Returns the
/// source size in bytes.
fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::copy(src, dst)
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dst.display()))?;

    let metadata = fs::metadata(src)?;
    filetime::set_file_times(
        dst,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )
    .with_context(|| format!("Failed to set timestamps on {}", dst.display()))?;

    Ok(metadata.len())
}

/// Remove every empty directory below `root`, deepest first. `root` itself
/// is kept.
pub fn prune_empty_dirs(root: &Path) -> Result<()> {
    let walker = WalkDir::new(root).min_depth(1).contents_first(true);

    for dir in walker {
        let dir = dir.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !dir.file_type().is_dir() {
            continue;
        }

        let is_empty = fs::read_dir(dir.path())?.next().is_none();
        if is_empty {
            fs::remove_dir(dir.path())
                .with_context(|| format!("Failed to remove {}", dir.path().display()))?;
        }
    }

    Ok(())
}

/// Load a config file and run a full collection pass
pub fn copy_docs(config_path: &Path, progress: Arc<ProgressBar>) -> Result<CopyResult> {
    let config = Config::from_file(config_path)?;
    Collector::new(config, progress)?.run()
}
