/*!
 * Configuration handling for docs-packager
 */

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{PackagerError, Result, ResultExt};

/// Default output directory, relative to the config file
pub const DEFAULT_OUTPUT_PATH: &str = "./olore-package";

/// Default extensions copied when the config does not name any
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".md", ".mdx"];

/// Fields that must be present and non-null in every config
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "version", "description", "contentPath"];

/// Name of the destination folder created under the output path
pub const CONTENTS_DIR: &str = "contents";

/// Command-line arguments for copy-docs
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "copy-docs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy documentation files from a source tree into a package layout",
    long_about = "Reads a package config, copies files matching the configured extensions (minus excluded paths) into <outputPath>/contents and prints a JSON summary."
)]
pub struct CopyArgs {
    /// Path to the package config file
    pub config_path: PathBuf,
}

/// Command-line arguments for determine-tier
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "determine-tier",
    version = env!("CARGO_PKG_VERSION"),
    about = "Classify a documentation tree into a processing tier",
    long_about = "Counts .md and .mdx files under a directory, sums their size and prints the resulting tier (1, 2 or 3) as JSON."
)]
pub struct TierArgs {
    /// Directory containing the documentation files
    pub contents_path: PathBuf,
}

/// Package config descriptor as written on disk
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageConfig {
    pub name: String,
    pub version: String,
    pub description: String,

    /// Source tree, relative to the config file unless absolute
    pub content_path: PathBuf,

    /// Package output directory, relative to the config file unless absolute
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    /// File name suffixes to copy
    #[serde(default)]
    pub extensions: Option<Vec<String>>,

    /// Glob patterns matched against paths relative to the content path
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

impl PackageConfig {
    /// Read, validate and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&raw, path)
    }

    /// Parse config text; `path` is only used in error messages
    pub fn parse(raw: &str, path: &Path) -> Result<Self> {
        let parse_err = |source| PackagerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        };

        let value: Value = serde_json::from_str(raw).map_err(parse_err)?;
        let Value::Object(map) = &value else {
            return Err(parse_err(<serde_json::Error as serde::de::Error>::custom(
                "config must be a JSON object",
            )));
        };

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| map.get(*field).map_or(true, Value::is_null))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(PackagerError::ConfigValidation(missing));
        }

        serde_json::from_value(value).map_err(parse_err)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    pub fn extensions(&self) -> Vec<String> {
        match &self.extensions {
            Some(exts) => exts.clone(),
            None => DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn exclude(&self) -> &[String] {
        self.exclude.as_deref().unwrap_or_default()
    }
}

/// A loaded config with its paths anchored to the config file's directory
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed descriptor
    pub package: PackageConfig,

    /// Canonical directory holding the config file
    pub config_dir: PathBuf,

    /// Content path joined onto the config directory
    pub content_path: PathBuf,

    /// Output path joined onto the config directory
    pub output_path: PathBuf,
}

impl Config {
    /// Load a config file and anchor its paths
    pub fn from_file(config_path: &Path) -> Result<Self> {
        let package = PackageConfig::load(config_path)?;

        let parent = match config_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let config_dir = fs::canonicalize(parent)
            .with_context(|| format!("Failed to resolve {}", parent.display()))?;

        Ok(Self::anchored(package, config_dir))
    }

    /// Anchor a parsed descriptor at an already-resolved directory
    pub fn anchored(package: PackageConfig, config_dir: PathBuf) -> Self {
        let content_path = config_dir.join(&package.content_path);
        let output_path = config_dir.join(package.output_path());

        Self {
            package,
            config_dir,
            content_path,
            output_path,
        }
    }

    /// Destination folder for copied files
    pub fn contents_dir(&self) -> PathBuf {
        self.output_path.join(CONTENTS_DIR)
    }
}
