/*!
 * docs-packager - Package documentation trees and classify them by size
 *
 * `copy-docs` materializes a filtered copy of a documentation source tree in
 * a standard package layout. `determine-tier` classifies an existing tree
 * into a processing tier from its file count and total size.
 */

pub mod collector;
pub mod config;
pub mod error;
pub mod pattern;
pub mod report;
pub mod tier;
pub mod utils;


// Re-export main components for easier access
pub use collector::{copy_docs, Collector, CollectorStatistics};
pub use config::{Config, CopyArgs, PackageConfig, TierArgs};
pub use error::{PackagerError, Result};
pub use report::{CopyResult, TierResult};
pub use tier::{determine_tier, Tier};
