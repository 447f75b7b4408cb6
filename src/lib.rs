//! routescan - pattern-based inventory of a backend's HTTP surface
//!
//! Walks a source tree and recovers, with plain regular expressions rather than a
//! parser, the routes a service declares, the prefixes they are mounted under,
//! the request body/query/path parameters and headers it reads, the environment
//! variables it depends on and the comments left in the code.
//!
//! # Core Concepts
//!
//! - **Route mapping**: verb plus literal path from `router.get('/x', ...)` style calls
//! - **Base path**: a prefix registered through `app.use('/api', ...)`; pooled across
//!   the whole tree and joined with every route
//! - **Endpoint inventory**: the sorted, deduplicated, normalized list of composed
//!   routes and bare path literals
//!
//! # Example Usage
//!
//! ```no_run
//! use routescan::{scan_directory, ReportWriter, ScanConfig};
//!
//! let config = ScanConfig::for_root("./backend");
//! let inventory = scan_directory(&config)?;
//! ReportWriter::new(&config.output_dir).write(&inventory)?;
//! println!("{}", inventory.summary());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Project Structure
//!
//! - [`collector`]: source file discovery
//! - [`extractors`]: the per-file pattern matchers
//! - [`scan`]: reads files and pools extraction results
//! - [`compose`]: base path × route composition and the endpoint inventory
//! - [`aggregate`]: path parameters and the synthetic query string
//! - [`inventory`] / [`report`]: the final bundle and its on-disk form

pub mod aggregate;
pub mod cli;
pub mod collector;
pub mod compose;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fs;
pub mod inventory;
pub mod model;
pub mod report;
pub mod scan;
pub mod util;

pub use collector::SourceCollector;
pub use config::{ConfigError, ScanConfig};
pub use error::ScanError;
pub use extractors::{PatternExtractor, SecretRules};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use inventory::{folder_name_for, Inventory, ScanSummary};
pub use model::{
    Combination, CommentEntry, HeaderMapping, OtherUrl, ParameterMapping, PathParameterMapping,
    RouteMapping, SecretMapping,
};
pub use report::ReportWriter;
pub use scan::{ScanResult, Scanner};
pub use util::{config_from_env, init_logging, LoggingConfig, OrderedSet};

use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Collects, extracts and composes with the default extractor (secrets disabled).
pub fn scan_directory(config: &ScanConfig) -> Result<Inventory, ScanError> {
    scan_directory_with_extractor(config, PatternExtractor::new())
}

pub fn scan_directory_with_extractor(
    config: &ScanConfig,
    extractor: PatternExtractor,
) -> Result<Inventory, ScanError> {
    config.validate()?;

    let files = SourceCollector::from_config(config).collect()?;
    let folder_name = folder_name_for(&config.root);

    info!(
        root = %config.root.display(),
        folder = %folder_name,
        files = files.len(),
        "Starting scan"
    );

    let scanner = Scanner::with_extractor(RealFileSystem, extractor);
    let result = scanner.scan(&files);

    Ok(Inventory::build(folder_name, result, &config.query_tag))
}
