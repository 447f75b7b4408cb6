//! Utility modules for routescan
//!
//! - Structured logging setup and configuration
//! - Insertion-ordered set used for deterministic parameter output

pub mod logging;
pub mod ordered_set;

pub use logging::{config_from_env, init_logging, LoggingConfig};
pub use ordered_set::OrderedSet;
