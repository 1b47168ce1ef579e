//! buildcfg - Declarative build configuration loader
//!
//! Loads and validates the small declarative record a front-end build
//! runtime consumes at startup: a source root directory, an output
//! directory for compiled assets, and a development server port.
//!
//! The descriptor is constructed once via [`BuildConfig::load`], validated
//! up front (missing fields, nonexistent source root, out-of-range port,
//! source and output roots colliding), and never mutated afterwards. The
//! build runtime itself (bundling, file watching, dev-server hosting) lives
//! elsewhere and only reads the three fields.

pub mod config;

pub use config::{BuildConfig, ConfigError};
