//! Configuration loading and parsing for Desmin.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use desmin::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let desmin_dir = temp.path().join(".desmin");
//! fs::create_dir_all(&desmin_dir).unwrap();
//! fs::write(desmin_dir.join("config.yml"), "settings:\n  strict_not_found: true\n").unwrap();
//!
//! let config = load_config(None, temp.path()).unwrap();
//! assert!(config.settings.strict_not_found);
//! ```
//!
//! # Configuration File Locations
//!
//! The first match wins:
//! 1. `--config <path>` or `DESMIN_CONFIG`
//! 2. Project config (`.desmin/config.yml`)
//! 3. User global config (`~/.desmin/config.yml`)

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, ConfigPaths};
pub use schema::{SessionOverrides, Settings, ShellConfig};
