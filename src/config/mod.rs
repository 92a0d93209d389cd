//! Site definition files.
//!
//! This module turns YAML site definition files into registries:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use adsh::config::load_registries;
//! use adsh::registry::Registry;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let file = temp.path().join("sites.yml");
//! fs::write(&file, "sites:\n  blog:\n    path: /var/www/blog\n    url: http://blog.localhost\n").unwrap();
//!
//! let registries = load_registries(Some(&file), &[]).unwrap();
//! assert!(registries.has("home/blog"));
//! ```
//!
//! # File Locations
//!
//! - Home definitions (`~/.adsh/sites.yml`), registered as `home`
//! - Any number of extra files given as `--registry alias=path`

pub mod loader;
pub mod schema;

pub use loader::{default_sites_file, load_registries, YamlRegistry, HOME_ALIAS};
pub use schema::{SiteEntry, SiteKind, SitesFile};
