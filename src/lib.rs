//! adsh - Locate, identify and bootstrap local site installations.
//!
//! Sites are named by identifiers held in one or more registries. A
//! [`registry::RegistryCollection`] composes registries under aliases and
//! resolves bare (`blog`) or qualified (`home/blog`) identifiers to a
//! [`site::Site`], which is then driven through its bootstrap levels.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - YAML site definition files
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Registries and identifier resolution
//! - [`site`] - Site model, discovery and bootstrap lifecycle
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use adsh::registry::{Registry, RegistryCollection, SiteDefinition, StaticRegistry};
//!
//! let mut home = StaticRegistry::new();
//! home.insert("blog", SiteDefinition::new("/var/www/blog")).unwrap();
//!
//! let mut registries = RegistryCollection::new();
//! registries.add_registry(home, Some("home")).unwrap();
//!
//! let site = registries.get("blog").unwrap();
//! assert_eq!(site.to_string(), "/var/www/blog [default]");
//! ```
//!
//! For file-based registries, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod site;
pub mod ui;

pub use error::{AdshError, Result};
