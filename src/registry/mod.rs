//! Site registries.
//!
//! A registry maps local identifiers to site definitions. Several registries
//! can be composed under aliases in a [`RegistryCollection`], which is itself
//! a [`Registry`] and resolves identifiers across all of them:
//!
//! - `alias/local` (qualified) looks only in the registry added as `alias`
//! - `local` (bare) must match in exactly one registry
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
//! assert!(registries.has("blog"));
//! assert_eq!(registries.resolve("blog").unwrap().to_string(), "home/blog");
//! ```

pub mod collection;
pub mod definition;
pub mod memory;

pub use collection::{QualifiedIdentifier, RegistryCollection};
pub use definition::SiteDefinition;
pub use memory::StaticRegistry;

use std::collections::BTreeMap;

use crate::error::Result;
use crate::site::Site;

/// Separator between alias and local identifier in a qualified identifier.
pub const SEPARATOR: char = '/';

/// Sites keyed by identifier.
pub type SiteMap = BTreeMap<String, Site>;

/// A source of identifier to site mappings.
pub trait Registry {
    /// Check whether `identifier` is known. Never fails.
    fn has(&self, identifier: &str) -> bool;

    /// Build the site registered under `identifier`.
    ///
    /// Fails with [`AdshError::UnknownIdentifier`](crate::AdshError::UnknownIdentifier)
    /// when absent.
    fn get(&self, identifier: &str) -> Result<Site>;

    /// Build every site this registry knows about.
    fn get_all(&self) -> Result<SiteMap>;

    /// Identifiers this registry knows about, without building sites.
    fn identifiers(&self) -> Vec<String>;

    /// Alias used when the registry is added to a collection without one.
    fn default_alias(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

fn short_type_name(name: &'static str) -> &'static str {
    name.rsplit("::").next().unwrap_or(name)
}
