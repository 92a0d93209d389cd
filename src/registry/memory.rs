//! In-memory registry.

use std::collections::BTreeMap;

use crate::error::{AdshError, Result};
use crate::registry::definition::SiteDefinition;
use crate::registry::{Registry, SiteMap, SEPARATOR};
use crate::site::Site;

/// Registry backed by a map of site definitions.
///
/// Every [`get`](Registry::get) builds a new unlocked [`Site`].
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    sites: BTreeMap<String, SiteDefinition>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `definition` under `identifier`, replacing any previous one.
    ///
    /// Identifiers containing [`SEPARATOR`] are rejected: they could never be
    /// looked up bare.
    pub fn insert(&mut self, identifier: &str, definition: SiteDefinition) -> Result<()> {
        validate_identifier(identifier)?;
        self.sites.insert(identifier.to_string(), definition);
        Ok(())
    }

    /// Definition registered under `identifier`.
    pub fn definition(&self, identifier: &str) -> Option<&SiteDefinition> {
        self.sites.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

/// Reject identifiers that cannot appear bare.
pub(crate) fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.is_empty() {
        return Err(AdshError::InvalidIdentifier {
            identifier: identifier.to_string(),
            reason: "identifier must not be empty".to_string(),
        });
    }
    if identifier.contains(SEPARATOR) {
        return Err(AdshError::InvalidIdentifier {
            identifier: identifier.to_string(),
            reason: format!("identifier must not contain '{}'", SEPARATOR),
        });
    }
    Ok(())
}

impl Registry for StaticRegistry {
    fn has(&self, identifier: &str) -> bool {
        self.sites.contains_key(identifier)
    }

    fn get(&self, identifier: &str) -> Result<Site> {
        self.sites
            .get(identifier)
            .ok_or_else(|| AdshError::UnknownIdentifier {
                identifier: identifier.to_string(),
            })?
            .instantiate()
    }

    fn get_all(&self) -> Result<SiteMap> {
        self.sites
            .iter()
            .map(|(id, def)| Ok((id.clone(), def.instantiate()?)))
            .collect()
    }

    fn identifiers(&self) -> Vec<String> {
        self.sites.keys().cloned().collect()
    }
}
