//! Identifier resolution across aliased registries.

use std::fmt;

use crate::error::{AdshError, Result};
use crate::registry::memory::validate_identifier;
use crate::registry::{Registry, SiteMap, SEPARATOR};
use crate::site::Site;

/// An identifier bound to the alias of the registry that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedIdentifier {
    pub alias: String,
    pub local: String,
}

impl QualifiedIdentifier {
    pub fn new(alias: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            local: local.into(),
        }
    }

    /// Split `alias/local` on the first separator. `None` for bare identifiers.
    pub fn parse(identifier: &str) -> Option<Self> {
        identifier
            .split_once(SEPARATOR)
            .map(|(alias, local)| Self::new(alias, local))
    }
}

impl fmt::Display for QualifiedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.alias, SEPARATOR, self.local)
    }
}

/// Registries composed under unique aliases.
///
/// Registries are probed in the order they were added; ambiguity
/// candidates and [`aliases`](Self::aliases) follow that order.
#[derive(Default)]
pub struct RegistryCollection {
    registries: Vec<(String, Box<dyn Registry>)>,
}

impl RegistryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a registry under `alias`, or under its
    /// [`default_alias`](Registry::default_alias) when `None`.
    ///
    /// Fails on a duplicate alias, and on an alias or local identifier that
    /// contains [`SEPARATOR`].
    pub fn add_registry<R>(&mut self, registry: R, alias: Option<&str>) -> Result<()>
    where
        R: Registry + 'static,
    {
        let alias = alias.unwrap_or_else(|| registry.default_alias());
        validate_identifier(alias)?;

        if self.registry(alias).is_some() {
            return Err(AdshError::DuplicateAlias {
                alias: alias.to_string(),
            });
        }

        for identifier in registry.identifiers() {
            validate_identifier(&identifier)?;
        }

        tracing::debug!("Adding registry '{}'", alias);
        let registry: Box<dyn Registry> = Box::new(registry);
        self.registries.push((alias.to_string(), registry));
        Ok(())
    }

    /// Aliases in registration order.
    pub fn aliases(&self) -> Vec<&str> {
        self.registries
            .iter()
            .map(|(alias, _)| alias.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }

    fn registry(&self, alias: &str) -> Option<&dyn Registry> {
        self.registries
            .iter()
            .find(|(a, _)| a == alias)
            .map(|(_, r)| r.as_ref())
    }

    /// Resolve `identifier` to exactly one registry and local identifier.
    ///
    /// A qualified identifier is authoritative: only the named registry is
    /// consulted. A bare identifier is probed in every registry and must
    /// match exactly once.
    pub fn resolve(&self, identifier: &str) -> Result<QualifiedIdentifier> {
        if let Some(qualified) = QualifiedIdentifier::parse(identifier) {
            let registry = self
                .registry(&qualified.alias)
                .ok_or_else(|| AdshError::UnknownAlias {
                    alias: qualified.alias.clone(),
                })?;
            if !registry.has(&qualified.local) {
                return Err(AdshError::UnknownIdentifier {
                    identifier: identifier.to_string(),
                });
            }
            return Ok(qualified);
        }

        let mut found: Vec<QualifiedIdentifier> = self
            .registries
            .iter()
            .filter(|(_, registry)| registry.has(identifier))
            .map(|(alias, _)| QualifiedIdentifier::new(alias.as_str(), identifier))
            .collect();
        tracing::debug!(
            "Identifier '{}' found in {} registries",
            identifier,
            found.len()
        );

        if found.len() > 1 {
            return Err(AdshError::AmbiguousIdentifier {
                identifier: identifier.to_string(),
                candidates: found.iter().map(ToString::to_string).collect(),
            });
        }

        found.pop().ok_or_else(|| AdshError::UnknownIdentifier {
            identifier: identifier.to_string(),
        })
    }
}

impl Registry for RegistryCollection {
    /// An ambiguous bare identifier exists, it just cannot be fetched bare.
    fn has(&self, identifier: &str) -> bool {
        matches!(
            self.resolve(identifier),
            Ok(_) | Err(AdshError::AmbiguousIdentifier { .. })
        )
    }

    fn get(&self, identifier: &str) -> Result<Site> {
        let qualified = self.resolve(identifier)?;
        let registry = self
            .registry(&qualified.alias)
            .ok_or_else(|| AdshError::UnknownAlias {
                alias: qualified.alias.clone(),
            })?;
        registry.get(&qualified.local)
    }

    fn get_all(&self) -> Result<SiteMap> {
        let mut all = SiteMap::new();
        for (alias, registry) in &self.registries {
            for (local, site) in registry.get_all()? {
                all.insert(QualifiedIdentifier::new(alias.as_str(), local).to_string(), site);
            }
        }
        Ok(all)
    }

    fn identifiers(&self) -> Vec<String> {
        self.registries
            .iter()
            .flat_map(|(alias, registry)| {
                registry
                    .identifiers()
                    .into_iter()
                    .map(move |local| QualifiedIdentifier::new(alias.as_str(), local).to_string())
            })
            .collect()
    }
}
