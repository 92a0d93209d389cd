//! Site definition file discovery and loading.
//!
//! A site definition file is exposed to the rest of the crate as a
//! [`YamlRegistry`]; nothing outside this module knows its format.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{SiteEntry, SitesFile};
use crate::error::{AdshError, Result};
use crate::registry::{Registry, RegistryCollection, SiteDefinition, SiteMap, StaticRegistry};
use crate::site::Site;

/// Alias of the registry loaded from the home definition file.
pub const HOME_ALIAS: &str = "home";

/// Default site definition file: `~/.adsh/sites.yml`.
pub fn default_sites_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".adsh").join("sites.yml"))
}

/// Registry backed by a YAML site definition file.
#[derive(Debug, Clone)]
pub struct YamlRegistry {
    path: PathBuf,
    sites: StaticRegistry,
}

impl YamlRegistry {
    /// Load the file at `path`. A missing file is an empty registry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the YAML is invalid and `Configuration`
    /// if an entry lacks `path` or `url`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No site definitions at {}", path.display());
                return Ok(Self {
                    path: path.to_path_buf(),
                    sites: StaticRegistry::new(),
                });
            }
            Err(e) => return Err(AdshError::Io(e)),
        };

        Self::parse(&content, path)
    }

    /// Parse YAML content.
    ///
    /// # Arguments
    ///
    /// * `content` - The YAML content to parse
    /// * `source_path` - Path for error reporting
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        let file: SitesFile = if content.trim().is_empty() {
            SitesFile::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| AdshError::ConfigParseError {
                path: source_path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        let mut sites = StaticRegistry::new();
        for (identifier, entry) in &file.sites {
            sites.insert(identifier, definition_from_entry(identifier, entry)?)?;
        }
        tracing::debug!(
            "Loaded {} site definitions from {}",
            sites.len(),
            source_path.display()
        );

        Ok(Self {
            path: source_path.to_path_buf(),
            sites,
        })
    }

    /// File this registry was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn definition_from_entry(identifier: &str, entry: &SiteEntry) -> Result<SiteDefinition> {
    let missing = |property: &str| AdshError::Configuration {
        message: format!("Missing property {} for site {}", property, identifier),
    };

    let path = entry.path.as_ref().ok_or_else(|| missing("path"))?;
    let url = entry.url.as_ref().ok_or_else(|| missing("url"))?;

    let mut definition = SiteDefinition::new(path).with_url(url);
    if let Some(multisite) = &entry.multisite {
        definition = definition.with_multisite(multisite);
    }
    Ok(definition)
}

impl Registry for YamlRegistry {
    fn has(&self, identifier: &str) -> bool {
        self.sites.has(identifier)
    }

    fn get(&self, identifier: &str) -> Result<Site> {
        self.sites.get(identifier)
    }

    fn get_all(&self) -> Result<SiteMap> {
        self.sites.get_all()
    }

    fn identifiers(&self) -> Vec<String> {
        self.sites.identifiers()
    }
}

/// Build the registry collection used by the command line.
///
/// The home file is added as [`HOME_ALIAS`], then every `(alias, path)` in
/// `extra` in order.
///
/// # Errors
///
/// Any load failure, or `DuplicateAlias` when an alias repeats.
pub fn load_registries(
    home: Option<&Path>,
    extra: &[(String, PathBuf)],
) -> Result<RegistryCollection> {
    let mut collection = RegistryCollection::new();

    if let Some(home) = home {
        collection.add_registry(YamlRegistry::load(home)?, Some(HOME_ALIAS))?;
    }

    for (alias, path) in extra {
        collection.add_registry(YamlRegistry::load(path)?, Some(alias))?;
    }

    Ok(collection)
}
