//! Static site definitions.

use std::path::PathBuf;

use crate::error::Result;
use crate::site::Site;

/// What a registry knows about a site before it is instantiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDefinition {
    /// Site root path.
    pub path: PathBuf,
    /// Explicit URL; discovered from the site when absent.
    pub url: Option<String>,
    /// Multisite identifier; the default entry when absent.
    pub multisite: Option<String>,
}

impl SiteDefinition {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            url: None,
            multisite: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_multisite(mut self, multisite: impl Into<String>) -> Self {
        self.multisite = Some(multisite.into());
        self
    }

    /// Build a fresh, unlocked site from this definition.
    pub fn instantiate(&self) -> Result<Site> {
        let mut site = Site::new();
        site.set_root(&self.path)?;
        if let Some(url) = &self.url {
            site.set_url(url)?;
        }
        if let Some(multisite) = &self.multisite {
            site.set_multisite_identifier(multisite)?;
        }
        Ok(site)
    }
}
