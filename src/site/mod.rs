//! Managed site instances and their lifecycle.
//!
//! A [`Site`] carries the facts that identify one application instance
//! (root path, URL, version, multisite identifier) together with a
//! [`LifecycleState`] that only moves forward:
//!
//! ```text
//! Uninitialized → Configured → Locked → Bootstrap(configuration → database → variables → full)
//! ```
//!
//! Identifying facts may change until the site is locked. Bootstrapping
//! locks the site and then walks the levels in order through an external
//! [`BootstrapRuntime`]; see [`Site::bootstrap`].
//!
//! # Example
//!
//! ```
//! use adsh::site::Site;
//!
//! let mut site = Site::new();
//! site.set_root("/var/www/blog").unwrap();
//! site.set_url("http://blog.localhost").unwrap();
//! site.lock();
//!
//! assert!(site.is_locked());
//! assert!(site.set_root("/elsewhere").is_err());
//! ```

pub mod discovery;
pub mod lifecycle;
pub mod runtime;
pub mod source;
pub mod state;

pub use discovery::{find_local_instance, is_site_root, ROOT_MARKER};
pub use lifecycle::SiteEvent;
pub use runtime::{BootstrapRuntime, EnvironmentAdapter, ProbeRuntime, ProcessEnvironment};
pub use state::{BootstrapLevel, LifecycleState};

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{AdshError, Result};

/// Multisite identifier used when none is given.
pub const DEFAULT_MULTISITE: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum UrlState {
    #[default]
    Unknown,
    Known(String),
    /// Discovery already failed; never retried.
    Undiscoverable,
}

/// One managed application instance.
#[derive(Debug)]
pub struct Site {
    root: Option<PathBuf>,
    url: UrlState,
    version: Option<String>,
    multisite: String,
    state: LifecycleState,
    environment_prepared: bool,
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

impl Site {
    /// Create an unconfigured site.
    pub fn new() -> Self {
        Self {
            root: None,
            url: UrlState::Unknown,
            version: None,
            multisite: DEFAULT_MULTISITE.to_string(),
            state: LifecycleState::Uninitialized,
            environment_prepared: false,
        }
    }

    /// Create a site rooted at `root`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            state: LifecycleState::Configured,
            ..Self::new()
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.state.is_bootstrapped()
    }

    /// Deepest bootstrap level reached so far.
    pub fn bootstrap_level(&self) -> Option<BootstrapLevel> {
        self.state.level()
    }

    /// Site root, if set.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Site root, or a configuration error when unset.
    pub fn require_root(&self) -> Result<&Path> {
        self.root().ok_or_else(|| AdshError::Configuration {
            message: "Site root is not set".to_string(),
        })
    }

    /// Set the root path. Last write wins until the site is locked.
    pub fn set_root(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.ensure_unlocked("root")?;
        self.root = Some(path.into());
        if self.state == LifecycleState::Uninitialized {
            self.state = LifecycleState::Configured;
        }
        Ok(())
    }

    /// Explicitly assign the URL, bypassing discovery.
    pub fn set_url(&mut self, url: impl Into<String>) -> Result<()> {
        self.ensure_unlocked("URL")?;
        self.url = UrlState::Known(url.into());
        Ok(())
    }

    /// URL if already known, without attempting discovery.
    pub fn known_url(&self) -> Option<&str> {
        match &self.url {
            UrlState::Known(url) => Some(url.as_str()),
            _ => None,
        }
    }

    /// The site URL, discovering it from the settings file on first use.
    ///
    /// A failed discovery is remembered: later calls fail immediately.
    pub fn url(&mut self) -> Result<&str> {
        if self.url == UrlState::Unknown {
            let root = self.require_root()?.to_path_buf();
            self.url = match source::find_url(&root, &self.multisite) {
                Some(url) => UrlState::Known(url),
                None => {
                    tracing::warn!("No base URL found for site at {}", root.display());
                    UrlState::Undiscoverable
                }
            };
        }

        match &self.url {
            UrlState::Known(url) => Ok(url.as_str()),
            _ => Err(AdshError::UrlNotFound {
                root: self.root.clone().unwrap_or_default(),
            }),
        }
    }

    pub fn multisite_identifier(&self) -> &str {
        &self.multisite
    }

    pub fn set_multisite_identifier(&mut self, identifier: impl Into<String>) -> Result<()> {
        self.ensure_unlocked("identifier")?;
        self.multisite = identifier.into();
        Ok(())
    }

    /// Version if already known, without attempting discovery.
    pub fn known_version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The site version, read from source files on first use.
    ///
    /// Source files are only consulted while the site is unlocked.
    pub fn version(&mut self) -> Result<&str> {
        if self.version.is_none() {
            let root = self.require_root()?.to_path_buf();
            if self.is_locked() {
                return Err(AdshError::VersionNotFound { root });
            }
            self.version = Some(source::find_version(&root)?);
        }
        Ok(self.version.as_deref().unwrap_or_default())
    }

    /// Freeze identifying facts. Irreversible; repeated calls are no-ops.
    pub fn lock(&mut self) {
        if !self.is_locked() {
            tracing::debug!("Locking site {}", self);
            self.state = LifecycleState::Locked;
        }
    }

    fn ensure_unlocked(&self, field: &'static str) -> Result<()> {
        if self.is_locked() {
            return Err(AdshError::SiteLocked { field });
        }
        Ok(())
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{} [{}]", root.display(), self.multisite),
            None => write!(f, "<unset> [{}]", self.multisite),
        }
    }
}
