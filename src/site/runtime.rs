//! Collaborators driven by [`Site::bootstrap`](super::Site::bootstrap).
//!
//! - [`EnvironmentAdapter`] prepares process state before the first level
//! - [`BootstrapRuntime`] enters each level in the managed application
//!
//! The shipped implementations are [`ProcessEnvironment`], which emulates
//! the web server variables a CLI run lacks, and [`ProbeRuntime`], which
//! checks on-disk prerequisites per level without executing site code.

use std::path::Path;

use crate::error::{AdshError, Result};

use super::lifecycle::SiteEvent;
use super::source;
use super::{BootstrapLevel, Site};

/// Prepares the process environment for a site.
///
/// Called at most once per site, before the first level is entered.
pub trait EnvironmentAdapter {
    fn prepare(&mut self, site: &Site) -> Result<()>;
}

/// Enters bootstrap levels in the managed application.
///
/// Levels are requested in ascending order and never twice for the same
/// site. There is no way to leave a level.
pub trait BootstrapRuntime {
    /// Enter `level`. An error aborts the bootstrap.
    fn enter(&mut self, site: &Site, level: BootstrapLevel) -> Result<()>;

    /// Observe lifecycle events. Does nothing by default.
    fn notify(&mut self, _site: &Site, _event: SiteEvent) {}
}

/// Server variables a web request would normally carry.
const SERVER_DEFAULTS: [(&str, &str); 3] = [
    ("REMOTE_ADDR", "127.0.0.1"),
    ("SERVER_SOFTWARE", "adsh-cli"),
    ("REQUEST_METHOD", "GET"),
];

/// Emulates web server variables in the process environment.
#[derive(Debug, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }

    /// Compute the variables to set for `site`, reading current values
    /// through `lookup`.
    ///
    /// Existing values are never overwritten, except `SCRIPT_NAME` when
    /// running inside a web request: it is rewritten relative to
    /// `DOCUMENT_ROOT` so the site sees its own front controller.
    pub fn plan<F>(site: &Site, lookup: F) -> Vec<(String, String)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut vars = Vec::new();

        let in_request = lookup("REQUEST_METHOD").is_some_and(|m| !m.is_empty());
        if in_request {
            if let (Some(root), Some(document_root)) = (site.root(), lookup("DOCUMENT_ROOT")) {
                if let Some(script) = script_name(root, Path::new(&document_root)) {
                    vars.push(("SCRIPT_NAME".to_string(), script));
                }
            }
        }

        for (key, value) in SERVER_DEFAULTS {
            if lookup(key).is_none() {
                vars.push((key.to_string(), value.to_string()));
            }
        }

        vars
    }
}

impl EnvironmentAdapter for ProcessEnvironment {
    fn prepare(&mut self, site: &Site) -> Result<()> {
        for (key, value) in Self::plan(site, |key| std::env::var(key).ok()) {
            tracing::debug!("Setting {}={}", key, value);
            std::env::set_var(key, value);
        }
        Ok(())
    }
}

fn script_name(root: &Path, document_root: &Path) -> Option<String> {
    let relative = root.strip_prefix(document_root).ok()?;
    let prefix = relative.to_string_lossy();
    if prefix.is_empty() {
        Some("/index.php".to_string())
    } else {
        Some(format!("/{}/index.php", prefix))
    }
}

/// Checks per-level prerequisites on disk.
#[derive(Debug, Default)]
pub struct ProbeRuntime;

impl ProbeRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl BootstrapRuntime for ProbeRuntime {
    fn enter(&mut self, site: &Site, level: BootstrapLevel) -> Result<()> {
        let root = site.require_root()?;
        let fail = |message: String| AdshError::BootstrapFailed { level, message };
        let settings = source::settings_path(root, site.multisite_identifier());

        match level {
            BootstrapLevel::Configuration => {
                if !settings.is_file() {
                    return Err(fail(format!(
                        "settings file not found: {}",
                        settings.display()
                    )));
                }
            }
            BootstrapLevel::Database => {
                let content = std::fs::read_to_string(&settings)?;
                if !source::declares_databases(&content) {
                    return Err(fail(format!(
                        "no database credentials in {}",
                        settings.display()
                    )));
                }
            }
            BootstrapLevel::Variables => {}
            BootstrapLevel::Full => {
                let modules = source::core_dir(root).join("modules");
                if !modules.is_dir() {
                    return Err(fail(format!(
                        "modules directory not found: {}",
                        modules.display()
                    )));
                }
            }
        }

        Ok(())
    }

    fn notify(&mut self, site: &Site, event: SiteEvent) {
        tracing::debug!("Site {}: {:?}", site, event);
    }
}
