//! Status command implementation.
//!
//! The `adsh status` command shows what is known about the selected site.

use std::cell::RefCell;

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::error::{AdshError, Result};
use crate::site::Site;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

const UNKNOWN: &str = "unknown";

/// Facts reported by `status`.
#[derive(Debug, Serialize)]
struct SiteReport {
    root: Option<String>,
    multisite: String,
    url: Option<String>,
    version: Option<String>,
    state: String,
}

impl SiteReport {
    /// Collect facts, discovering URL and version where possible.
    fn collect(site: &mut Site) -> Self {
        let url = site.url().map(str::to_string).ok();
        let version = match site.version() {
            Ok(version) => Some(version.to_string()),
            Err(e) => {
                tracing::debug!("{}", e);
                None
            }
        };

        Self {
            root: site.root().map(|root| root.display().to_string()),
            multisite: site.multisite_identifier().to_string(),
            url,
            version,
            state: site.state().to_string(),
        }
    }
}

/// The status command implementation.
pub struct StatusCommand {
    site: RefCell<Site>,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command for `site`.
    pub fn new(site: Site, args: StatusArgs) -> Self {
        Self {
            site: RefCell::new(site),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StatusArgs {
        &self.args
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut site = self.site.borrow_mut();
        let report = SiteReport::collect(&mut site);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| AdshError::Other(e.into()))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Site {}", site));
        let rows = [
            ("Root", report.root.as_deref().unwrap_or("<unset>")),
            ("Multisite", report.multisite.as_str()),
            ("URL", report.url.as_deref().unwrap_or(UNKNOWN)),
            ("Version", report.version.as_deref().unwrap_or(UNKNOWN)),
            ("State", report.state.as_str()),
        ];
        for (key, value) in rows {
            ui.data(&format!("{:<10} {}", format!("{}:", key), value));
        }

        if report.version.is_none() {
            ui.warning("No version found; this directory may not be a site root");
        }

        Ok(CommandResult::success())
    }
}
