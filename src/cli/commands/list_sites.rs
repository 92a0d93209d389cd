//! List-sites command implementation.
//!
//! The `adsh list-sites` command prints every site known to the registries.

use serde::Serialize;

use crate::cli::args::ListSitesArgs;
use crate::error::{AdshError, Result};
use crate::registry::{Registry, RegistryCollection};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// One row of `list-sites --json`.
#[derive(Debug, Serialize)]
struct SiteEntry {
    identifier: String,
    root: Option<String>,
    multisite: String,
    url: Option<String>,
}

/// The list-sites command implementation.
pub struct ListSitesCommand<'a> {
    registries: &'a RegistryCollection,
    args: ListSitesArgs,
}

impl<'a> ListSitesCommand<'a> {
    /// Create a new list-sites command.
    pub fn new(registries: &'a RegistryCollection, args: ListSitesArgs) -> Self {
        Self { registries, args }
    }
}

impl Command for ListSitesCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let sites = self.registries.get_all()?;

        if self.args.json {
            let entries: Vec<SiteEntry> = sites
                .iter()
                .map(|(identifier, site)| SiteEntry {
                    identifier: identifier.clone(),
                    root: site.root().map(|root| root.display().to_string()),
                    multisite: site.multisite_identifier().to_string(),
                    url: site.known_url().map(str::to_string),
                })
                .collect();
            let json =
                serde_json::to_string_pretty(&entries).map_err(|e| AdshError::Other(e.into()))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if sites.is_empty() {
            ui.message("No sites registered.");
            return Ok(CommandResult::success());
        }

        let width = sites.keys().map(String::len).max().unwrap_or(0);
        for (identifier, site) in &sites {
            ui.data(&format!("{:<width$}  {}", identifier, site, width = width));
        }

        Ok(CommandResult::success())
    }
}
