//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::registry::{Registry, RegistryCollection};
use crate::site::{find_local_instance, Site};
use crate::ui::UserInterface;

use super::{bootstrap, completions, list_sites, resolve, status};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
///
/// Owns the registry collection built at startup and the directory that
/// local discovery starts from.
pub struct CommandDispatcher {
    registries: RegistryCollection,
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(registries: RegistryCollection, working_dir: PathBuf) -> Self {
        Self {
            registries,
            working_dir,
        }
    }

    pub fn registries(&self) -> &RegistryCollection {
        &self.registries
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Site named by `identifier`, or the local instance enclosing the
    /// working directory when no identifier is given.
    pub fn select_site(&self, identifier: Option<&str>) -> Result<Site> {
        match identifier {
            Some(identifier) => {
                tracing::debug!("Selecting site '{}' from registries", identifier);
                self.registries.get(identifier)
            }
            None => {
                tracing::debug!(
                    "Discovering local site from {}",
                    self.working_dir.display()
                );
                find_local_instance(&self.working_dir)
            }
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let site = cli.site.as_deref();
        match &cli.command {
            Commands::ListSites(args) => {
                let cmd = list_sites::ListSitesCommand::new(&self.registries, args.clone());
                cmd.execute(ui)
            }
            Commands::Status(args) => {
                let cmd = status::StatusCommand::new(self.select_site(site)?, args.clone());
                cmd.execute(ui)
            }
            Commands::Bootstrap(args) => {
                let cmd = bootstrap::BootstrapCommand::new(self.select_site(site)?, args.clone());
                cmd.execute(ui)
            }
            Commands::Resolve(args) => {
                let cmd = resolve::ResolveCommand::new(&self.registries, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
