//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::site::BootstrapLevel;

/// adsh - Locate, identify and bootstrap local site installations.
#[derive(Debug, Parser)]
#[command(name = "adsh")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Site identifier, bare or qualified as alias/id (default: discover from the current directory)
    #[arg(short, long, global = true, env = "ADSH_SITE")]
    pub site: Option<String>,

    /// Site definition file registered as `home` (default: ~/.adsh/sites.yml)
    #[arg(long, global = true, env = "ADSH_SITES_FILE", value_name = "PATH")]
    pub sites_file: Option<PathBuf>,

    /// Additional site definition file, as ALIAS=PATH (repeatable)
    #[arg(long = "registry", global = true, value_name = "ALIAS=PATH", value_parser = parse_registry_arg)]
    pub registries: Vec<(String, PathBuf)>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every registered site
    #[command(visible_alias = "ls")]
    ListSites(ListSitesArgs),

    /// Show facts about the selected site
    Status(StatusArgs),

    /// Bootstrap the selected site up to a level
    Bootstrap(BootstrapArgs),

    /// Resolve an identifier to its registry
    Resolve(ResolveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list-sites` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListSitesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `bootstrap` command.
#[derive(Debug, Clone, clap::Args)]
pub struct BootstrapArgs {
    /// Level to reach
    #[arg(short, long, value_enum, default_value_t = BootstrapLevel::Full)]
    pub level: BootstrapLevel,
}

impl Default for BootstrapArgs {
    fn default() -> Self {
        Self {
            level: BootstrapLevel::Full,
        }
    }
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResolveArgs {
    /// Bare or qualified identifier
    pub identifier: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Parse `ALIAS=PATH`.
fn parse_registry_arg(value: &str) -> Result<(String, PathBuf), String> {
    match value.split_once('=') {
        Some((alias, path)) if !alias.is_empty() && !path.is_empty() => {
            Ok((alias.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected ALIAS=PATH, got '{}'", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_registry_pairs() {
        let cli = Cli::try_parse_from([
            "adsh",
            "--registry",
            "work=/tmp/work.yml",
            "--registry",
            "play=/tmp/play.yml",
            "list-sites",
        ])
        .unwrap();
        assert_eq!(
            cli.registries,
            vec![
                ("work".to_string(), PathBuf::from("/tmp/work.yml")),
                ("play".to_string(), PathBuf::from("/tmp/play.yml")),
            ]
        );
    }

    #[test]
    fn rejects_malformed_registry() {
        assert!(parse_registry_arg("work").is_err());
        assert!(parse_registry_arg("=/tmp/x.yml").is_err());
        assert!(parse_registry_arg("work=").is_err());
    }

    #[test]
    fn ls_is_alias_for_list_sites() {
        let cli = Cli::try_parse_from(["adsh", "ls", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::ListSites(ListSitesArgs { json: true })));
    }

    #[test]
    fn bootstrap_level_defaults_to_full() {
        let cli = Cli::try_parse_from(["adsh", "bootstrap"]).unwrap();
        match cli.command {
            Commands::Bootstrap(args) => assert_eq!(args.level, BootstrapLevel::Full),
            other => panic!("Expected bootstrap, got {:?}", other),
        }
    }

    #[test]
    fn bootstrap_level_parses() {
        let cli = Cli::try_parse_from(["adsh", "bootstrap", "--level", "database"]).unwrap();
        match cli.command {
            Commands::Bootstrap(args) => assert_eq!(args.level, BootstrapLevel::Database),
            other => panic!("Expected bootstrap, got {:?}", other),
        }
    }

    #[test]
    fn site_is_global() {
        let cli = Cli::try_parse_from(["adsh", "status", "--site", "home/blog"]).unwrap();
        assert_eq!(cli.site.as_deref(), Some("home/blog"));
    }
}
