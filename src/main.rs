//! adsh CLI entry point.

use std::process::ExitCode;

use adsh::cli::{Cli, CommandDispatcher};
use adsh::config::{default_sites_file, load_registries};
use adsh::error::Result;
use adsh::ui::{create_ui, OutputMode, UserInterface};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("adsh=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("adsh=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn build_dispatcher(cli: &Cli) -> Result<CommandDispatcher> {
    let working_dir = std::env::current_dir()?;
    let home = cli.sites_file.clone().or_else(default_sites_file);
    let registries = load_registries(home.as_deref(), &cli.registries)?;
    Ok(CommandDispatcher::new(registries, working_dir))
}

fn run(cli: &Cli, ui: &mut dyn UserInterface) -> Result<i32> {
    let dispatcher = build_dispatcher(cli)?;
    let result = dispatcher.dispatch(cli, ui)?;
    Ok(result.exit_code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("adsh starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(true, OutputMode::from_flags(cli.quiet, cli.verbose));

    match run(&cli, ui.as_mut()) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
