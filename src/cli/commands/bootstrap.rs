//! Bootstrap command implementation.
//!
//! The `adsh bootstrap` command drives the selected site through its
//! bootstrap levels and reports the deepest level reached.

use std::cell::RefCell;

use crate::cli::args::BootstrapArgs;
use crate::error::Result;
use crate::site::{
    BootstrapLevel, BootstrapRuntime, ProbeRuntime, ProcessEnvironment, Site, SiteEvent,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Forwards level entry to a runtime and echoes lifecycle events.
struct ReportingRuntime<'a, R> {
    inner: R,
    ui: &'a mut dyn UserInterface,
}

impl<R: BootstrapRuntime> BootstrapRuntime for ReportingRuntime<'_, R> {
    fn enter(&mut self, site: &Site, level: BootstrapLevel) -> Result<()> {
        self.inner.enter(site, level)
    }

    fn notify(&mut self, site: &Site, event: SiteEvent) {
        match event {
            SiteEvent::EnvironmentPrepared => self.ui.detail("Environment prepared"),
            SiteEvent::LevelReached(level) => self.ui.detail(&format!("Reached {}", level)),
            SiteEvent::Bootstrapped => self.ui.detail("Fully bootstrapped"),
        }
        self.inner.notify(site, event);
    }
}

/// The bootstrap command implementation.
pub struct BootstrapCommand {
    site: RefCell<Site>,
    args: BootstrapArgs,
}

impl BootstrapCommand {
    /// Create a new bootstrap command for `site`.
    pub fn new(site: Site, args: BootstrapArgs) -> Self {
        Self {
            site: RefCell::new(site),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &BootstrapArgs {
        &self.args
    }
}

impl Command for BootstrapCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut site = self.site.borrow_mut();
        ui.message(&format!("Bootstrapping {} to {}", site, self.args.level));

        let mut environment = ProcessEnvironment::new();
        let mut runtime = ReportingRuntime {
            inner: ProbeRuntime::new(),
            ui: &mut *ui,
        };
        let reached = site.bootstrap(self.args.level, &mut environment, &mut runtime)?;

        let version = site.known_version().unwrap_or("unknown").to_string();
        ui.success(&format!("Reached {} (version {})", reached, version));
        ui.data(reached.as_str());

        Ok(CommandResult::success())
    }
}
