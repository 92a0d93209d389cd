//! Bootstrap orchestration.
//!
//! [`Site::bootstrap`] is the only path that moves a site past
//! [`LifecycleState::Locked`]. Levels are entered at most once per site and
//! never rolled back: a failure leaves the site locked at whatever level it
//! last reached.

use crate::error::Result;

use super::runtime::{BootstrapRuntime, EnvironmentAdapter};
use super::{BootstrapLevel, LifecycleState, Site};

/// Notifications raised while a site bootstraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteEvent {
    /// The environment adapter ran for this site.
    EnvironmentPrepared,
    /// The runtime entered a level.
    LevelReached(BootstrapLevel),
    /// The site is fully bootstrapped.
    Bootstrapped,
}

impl Site {
    /// Bootstrap the site up to `target`.
    ///
    /// Requires a root path. On first use the environment adapter is run and
    /// the version is frozen from source files; the site is then locked and
    /// each level not yet reached, up to and including `target`, is entered
    /// in ascending order. Asking for a level already reached does nothing.
    ///
    /// Returns the deepest level reached.
    pub fn bootstrap(
        &mut self,
        target: BootstrapLevel,
        env: &mut dyn EnvironmentAdapter,
        runtime: &mut dyn BootstrapRuntime,
    ) -> Result<BootstrapLevel> {
        if let Some(reached) = self.bootstrap_level() {
            if reached >= target {
                tracing::debug!(
                    "Site {} already at {}, ignoring request for {}",
                    self,
                    reached,
                    target
                );
                return Ok(reached);
            }
        }

        self.require_root()?;

        if !self.environment_prepared {
            env.prepare(self)?;
            self.environment_prepared = true;
            runtime.notify(self, SiteEvent::EnvironmentPrepared);
        }

        // Source files are off limits once locked.
        self.version()?;
        self.lock();

        let reached = self.bootstrap_level();
        for level in BootstrapLevel::ALL {
            if Some(level) <= reached {
                continue;
            }
            if level > target {
                break;
            }

            tracing::debug!("Entering {} for site {}", level, self);
            runtime.enter(self, level)?;
            self.state = LifecycleState::Bootstrap(level);
            tracing::info!("Site {} reached {}", self, level);
            runtime.notify(self, SiteEvent::LevelReached(level));
        }

        if self.is_bootstrapped() {
            runtime.notify(self, SiteEvent::Bootstrapped);
        }

        Ok(target)
    }
}
