//! Lifecycle states and bootstrap levels.

use std::fmt;
use std::str::FromStr;

/// Depth of initialization the external runtime has reached for a site.
///
/// Levels are walked in declaration order; each one implies every level
/// before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum BootstrapLevel {
    /// Site configuration (settings file) loaded.
    Configuration,
    /// Database connection available.
    Database,
    /// Persistent variables loaded.
    Variables,
    /// Fully initialized.
    Full,
}

impl BootstrapLevel {
    /// Every level, in the order the runtime must enter them.
    pub const ALL: [BootstrapLevel; 4] = [
        BootstrapLevel::Configuration,
        BootstrapLevel::Database,
        BootstrapLevel::Variables,
        BootstrapLevel::Full,
    ];

    /// Lowercase name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Database => "database",
            Self::Variables => "variables",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for BootstrapLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BootstrapLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "configuration" => Ok(Self::Configuration),
            "database" => Ok(Self::Database),
            "variables" => Ok(Self::Variables),
            "full" => Ok(Self::Full),
            _ => Err(format!("unknown bootstrap level: {}", s)),
        }
    }
}

/// Where a site is in its lifecycle.
///
/// States are totally ordered and only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LifecycleState {
    /// Nothing known about the site yet.
    #[default]
    Uninitialized,
    /// Root path set; identifying facts may still change.
    Configured,
    /// Identifying facts are frozen.
    Locked,
    /// The runtime has entered the given level.
    Bootstrap(BootstrapLevel),
}

impl LifecycleState {
    /// Whether identifying facts are frozen.
    pub fn is_locked(&self) -> bool {
        *self >= Self::Locked
    }

    /// Whether the site reached [`BootstrapLevel::Full`].
    pub fn is_bootstrapped(&self) -> bool {
        *self == Self::Bootstrap(BootstrapLevel::Full)
    }

    /// Deepest bootstrap level reached, if any.
    pub fn level(&self) -> Option<BootstrapLevel> {
        match self {
            Self::Bootstrap(level) => Some(*level),
            _ => None,
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => f.write_str("uninitialized"),
            Self::Configured => f.write_str("configured"),
            Self::Locked => f.write_str("locked"),
            Self::Bootstrap(level) => write!(f, "bootstrap:{}", level),
        }
    }
}
