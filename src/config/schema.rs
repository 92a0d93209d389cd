//! Site definition file schema.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root of a site definition file.
///
/// ```yaml
/// sites:
///   my_site:
///     path: /var/www/my_site/public
///     url: http://my_site.localhost
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SitesFile {
    /// Site entries keyed by local identifier.
    #[serde(default)]
    pub sites: BTreeMap<String, SiteEntry>,
}

/// One site entry. `path` and `url` are mandatory, checked after parsing so
/// the error can name the entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteEntry {
    /// Where the site lives. Only local sites are supported.
    #[serde(default, rename = "type")]
    pub kind: SiteKind,

    /// Site root path.
    pub path: Option<PathBuf>,

    /// Site URL.
    pub url: Option<String>,

    /// Multisite identifier (defaults to `default`).
    pub multisite: Option<String>,
}

/// Site location kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteKind {
    /// Site on this machine.
    #[default]
    Local,
}
