//! Reading facts out of a site's own source files.
//!
//! These helpers only read; they never execute site code.

use regex::Regex;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::{AdshError, Result};

/// The version constant sits near the top of the bootstrap include.
const VERSION_BUFFER_LEN: u64 = 1024;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?im)^\s*define\(\s*'VERSION'\s*,\s*'([^']+)'"#)
        .expect("VERSION_REGEX must compile")
});

static BASE_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*\$base_url\s*=\s*['"]([^'"]+)['"]"#)
        .expect("BASE_URL_REGEX must compile")
});

static DATABASES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*\$databases\s*(\[|=)"#).expect("DATABASES_REGEX must compile")
});

/// Directory holding core files: `<root>/core` when present, else `<root>`.
pub fn core_dir(root: &Path) -> PathBuf {
    let core = root.join("core");
    if core.is_dir() {
        core
    } else {
        root.to_path_buf()
    }
}

/// Path of the settings file for one multisite entry.
pub fn settings_path(root: &Path, multisite: &str) -> PathBuf {
    root.join("sites").join(multisite).join("settings.php")
}

/// Read the version constant from the bootstrap include.
///
/// Only the first [`VERSION_BUFFER_LEN`] bytes are scanned.
pub fn find_version(root: &Path) -> Result<String> {
    let path = core_dir(root).join("includes").join("bootstrap.inc");
    let not_found = || AdshError::VersionNotFound {
        root: root.to_path_buf(),
    };

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
        Err(e) => return Err(AdshError::Io(e)),
    };

    let mut buffer = Vec::new();
    file.take(VERSION_BUFFER_LEN).read_to_end(&mut buffer)?;
    let buffer = String::from_utf8_lossy(&buffer);

    VERSION_REGEX
        .captures(&buffer)
        .map(|caps| caps[1].to_string())
        .ok_or_else(not_found)
}

/// Read `$base_url` from the multisite settings file.
pub fn find_url(root: &Path, multisite: &str) -> Option<String> {
    let content = fs::read_to_string(settings_path(root, multisite)).ok()?;
    BASE_URL_REGEX
        .captures(&content)
        .map(|caps| caps[1].to_string())
}

/// Whether settings content declares database credentials.
pub fn declares_databases(settings: &str) -> bool {
    DATABASES_REGEX.is_match(settings)
}
