//! Local site discovery.

use std::path::Path;

use crate::error::{AdshError, Result};

use super::Site;

/// File whose presence marks a site root.
pub const ROOT_MARKER: &str = "index.php";

/// Check whether `dir` is a site root.
pub fn is_site_root(dir: &Path) -> bool {
    dir.join(ROOT_MARKER).is_file()
}

/// Find the site containing `start` by walking up parent directories.
///
/// Returns an unlocked [`Site`] rooted at the first directory holding
/// [`ROOT_MARKER`]. Only reads the filesystem, so repeated calls agree.
pub fn find_local_instance(start: &Path) -> Result<Site> {
    for dir in start.ancestors() {
        if is_site_root(dir) {
            tracing::debug!("Found local site at {}", dir.display());
            return Ok(Site::at(dir));
        }
    }

    Err(AdshError::NoLocalInstanceFound {
        start: start.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_marker_in_ancestor() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        let c = a.join("b").join("c");
        fs::create_dir_all(&c).unwrap();
        fs::write(a.join(ROOT_MARKER), "<?php\n").unwrap();

        let site = find_local_instance(&c).unwrap();
        assert_eq!(site.root(), Some(a.as_path()));
        assert!(!site.is_locked());
    }

    #[test]
    fn nearest_marker_wins() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        let b = a.join("b");
        fs::create_dir_all(&b).unwrap();
        fs::write(a.join(ROOT_MARKER), "").unwrap();
        fs::write(b.join(ROOT_MARKER), "").unwrap();

        let site = find_local_instance(&b).unwrap();
        assert_eq!(site.root(), Some(b.as_path()));
    }

    #[test]
    fn marker_directory_is_not_a_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(ROOT_MARKER)).unwrap();
        assert!(!is_site_root(temp.path()));
    }

    #[test]
    fn repeated_discovery_agrees() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(ROOT_MARKER), "").unwrap();

        let first = find_local_instance(temp.path()).unwrap();
        let second = find_local_instance(temp.path()).unwrap();
        assert_eq!(first.root(), second.root());
    }
}
