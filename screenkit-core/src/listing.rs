//! Screenshot file listing.

use std::io;
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::paths::expand_user;

/// Extensions matched by [`list_screenshots`], i.e. `*.png`, `*.jpg`, `*.jpeg`.
pub const SCREENSHOT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

fn is_screenshot(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SCREENSHOT_EXTENSIONS.contains(&e))
}

/// Image files directly inside `dir`, sorted by path.
///
/// Matching is case-sensitive and not recursive.  A directory that does
/// not exist lists as empty.  Nothing is cached; every call rereads `dir`.
pub fn list_screenshots(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir = expand_user(dir);
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if is_screenshot(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_lists_only_images_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "c.jpeg", "notes.txt", "d.gif", "e.PNG"] {
            touch(tmp.path(), name);
        }
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "z.png");

        let files = list_screenshots(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "c.jpeg"]);
        assert!(files.iter().all(|p| p.starts_with(tmp.path())));
    }

    #[test]
    fn test_listing_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["2.png", "10.png", "1.jpg"] {
            touch(tmp.path(), name);
        }
        let first = list_screenshots(tmp.path()).unwrap();
        let second = list_screenshots(tmp.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert!(first.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let files = list_screenshots(&tmp.path().join("gone")).unwrap();
        assert!(files.is_empty());
    }
}
