//! Path helpers shared by capture and listing.

use std::path::{Component, Path, PathBuf};

use crate::errors::Result;

/// Replace a leading `~` component with the user's home directory.
///
/// `~user` forms are left untouched, as is everything when no home
/// directory can be determined.
pub fn expand_user(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) if components.as_path().as_os_str().is_empty() => home,
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// `~` expansion followed by joining onto the current directory.
///
/// `..` and symlinks are not resolved and the file need not exist.
pub fn resolve_output(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(expand_user(path))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_user_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_user(Path::new("~")), home);
        assert_eq!(
            expand_user(Path::new("~/shots/a.png")),
            home.join("shots").join("a.png")
        );
    }

    #[test]
    fn test_expand_user_leaves_other_paths() {
        assert_eq!(expand_user(Path::new("a/~/b")), PathBuf::from("a/~/b"));
        assert_eq!(expand_user(Path::new("~other/x")), PathBuf::from("~other/x"));
        assert_eq!(expand_user(Path::new("shot.png")), PathBuf::from("shot.png"));
    }

    #[test]
    fn test_resolve_output_is_absolute() {
        let resolved = resolve_output(Path::new("shot.png")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("shot.png"));
    }
}
