//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/posts/  ← cwd
/// /home/user/site/unfurls.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_start_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("unfurls.toml"), "").unwrap();

        let found = find_config_file_from(temp.path(), Path::new("unfurls.toml"));
        assert_eq!(found, Some(temp.path().join("unfurls.toml")));
    }

    #[test]
    fn test_find_walks_upward() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("unfurls.toml"), "").unwrap();
        let nested = temp.path().join("content/posts");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested, Path::new("unfurls.toml"));
        assert_eq!(found, Some(temp.path().join("unfurls.toml")));
    }

    #[test]
    fn test_find_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");

        assert_eq!(find_config_file_from(Path::new("/"), &path), None);
        std::fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }
}
