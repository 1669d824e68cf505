//! Utility functions for pints-scaffold

use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(anyhow!("Path exists but is not a directory: {:?}", path));
    }
    Ok(())
}

/// Expand `~` and environment variables like `$PINTS_HOME` in a path
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    if !path_str.starts_with('~') && !path_str.contains('$') {
        return Ok(path.to_path_buf());
    }

    let expanded = shellexpand::full(&path_str)
        .map_err(|e| anyhow!("Failed to expand path {:?}: {}", path, e))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Absolute form of a path, resolving symlinks when the path exists
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

/// Format bytes as human readable string
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{bytes} B")
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1024 * 1024), "1.0 MB");
    }

    #[test]
    fn test_expand_path_leaves_plain_paths() {
        assert_eq!(
            expand_path(Path::new("sql/plugins")).unwrap(),
            PathBuf::from("sql/plugins")
        );
    }

    #[test]
    fn test_expand_path_env_var() {
        std::env::set_var("PINTS_SCAFFOLD_TEST_ROOT", "/tmp/pints");
        assert_eq!(
            expand_path(Path::new("$PINTS_SCAFFOLD_TEST_ROOT/sql")).unwrap(),
            PathBuf::from("/tmp/pints/sql")
        );
    }

    #[test]
    fn test_expand_path_unknown_var_fails() {
        assert!(expand_path(Path::new("$PINTS_SCAFFOLD_SURELY_UNSET_VAR/sql")).is_err());
    }

    #[test]
    fn test_ensure_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        ensure_directory(&nested).unwrap();
        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());

        let file = temp_dir.path().join("file");
        fs::write(&file, "x").unwrap();
        assert!(ensure_directory(&file).is_err());
    }

    #[test]
    fn test_absolute_path() {
        let temp_dir = TempDir::new().unwrap();
        let resolved = absolute_path(temp_dir.path()).unwrap();
        assert!(resolved.is_absolute());

        let missing = absolute_path(Path::new("does/not/exist")).unwrap();
        assert!(missing.is_absolute());
        assert!(missing.ends_with("does/not/exist"));
    }
}
