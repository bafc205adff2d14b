// src/tour/paths.rs
// Pure path examples: checks, manipulation, normalization.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::Result;

pub fn checks(scratch: &Path) -> Result<()> {
    let dir = scratch.join("check_dir");
    let file = scratch.join("check_file.txt");
    fs::create_dir(&dir)?;
    fs::write(&file, "Test content")?;

    println!("'{}' exists: {}", dir.display(), dir.exists());
    println!("'{}' exists: {}", file.display(), file.exists());
    println!(
        "'nonexistent' exists: {}",
        scratch.join("nonexistent").exists()
    );

    println!("file is_file: {}", file.is_file());
    println!("file is_dir: {}", file.is_dir());
    println!("dir is_dir: {}", dir.is_dir());

    println!(
        "'check_file.txt' is absolute: {}",
        Path::new("check_file.txt").is_absolute()
    );
    println!("'{}' is absolute: {}", scratch.display(), scratch.is_absolute());

    fs::remove_file(&file)?;
    fs::remove_dir(&dir)?;
    Ok(())
}

pub fn manipulation(scratch: &Path) -> Result<()> {
    let joined: PathBuf = Path::new("folder").join("subfolder").join("file.txt");
    println!("Joined path: {}", joined.display());

    if let (Some(directory), Some(filename)) = (joined.parent(), joined.file_name()) {
        println!("Directory: {}", directory.display());
        println!("Filename: {}", filename.to_string_lossy());
    }
    if let (Some(stem), Some(ext)) = (joined.file_stem(), joined.extension()) {
        println!(
            "Name: {}, Extension: .{}",
            stem.to_string_lossy(),
            ext.to_string_lossy()
        );
    }

    let absolute = scratch.canonicalize()?;
    println!("Canonical scratch path: {}", absolute.display());
    if let Some(parent) = absolute.parent() {
        println!("Directory name: {}", parent.display());
    }
    if let Some(base) = absolute.file_name() {
        println!("Base name: {}", base.to_string_lossy());
    }

    Ok(())
}

/// Collapse `.` segments and parent references without touching the
/// filesystem. Doubled separators disappear during component iteration.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let ends_with_name =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if ends_with_name {
                    out.pop();
                } else if !matches!(out.components().next_back(), Some(Component::RootDir)) {
                    // cannot climb above the root; keep leading parents otherwise
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Expand a leading `~/` using the current user's home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    }
}

pub fn normalization(scratch: &Path) -> Result<()> {
    let messy = Path::new("folder//subfolder/../other_folder/./file.txt");
    println!("Original path: {}", messy.display());
    println!("Normalized path: {}", normalize(messy).display());

    let user_path = "~/documents/file.txt";
    println!("\nOriginal: {}", user_path);
    println!("Expanded: {}", expand_home(user_path).display());

    if let Some(parent) = scratch.parent() {
        let relative = scratch.strip_prefix(parent).unwrap_or(scratch);
        println!(
            "\nRelative path from parent to scratch: {}",
            relative.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_dots_and_parents() {
        assert_eq!(
            normalize(Path::new("folder//subfolder/../other_folder/./file.txt")),
            PathBuf::from("folder/other_folder/file.txt")
        );
        assert_eq!(normalize(Path::new("a/./b/./c")), PathBuf::from("a/b/c"));
    }

    #[test]
    fn test_normalize_keeps_leading_parents() {
        assert_eq!(normalize(Path::new("../a/b")), PathBuf::from("../a/b"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn test_normalize_root_cannot_be_escaped() {
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_expand_home_passthrough_without_tilde() {
        assert_eq!(
            expand_home("documents/file.txt"),
            PathBuf::from("documents/file.txt")
        );
    }

    #[test]
    fn test_expand_home_joins_home_dir() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/notes.txt"), home.join("notes.txt"));
        }
    }
}
