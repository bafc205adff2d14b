// src/tour/files.rs
// Single-file examples: moves, stats, permissions, temp files, symlinks.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Local};

pub fn rename_and_move(scratch: &Path) -> Result<()> {
    let original = scratch.join("original.txt");
    fs::write(&original, "Original file")?;
    println!("Created: {}", original.display());

    let renamed = scratch.join("renamed.txt");
    fs::rename(&original, &renamed)?;
    println!("Renamed to: {}", renamed.display());

    // rename across directories is a move
    let archive = scratch.join("archive");
    fs::create_dir(&archive)?;
    let moved = archive.join("renamed.txt");
    fs::rename(&renamed, &moved)?;
    println!("Moved to: {}", moved.display());

    fs::remove_file(&moved)?;
    fs::remove_dir(&archive)?;
    println!("Deleted: {}", moved.display());
    Ok(())
}

pub fn stats(scratch: &Path) -> Result<()> {
    let file = scratch.join("stats_test.txt");
    fs::write(&file, "Some content for testing")?;

    let meta = fs::metadata(&file)?;
    println!("File size: {} bytes", meta.len());

    if let Ok(modified) = meta.modified() {
        let when: DateTime<Local> = modified.into();
        println!("Last modified: {}", when.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Ok(accessed) = meta.accessed() {
        let when: DateTime<Local> = accessed.into();
        println!("Last accessed: {}", when.format("%Y-%m-%d %H:%M:%S"));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        println!("File permissions (octal): {:o}", meta.permissions().mode());
    }

    fs::remove_file(&file)?;
    Ok(())
}

#[cfg(unix)]
pub fn permissions(scratch: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let file = scratch.join("perm_test.txt");
    fs::write(&file, "test")?;

    let mode = fs::metadata(&file)?.permissions().mode();
    println!("Current permissions (octal): {:o}", mode);

    fs::set_permissions(&file, fs::Permissions::from_mode(0o444))?;
    println!("Changed to read-only");
    println!(
        "Readonly flag now: {}",
        fs::metadata(&file)?.permissions().readonly()
    );

    // Restore write permission before cleanup
    fs::set_permissions(&file, fs::Permissions::from_mode(0o644))?;
    fs::remove_file(&file)?;
    Ok(())
}

#[cfg(not(unix))]
pub fn permissions(_scratch: &Path) -> Result<()> {
    println!("File permissions example skipped (non-Unix system)");
    Ok(())
}

pub fn temp_files(scratch: &Path) -> Result<()> {
    println!("System temp directory: {}", std::env::temp_dir().display());

    let mut temp = tempfile::Builder::new()
        .prefix("walkthrough-")
        .suffix(".txt")
        .tempfile_in(scratch)?;
    temp.write_all(b"Temporary content")?;
    println!("Created temp file: {}", temp.path().display());
    println!("Temp file exists: {}", temp.path().exists());

    // close() removes the file immediately instead of waiting for drop
    temp.close()?;
    println!("Cleaned up temp file");
    Ok(())
}

#[cfg(unix)]
pub fn symlinks(scratch: &Path) -> Result<()> {
    let target = scratch.join("symlink_target.txt");
    let link = scratch.join("symlink_link.txt");
    fs::write(&target, "Target content")?;

    std::os::unix::fs::symlink(&target, &link)?;
    println!(
        "Created symbolic link: {} -> {}",
        link.display(),
        target.display()
    );

    // symlink_metadata stats the link itself, metadata would follow it
    let is_link = fs::symlink_metadata(&link)?.file_type().is_symlink();
    println!("Is symbolic link: {}", is_link);

    let points_to = fs::read_link(&link)?;
    println!("Link points to: {}", points_to.display());

    fs::remove_file(&link)?;
    fs::remove_file(&target)?;
    Ok(())
}

#[cfg(not(unix))]
pub fn symlinks(_scratch: &Path) -> Result<()> {
    println!("Symbolic links example skipped (non-Unix system)");
    Ok(())
}

/// Replace `path` with `bytes` using a temp file in the destination
/// directory plus a rename, so readers never observe a partial write.
/// Mirrors existing permissions on Unix.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent().filter(|d| !d.as_os_str().is_empty()) {
        Some(dir) => dir,
        None => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // Temp file must live in the same directory for the rename to stay on
    // one filesystem
    let mut temp = tempfile::Builder::new()
        .prefix(".vitals-write")
        .tempfile_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(meta) = fs::metadata(path) {
            let mode = meta.permissions().mode();
            let _ = fs::set_permissions(temp.path(), fs::Permissions::from_mode(mode));
        }
    }

    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_atomic_creates_and_replaces() {
        let scratch = tempfile::tempdir().unwrap();
        let target = scratch.path().join("state.txt");

        write_atomic(&target, b"first").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"first");

        write_atomic(&target, b"second draft").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"second draft");

        // No temp files left behind next to the target
        let count = fs::read_dir(scratch.path()).unwrap().count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_write_atomic_creates_missing_parents() {
        let scratch = tempfile::tempdir().unwrap();
        let target = scratch.path().join("deep/nested/state.txt");

        write_atomic(&target, b"content").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"content");
    }
}
