// src/tour/directories.rs
// Directory-level examples: creation, listing, walking, scanning, sizing.

use std::fs;
use std::path::Path;

use anyhow::Result;
use walkdir::WalkDir;

use super::files::write_atomic;
use crate::config::CONFIG;

/// Single and nested directory creation, removed innermost-out.
pub fn create_and_remove(scratch: &Path) -> Result<()> {
    let single = scratch.join("test_directory");
    fs::create_dir(&single)?;
    println!("Created directory: {}", single.display());

    let nested = scratch.join("parent/child/grandchild");
    fs::create_dir_all(&nested)?;
    println!("Created nested directories: {}", nested.display());

    // remove_dir only accepts empty directories, so unwind from the leaf
    fs::remove_dir(&nested)?;
    fs::remove_dir(scratch.join("parent/child"))?;
    fs::remove_dir(scratch.join("parent"))?;
    fs::remove_dir(&single)?;
    println!("Cleaned up test directories");

    Ok(())
}

pub fn list_contents(scratch: &Path) -> Result<()> {
    let names = ["alpha.txt", "beta.txt", "gamma.rs", "delta.md"];
    for name in names {
        fs::write(scratch.join(name), "demo")?;
    }

    let mut items: Vec<String> = fs::read_dir(scratch)?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    items.sort();

    let preview = CONFIG.list_preview;
    println!("Contents of {}:", scratch.display());
    for item in items.iter().take(preview) {
        println!("  - {}", item);
    }
    if items.len() > preview {
        println!("  ... and {} more items", items.len() - preview);
    }

    for name in names {
        fs::remove_file(scratch.join(name))?;
    }

    Ok(())
}

/// Build a small tree and print it with depth-based indentation.
pub fn walk_tree(scratch: &Path) -> Result<()> {
    let root = scratch.join("walk_test");
    fs::create_dir_all(root.join("subdir1/subsubdir"))?;
    fs::create_dir_all(root.join("subdir2"))?;
    fs::write(root.join("file1.txt"), "Root file")?;
    fs::write(root.join("subdir1/file2.txt"), "Subdir file")?;
    fs::write(root.join("subdir1/subsubdir/file3.txt"), "Deep file")?;

    println!("Directory tree structure:");
    for entry in WalkDir::new(&root).into_iter().filter_map(|e| e.ok()) {
        let indent = "  ".repeat(entry.depth());
        let name = entry.file_name().to_string_lossy();
        if entry.file_type().is_dir() {
            println!("{}{}/", indent, name);
        } else {
            println!("{}{}", indent, name);
        }
    }

    fs::remove_dir_all(&root)?;
    Ok(())
}

pub fn scan_with_filters(scratch: &Path) -> Result<()> {
    let root = scratch.join("scan_test");
    fs::create_dir(&root)?;
    for name in ["file1.txt", "file2.rs", "file3.txt"] {
        fs::write(root.join(name), "demo")?;
    }
    fs::create_dir(root.join("subdir"))?;

    let mut entries: Vec<_> = fs::read_dir(&root)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    println!("All items:");
    for entry in &entries {
        let tag = if entry.file_type()?.is_dir() { "DIR " } else { "FILE" };
        println!("  {}: {}", tag, entry.file_name().to_string_lossy());
    }

    println!("\nOnly .txt files:");
    for entry in &entries {
        let name = entry.file_name();
        if Path::new(&name).extension().and_then(|e| e.to_str()) == Some("txt") {
            println!("  {}", name.to_string_lossy());
        }
    }

    fs::remove_dir_all(&root)?;
    Ok(())
}

pub fn find_files(scratch: &Path) -> Result<()> {
    let root = scratch.join("search_test");
    fs::create_dir_all(root.join("dir1/dir2"))?;
    fs::create_dir_all(root.join("dir3"))?;
    for rel in ["target.txt", "dir1/target.txt", "dir1/dir2/target.txt"] {
        fs::write(root.join(rel), "found")?;
    }
    fs::write(root.join("dir3/other.txt"), "other")?;

    println!("Finding all 'target.txt' files:");
    for entry in WalkDir::new(&root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name().to_str() == Some("target.txt"))
    {
        println!("  Found: {}", entry.path().display());
    }

    fs::remove_dir_all(&root)?;
    Ok(())
}

/// Recursive sum of file sizes under `path`. Unreadable entries are skipped.
pub fn directory_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

pub fn directory_size_demo(scratch: &Path) -> Result<()> {
    let root = scratch.join("size_test");
    fs::create_dir_all(root.join("subdir"))?;
    fs::write(root.join("file1.txt"), "A".repeat(1000))?;
    fs::write(root.join("subdir/file2.txt"), "B".repeat(2000))?;

    println!("Total directory size: {} bytes", directory_size(&root));

    fs::remove_dir_all(&root)?;
    Ok(())
}

/// Repeated create_dir_all never errors; file replacement goes through a
/// temp file plus rename so a reread never sees a partial write.
pub fn idempotent_ops(scratch: &Path) -> Result<()> {
    let dir = scratch.join("safe_test");
    fs::create_dir_all(&dir)?;
    println!("Created directory (or it already existed)");
    fs::create_dir_all(&dir)?;
    println!("Called create_dir_all again - no error");

    let target = dir.join("settings.txt");
    write_atomic(&target, b"first")?;
    write_atomic(&target, b"second draft")?;
    println!(
        "Replaced {} atomically, now {} bytes",
        target.display(),
        fs::metadata(&target)?.len()
    );

    fs::remove_file(&target)?;
    fs::remove_dir(&dir)?;
    Ok(())
}

/// Sort a handful of mixed files into per-extension folders, then show the
/// resulting tree.
pub fn organize_by_extension(scratch: &Path) -> Result<()> {
    let root = scratch.join("organize_test");
    fs::create_dir(&root)?;
    for name in ["doc1.txt", "doc2.txt", "script1.rs", "script2.rs", "image1.jpg"] {
        fs::write(root.join(name), "demo")?;
    }

    let mut before: Vec<String> = fs::read_dir(&root)?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    before.sort();
    println!("Before organization: {:?}", before);

    for entry in fs::read_dir(&root)?.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let folder = path.extension().and_then(|e| e.to_str()).unwrap_or("other");
        let dest_dir = root.join(folder);
        fs::create_dir_all(&dest_dir)?;
        fs::rename(&path, dest_dir.join(entry.file_name()))?;
    }

    println!("\nAfter organization:");
    for entry in WalkDir::new(&root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let indent = "  ".repeat(entry.depth() - 1);
        let name = entry.file_name().to_string_lossy();
        if entry.file_type().is_dir() {
            println!("{}{}/", indent, name);
        } else {
            println!("{}{}", indent, name);
        }
    }

    fs::remove_dir_all(&root)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_size_sums_nested_files() {
        let scratch = tempfile::tempdir().unwrap();
        let root = scratch.path().join("sized");
        fs::create_dir_all(root.join("inner")).unwrap();
        fs::write(root.join("a.bin"), vec![0u8; 300]).unwrap();
        fs::write(root.join("inner/b.bin"), vec![0u8; 700]).unwrap();

        assert_eq!(directory_size(&root), 1000);
    }

    #[test]
    fn test_directory_size_of_missing_path_is_zero() {
        let scratch = tempfile::tempdir().unwrap();
        assert_eq!(directory_size(&scratch.path().join("absent")), 0);
    }
}
