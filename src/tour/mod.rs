// src/tour/mod.rs
// Sequential walkthrough of filesystem and environment primitives.
// Every example receives a private scratch directory and must leave it
// empty when it returns.

mod directories;
mod files;
mod paths;
mod system;

pub use directories::directory_size;
pub use files::write_atomic;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use thiserror::Error;
use tracing::error;

/// One walkthrough entry: a display name and the function that runs it.
pub struct Example {
    pub name: &'static str,
    pub run: fn(&Path) -> Result<()>,
}

#[derive(Debug, Error)]
pub enum TourError {
    #[error("example failed: {0:#}")]
    Failed(#[from] anyhow::Error),
    #[error("example left {count} entries behind in its scratch directory")]
    DirtyScratch { count: usize },
}

/// Outcome counts for a full walkthrough run
#[derive(Debug, Default)]
pub struct TourSummary {
    pub completed: usize,
    pub failed: usize,
}

/// All examples in presentation order
pub fn examples() -> &'static [Example] {
    &[
        Example { name: "Current Directory Operations", run: system::current_dir_ops },
        Example { name: "Creating and Removing Directories", run: directories::create_and_remove },
        Example { name: "Listing Directory Contents", run: directories::list_contents },
        Example { name: "File and Directory Checks", run: paths::checks },
        Example { name: "Path Manipulation", run: paths::manipulation },
        Example { name: "File Operations", run: files::rename_and_move },
        Example { name: "File Statistics", run: files::stats },
        Example { name: "Environment Variables", run: system::env_vars },
        Example { name: "Walking Directory Trees", run: directories::walk_tree },
        Example { name: "System Information", run: system::system_info },
        Example { name: "Path Normalization", run: paths::normalization },
        Example { name: "Scanning Directory with Filters", run: directories::scan_with_filters },
        Example { name: "File Permissions", run: files::permissions },
        Example { name: "Temporary Files", run: files::temp_files },
        Example { name: "Finding Files Recursively", run: directories::find_files },
        Example { name: "Process Information", run: system::process_info },
        Example { name: "Symbolic Links", run: files::symlinks },
        Example { name: "Calculate Directory Size", run: directories::directory_size_demo },
        Example { name: "Idempotent Operations", run: directories::idempotent_ops },
        Example { name: "Practical File Organizer", run: directories::organize_by_extension },
    ]
}

fn banner(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}", "=".repeat(60));
}

/// Run one example against a fresh scratch directory, enforcing the
/// leave-it-empty invariant.
pub fn run_example(example: &Example) -> Result<(), TourError> {
    let scratch = tempfile::tempdir().map_err(anyhow::Error::from)?;

    (example.run)(scratch.path())?;

    let leftover = std::fs::read_dir(scratch.path())
        .map_err(anyhow::Error::from)?
        .count();
    if leftover > 0 {
        return Err(TourError::DirtyScratch { count: leftover });
    }

    Ok(())
}

/// Run the whole walkthrough sequentially, pausing between examples for
/// console readability. A failing example is logged and the run continues.
pub async fn run_all(pause: Duration) -> TourSummary {
    banner("FILESYSTEM PRIMITIVES - GUIDED WALKTHROUGH");

    let mut summary = TourSummary::default();
    let all = examples();

    for (i, example) in all.iter().enumerate() {
        banner(example.name);

        match run_example(example) {
            Ok(()) => summary.completed += 1,
            Err(e) => {
                summary.failed += 1;
                error!("Example '{}' failed: {}", example.name, e);
                println!("Error in example: {}", e);
            }
        }

        if i + 1 < all.len() && !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
    }

    banner("ALL EXAMPLES COMPLETED");
    println!("  {} ok, {} failed\n", summary.completed, summary.failed);

    summary
}
