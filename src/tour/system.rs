// src/tour/system.rs
// Process-level examples: working directory, environment, platform info.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub fn current_dir_ops(scratch: &Path) -> Result<()> {
    let original = env::current_dir().context("current directory unreadable")?;
    println!("Current directory: {}", original.display());

    // The rest of the tour depends on the cwd, so restore it before
    // reporting any failure from inside the excursion
    env::set_current_dir(scratch)?;
    let inside = env::current_dir();
    let restored = env::set_current_dir(&original);

    println!("Changed to: {}", inside?.display());
    restored?;
    println!("Changed back to: {}", env::current_dir()?.display());

    Ok(())
}

pub fn env_vars(_scratch: &Path) -> Result<()> {
    let home = env::var("HOME").ok().map(PathBuf::from).or_else(dirs::home_dir);
    match home {
        Some(h) => println!("Home directory: {}", h.display()),
        None => println!("Home directory: unknown"),
    }

    let custom = env::var("VITALS_CUSTOM_VAR").unwrap_or_else(|_| "default_value".to_string());
    println!("Custom variable: {}", custom);

    // set_var/remove_var are unsafe with concurrent readers; the tour runs
    // examples one at a time
    unsafe { env::set_var("VITALS_TOUR_VAR", "test_value") };
    println!("Set VITALS_TOUR_VAR to: {}", env::var("VITALS_TOUR_VAR")?);
    unsafe { env::remove_var("VITALS_TOUR_VAR") };

    let mut keys: Vec<String> = env::vars().map(|(k, _)| k).collect();
    keys.sort();
    println!("\nSome environment variables:");
    for key in keys.iter().take(5) {
        println!("  {}", key);
    }

    Ok(())
}

pub fn system_info(_scratch: &Path) -> Result<()> {
    println!("Operating system: {}", env::consts::OS);
    println!("OS family: {}", env::consts::FAMILY);
    println!("Architecture: {}", env::consts::ARCH);
    println!("Path separator: '{}'", std::path::MAIN_SEPARATOR);
    println!("Temp directory: {}", env::temp_dir().display());
    Ok(())
}

pub fn process_info(_scratch: &Path) -> Result<()> {
    println!("Current process ID: {}", std::process::id());

    #[cfg(unix)]
    {
        // SAFETY: getppid and getuid only read process state
        let (ppid, uid) = unsafe { (libc::getppid(), libc::getuid()) };
        println!("Parent process ID: {}", ppid);
        println!("User ID: {}", uid);
    }

    Ok(())
}
