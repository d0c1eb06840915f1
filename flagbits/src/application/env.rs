use std::path::{Path, PathBuf};
use std::process::Command;

use directories::BaseDirs;
use flagbits_core::{FlagError, Result};
use tracing::debug;

/// Overrides the storage directory when set.
pub const STORAGE_ENV: &str = "FLAGBITS_HOME";

/// Storage directory name under the user's home.
pub const STORAGE_DIR_NAME: &str = ".bitflags";

pub fn storage_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(STORAGE_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let dirs = BaseDirs::new().ok_or_else(|| {
        FlagError::Config("Your environment does not provide a home directory".into())
    })?;
    Ok(dirs.home_dir().join(STORAGE_DIR_NAME))
}

/// Like [`storage_dir`], creating the directory if it is missing.
pub fn ensure_storage_dir() -> Result<PathBuf> {
    let dir = storage_dir()?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "created storage directory");
    }
    Ok(dir)
}

pub fn open_in_file_browser(dir: &Path) -> Result<()> {
    let program = if cfg!(windows) {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    // not awaited; explorer exits non-zero even on success
    Command::new(program).arg(dir).spawn()?;
    debug!(program, dir = %dir.display(), "spawned file browser");
    Ok(())
}
