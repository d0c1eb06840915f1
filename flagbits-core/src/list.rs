use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::table::TABLE_EXT;

/// Type names stored in `dir`, sorted. A missing directory has no types.
pub fn list_types(dir: &Path) -> Result<Vec<String>> {
    let rd = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::new();
    for entry in rd {
        let path = entry?.path();
        // follows symlinks, like FlagTable::load does
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(TABLE_EXT) {
            continue;
        }
        match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) if !stem.is_empty() => names.push(stem.to_owned()),
            _ => warn!(path = %path.display(), "skipping table with unusable name"),
        }
    }
    names.sort();
    debug!(dir = %dir.display(), count = names.len(), "listed types");
    Ok(names)
}
