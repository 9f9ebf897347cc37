//! Output-directory resolution.
//!
//! Artifacts always land in the `Plugins` subdirectory of the host project's
//! data directory - the WebGL build pipeline picks `.jslib` files up from
//! there. The generator refuses to create the directory itself: a missing
//! `Plugins` folder means the data directory is not a project root.

use jslib_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the plugins subdirectory artifacts are written into.
pub const PLUGINS_DIR_NAME: &str = "Plugins";

/// Resolves the plugins directory under `data_dir` and verifies it is
/// usable.
///
/// # Errors
///
/// Returns [`Error::OutputDir`] when the directory does not exist, is not a
/// directory, or is not writable.
///
/// # Examples
///
/// ```
/// use jslib_codegen::paths::plugins_dir;
///
/// # let data = tempfile::tempdir().unwrap();
/// # std::fs::create_dir(data.path().join("Plugins")).unwrap();
/// let dir = plugins_dir(data.path()).unwrap();
/// assert!(dir.ends_with("Plugins"));
/// ```
pub fn plugins_dir(data_dir: &Path) -> Result<PathBuf> {
    let dir = data_dir.join(PLUGINS_DIR_NAME);

    let metadata = fs::metadata(&dir).map_err(|_| Error::OutputDir {
        path: dir.clone(),
        reason: "directory does not exist".to_string(),
    })?;
    if !metadata.is_dir() {
        return Err(Error::OutputDir {
            path: dir,
            reason: "path exists but is not a directory".to_string(),
        });
    }

    // Probe writability up front so the pass fails before rendering instead
    // of halfway through a write.
    tempfile::tempfile_in(&dir).map_err(|e| Error::OutputDir {
        path: dir.clone(),
        reason: format!("directory is not writable: {e}"),
    })?;

    Ok(dir)
}
