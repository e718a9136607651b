use crate::error::{LinksError, Result};
use std::fs;
use std::path::Path;

/// Write post text to `path`, truncating any existing file.
///
/// The parent directory must already exist.
pub fn write_post(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| LinksError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// `<exe dir>/../_posts`, the Jekyll posts folder next to the tool's folder
pub fn default_posts_dir() -> anyhow::Result<std::path::PathBuf> {
    let exe = std::env::current_exe()?;
    let exe_dir = exe
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Executable has no parent directory: {}", exe.display()))?;
    Ok(exe_dir.join("..").join("_posts"))
}
