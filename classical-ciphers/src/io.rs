//! Reading and writing plain UTF-8 text files

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CipherError, Result};

/// Reads a whole file as UTF-8; a missing path is `FileNotFound`.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(CipherError::FileNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    debug!(target: "classical_ciphers::io", path = %path.display(), bytes = text.len(), "read text");
    Ok(text)
}

/// Writes `text` to `path`, creating parent directories if needed.
pub fn write_text(text: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, text)?;
    debug!(target: "classical_ciphers::io", path = %path.display(), bytes = text.len(), "wrote text");
    Ok(())
}
