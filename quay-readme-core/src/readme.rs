//! README loading.
//!
//! [`load_readme`] turns a README on disk into the text that is published as the
//! repository description: lines are kept with their endings, dangling code
//! fences are closed and a [`SPACER`] is appended so the rendered description
//! ends with some breathing room. Windows and classic Mac line endings are
//! normalised to `\n` on the way.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

use crate::fence::balance_code_fences;

/// Appended after the README content: an empty line followed by `<br>`.
pub const SPACER: &str = "\n<br>\n";

#[derive(Debug, Error)]
pub enum ReadmeError {
    /// The file exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("Failed to read README {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Splits `content` into lines, each keeping its trailing `\n` if it had one.
///
/// `\r\n` and lone `\r` count as line breaks and are normalised to `\n`.
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split_inclusive('\n')
        .map(str::to_owned)
        .collect()
}

/// Builds the description text from raw README content.
pub fn prepare_description(content: &str) -> String {
    let mut lines = split_lines(content);
    let closed = balance_code_fences(&mut lines);
    lines.push(SPACER.to_string());
    info!(
        lines = lines.len(),
        closing_fence_appended = closed,
        "Prepared README description"
    );
    lines.concat()
}

/// Loads the README at `path` and prepares it for publishing.
///
/// A path that does not exist is not an error: a diagnostic is printed and
/// `Ok(None)` is returned so the caller can stop before publishing anything.
pub fn load_readme(path: &Path) -> Result<Option<String>, ReadmeError> {
    if !path.exists() {
        error!(path = %path.display(), "README path does not exist");
        println!("Invalid path: {} does not exist", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|source| {
        error!(error = ?source, path = %path.display(), "Failed to read README");
        ReadmeError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!(path = %path.display(), bytes = content.len(), "README read successfully");

    Ok(Some(prepare_description(&content)))
}
