use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read address list {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads an address list: every whitespace-separated token is one address.
///
/// Tokens are returned in file order, duplicates and garbage included.
/// Bytes that are not valid UTF-8 become U+FFFD inside their token, so the
/// token later fails to parse as an address instead of failing the read.
pub fn read_addresses(path: &Path) -> Result<Vec<String>, InputError> {
    let bytes = fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let addresses = parse_addresses(&String::from_utf8_lossy(&bytes));
    debug!("Read {} tokens from {}", addresses.len(), path.display());
    Ok(addresses)
}

pub fn parse_addresses(contents: &str) -> Vec<String> {
    contents.split_whitespace().map(str::to_owned).collect()
}
