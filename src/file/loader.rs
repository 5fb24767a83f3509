//! Input loading.
//!
//! This module reads the raw YAML text to search from stdin or from a file.
//! Gzip-compressed input is decompressed transparently, so
//! `kubectl get pods -o yaml | gzip | kubectl-grep image` works too.

use crate::error::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Reads a YAML document from a file.
///
/// Files ending in `.gz` are decompressed.
///
/// # Errors
///
/// Returns `GrepError::Io` if the file cannot be read, is corrupt gzip, or
/// is not valid UTF-8.
///
/// ```no_run
/// use kubectl_grep::file::loader::load_file;
///
/// let yaml = load_file("pods.yaml.gz").unwrap();
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let is_gzipped = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let bytes = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");

    if is_gzipped {
        decompress_gzip_bytes(&bytes)
    } else {
        into_utf8(bytes)
    }
}

/// Reads a YAML document from standard input until EOF.
///
/// Input starting with the gzip magic bytes is decompressed.
pub fn load_from_stdin() -> Result<String> {
    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;
    tracing::debug!(bytes = buffer.len(), "read stdin");
    decode_input(buffer)
}

/// Turns raw input bytes into text, decompressing gzip data.
pub fn decode_input(bytes: Vec<u8>) -> Result<String> {
    if bytes.starts_with(&GZIP_MAGIC) {
        decompress_gzip_bytes(&bytes)
    } else {
        into_utf8(bytes)
    }
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder.read_to_string(&mut content)?;
    Ok(content)
}

fn into_utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}
