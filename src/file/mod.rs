//! File I/O for YAML input.
//!
//! This module reads the document to search from stdin or from disk,
//! decompressing gzip input on the way.

pub mod loader;
