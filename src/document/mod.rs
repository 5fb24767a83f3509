//! YAML document model, decoding and encoding.
//!
//! - [`node`] holds the `YamlValue` tree the matcher walks.
//! - [`parser`] decodes YAML text into that tree.
//! - [`emitter`] turns search results back into YAML text.

pub mod emitter;
pub mod node;
pub mod parser;
