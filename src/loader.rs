//! Loading configuration text into a [`Tree`]
//!
//! [`load`] is the core operation: parse, then merge. [`load_file`] is a thin
//! wrapper that reads the file and delegates to [`load`].

use std::fs;
use std::path::Path;

use crate::error::{LoadError, ParseError};
use crate::merge::merge;
use crate::parser::parse;
use crate::value::Tree;

/// Parse and merge configuration text.
///
/// ```text
/// <server web>
///   port 80
/// </server web>
/// ```
///
/// loads as `{"server": {"web": {"port": "80"}}}`.
pub fn load(text: &str) -> Result<Tree, ParseError> {
    tracing::debug!(bytes = text.len(), "loading configuration");

    let doc = parse(text).map_err(|syntax| {
        let err = ParseError::from(syntax);
        tracing::debug!(line = err.line(), column = err.column(), "parse failed");
        err
    })?;

    tracing::trace!(nodes = doc.node_count(), "parsed document");
    Ok(merge(doc))
}

/// Read the file at `path` and [`load`] its contents.
pub fn load_file(path: impl AsRef<Path>) -> Result<Tree, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(load(&text)?)
}
