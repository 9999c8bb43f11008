//! Error types for parsing and loading configuration text

use std::path::PathBuf;

use chumsky::prelude::Simple;
use thiserror::Error;

use crate::position::SourceLocation;

/// A grammar failure, located at the deepest point the parser reached
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected {} at line {line}, column {column}", describe_found(.found))]
pub struct SyntaxError {
    offset: usize,
    line: usize,
    column: usize,
    found: Option<char>,
    expected: Vec<String>,
}

impl SyntaxError {
    /// Pick the deepest of the parser's errors and locate it in `source`.
    ///
    /// Returns `None` only when the parser reported no errors at all.
    pub(crate) fn deepest(source: &str, errors: Vec<Simple<char>>) -> Option<Self> {
        errors
            .into_iter()
            .max_by_key(|e| e.span().start)
            .map(|e| Self::from_simple(source, &e))
    }

    /// A failure at `offset` with nothing more specific known about it
    pub(crate) fn at(source: &str, offset: usize) -> Self {
        let position = SourceLocation::new(source).position(offset);
        Self {
            offset,
            line: position.line,
            column: position.column,
            found: source.chars().nth(offset),
            expected: Vec::new(),
        }
    }

    fn from_simple(source: &str, error: &Simple<char>) -> Self {
        let offset = error.span().start;
        let position = SourceLocation::new(source).position(offset);

        let mut expected: Vec<String> = error
            .expected()
            .map(|e| match e {
                Some(c) => format!("{:?}", c),
                None => "end of input".to_string(),
            })
            .collect();
        expected.sort();
        expected.dedup();

        Self {
            offset,
            line: position.line,
            column: position.column,
            found: error.found().copied(),
            expected,
        }
    }

    /// Character offset of the failure within the input
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of the failure
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the failure
    pub fn column(&self) -> usize {
        self.column
    }

    /// The character found at the failure, `None` at end of input
    pub fn found(&self) -> Option<char> {
        self.found
    }

    /// Rendered descriptions of what the parser would have accepted
    pub fn expected(&self) -> &[String] {
        &self.expected
    }
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{:?}", c),
        None => "end of input".to_string(),
    }
}

/// The public error returned by [`crate::load`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected input at line {} and column {}", .syntax.line(), .syntax.column())]
pub struct ParseError {
    #[source]
    syntax: SyntaxError,
}

impl ParseError {
    /// The underlying grammar failure
    pub fn syntax(&self) -> &SyntaxError {
        &self.syntax
    }

    pub fn line(&self) -> usize {
        self.syntax.line()
    }

    pub fn column(&self) -> usize {
        self.syntax.column()
    }
}

impl From<SyntaxError> for ParseError {
    fn from(syntax: SyntaxError) -> Self {
        Self { syntax }
    }
}

/// Errors from [`crate::load_file`]
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}
