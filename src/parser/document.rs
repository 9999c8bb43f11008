//! Document-level parser responsible for parsing the entire input.

use chumsky::prelude::*;

use crate::parser::ast::RawDocument;
use crate::parser::combinators::ParserError;
use crate::parser::elements::{block, statement};

/// Parse a document
///
/// Blocks, options, comments and blank lines, repeated until end of input.
pub fn document() -> impl Parser<char, RawDocument, Error = ParserError> + Clone {
    block()
        .map(Some)
        .or(statement())
        .repeated()
        .then_ignore(end())
        .map(|items| RawDocument::new(items.into_iter().flatten().collect()))
}
