//! Public API for the parser.

use chumsky::Parser;

use crate::error::SyntaxError;
use crate::parser::ast::RawDocument;
use crate::parser::document::document;

/// Parse configuration text into a raw parse tree.
///
/// On failure the error points at the deepest position any grammar rule
/// reached, which is usually inside the offending line rather than at the
/// start of the enclosing block.
pub fn parse(input: &str) -> Result<RawDocument, SyntaxError> {
    document().parse(input).map_err(|errors| {
        tracing::trace!(count = errors.len(), "grammar reported errors");
        SyntaxError::deepest(input, errors).unwrap_or_else(|| SyntaxError::at(input, 0))
    })
}
