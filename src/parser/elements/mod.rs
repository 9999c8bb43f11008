//! Element parsers: options, heredocs and blocks

pub mod blocks;
pub mod options;

use chumsky::prelude::*;

use crate::parser::ast::RawNode;
use crate::parser::combinators::{blank_line, comment, ParserError};

pub use blocks::block;
pub use options::option;

/// Any line that is not a block: a blank line, a comment or an option.
///
/// Blank lines and comments produce `None`.
pub(crate) fn statement() -> impl Parser<char, Option<RawNode>, Error = ParserError> + Clone {
    blank_line()
        .to(None)
        .or(comment().to(None))
        .or(option().map(Some))
}
