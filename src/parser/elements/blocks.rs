//! Block parser
//!
//! ```text
//! <pool api>
//!     size 4
//!     <pool api>
//!         size 2
//!     </pool api>
//! </pool api>
//! ```
//!
//! The opening tag captures a `(kind, name)` pair. That pair is handed to
//! `then_with`, which builds the body and closing-tag parser for this one
//! block. A nested block of the same kind captures its own pair, so its
//! closing tag is consumed by the inner parser and never ends the outer one.

use chumsky::prelude::*;

use super::statement;
use crate::parser::ast::RawNode;
use crate::parser::combinators::{
    line_end, maybe_quoted, newline, spaces, spaces1, token, ParserError,
};

/// Parse a block and everything nested inside it
pub fn block() -> impl Parser<char, RawNode, Error = ParserError> + Clone {
    recursive(|block| {
        block_open().then_with(move |(kind, name): (String, String)| {
            let close = block_close(kind.clone(), name.clone());

            block
                .clone()
                .map(Some)
                .or(statement())
                .repeated()
                .map(|items| items.into_iter().flatten().collect::<Vec<_>>())
                .then_ignore(close)
                .map(move |children| RawNode::Block {
                    kind: kind.clone(),
                    name: name.clone(),
                    children,
                })
        })
    })
}

/// `<kind>` or `<kind name>`, returning the captured pair. The name is empty
/// when absent.
pub(crate) fn block_open() -> impl Parser<char, (String, String), Error = ParserError> + Clone {
    spaces()
        .ignore_then(just('<'))
        .ignore_then(token())
        .then(spaces1().ignore_then(token()).or_not())
        .then_ignore(spaces())
        .then_ignore(just('>'))
        .then_ignore(newline())
        .map(|(kind, name)| (kind, name.unwrap_or_default()))
}

/// The closing tag for one specific block.
///
/// An empty `name` matches nothing, which leaves `</kind>`.
pub(crate) fn block_close(
    kind: String,
    name: String,
) -> impl Parser<char, (), Error = ParserError> + Clone {
    spaces()
        .then(just("</"))
        .then(maybe_quoted(kind))
        .then(spaces())
        .then(maybe_quoted(name))
        .then(spaces())
        .then(just('>'))
        .then(line_end())
        .ignored()
}
