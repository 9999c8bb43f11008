//! Parser module for Config::General text
//!
//! Turns configuration text into a raw parse tree ([`RawDocument`]). Comments
//! and blank lines are dropped here; folding repeated keys is left to
//! [`crate::merge`].
//!
//! The grammar is written with chumsky combinators over `char` input:
//!
//! - [`combinators`] holds the lexical pieces (whitespace, tokens, line ends,
//!   runtime literals)
//! - [`elements`] holds options, heredocs and blocks
//! - [`document`] repeats those until end of input
//!
//! Blocks are context sensitive: the closing tag has to repeat the type and
//! name captured by the opening tag. Each block instance builds its own
//! closing-tag parser from its captured pair, so nested and sibling blocks
//! never share state.

pub mod api;
pub mod ast;
pub mod combinators;
pub mod document;
pub mod elements;
#[cfg(test)]
mod tests;

pub use api::parse;
pub use ast::{RawDocument, RawNode, RawValue};
pub use document::document;
