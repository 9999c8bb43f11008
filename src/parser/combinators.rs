//! Lexical parser combinators shared by the element parsers.

use chumsky::prelude::*;

/// Type alias for parser error
pub(crate) type ParserError = Simple<char>;

/// Zero or more spaces or tabs
pub(crate) fn spaces() -> impl Parser<char, (), Error = ParserError> + Clone {
    one_of(" \t").repeated().ignored()
}

/// One or more spaces or tabs
pub(crate) fn spaces1() -> impl Parser<char, (), Error = ParserError> + Clone {
    one_of(" \t").repeated().at_least(1).ignored()
}

pub(crate) fn newline() -> impl Parser<char, (), Error = ParserError> + Clone {
    just('\n').ignored()
}

/// A newline, or the end of input for a document without a final newline
pub(crate) fn line_end() -> impl Parser<char, (), Error = ParserError> + Clone {
    newline().or(end())
}

/// Everything up to, not including, the next newline
pub(crate) fn rest_of_line() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| *c != '\n').repeated().collect::<String>()
}

/// A key, block type or block name.
///
/// Either a non-empty alphanumeric run, or any text without `"` wrapped in
/// double quotes. The quotes are not part of the output.
pub(crate) fn token() -> impl Parser<char, String, Error = ParserError> + Clone {
    let quoted = none_of("\"")
        .repeated()
        .collect::<String>()
        .delimited_by(just('"'), just('"'));

    let bare = filter(|c: &char| c.is_alphanumeric())
        .repeated()
        .at_least(1)
        .collect::<String>();

    quoted.or(bare).labelled("token")
}

/// Match a string that was computed earlier in the same parse.
///
/// Block closing tags and heredoc terminators are only known once their
/// opener has been read, so they can't be written as fixed literals.
pub fn literal(expected: String) -> impl Parser<char, String, Error = ParserError> + Clone {
    just(expected)
}

/// [`literal`], optionally wrapped in double quotes
pub(crate) fn maybe_quoted(
    expected: String,
) -> impl Parser<char, String, Error = ParserError> + Clone {
    just('"')
        .or_not()
        .ignore_then(literal(expected))
        .then_ignore(just('"').or_not())
}

/// `#` to end of line, with optional leading whitespace
pub(crate) fn comment() -> impl Parser<char, (), Error = ParserError> + Clone {
    spaces()
        .then(just('#'))
        .then(rest_of_line())
        .then(line_end())
        .ignored()
}

/// A line holding nothing but whitespace
pub(crate) fn blank_line() -> impl Parser<char, (), Error = ParserError> + Clone {
    newline().or(spaces1().ignore_then(line_end()))
}
