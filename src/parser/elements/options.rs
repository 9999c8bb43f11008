//! Option and heredoc parsers
//!
//! An option is a key token, an optional `=`, and a value. The value is
//! either the rest of the line, verbatim, or a heredoc:
//!
//! ```text
//! command = /etc/init.d/tomcat restart | tee /var/tmp/opman.log
//! motd <<EOT
//! Welcome.
//!
//! Be nice.
//! EOT
//! ```

use chumsky::prelude::*;

use crate::parser::ast::{RawNode, RawValue};
use crate::parser::combinators::{
    line_end, literal, newline, rest_of_line, spaces, token, ParserError,
};

/// Parse a single option, including its line ending
pub fn option() -> impl Parser<char, RawNode, Error = ParserError> + Clone {
    spaces()
        .ignore_then(token())
        .then_ignore(spaces())
        .then_ignore(just('=').or_not())
        .then_ignore(spaces())
        .then(heredoc().or(inline_value()))
        .map(|(key, value)| RawNode::Option { key, value })
}

/// The rest of the line as a plain value
fn inline_value() -> impl Parser<char, RawValue, Error = ParserError> + Clone {
    rest_of_line()
        .try_map(|text, span| {
            // A heredoc opener that failed to parse as a heredoc is unterminated,
            // not a plain value.
            if is_heredoc_opener(&text) {
                Err(ParserError::custom(span, "unterminated heredoc"))
            } else {
                Ok(RawValue::Plain(text))
            }
        })
        .then_ignore(line_end())
}

fn is_heredoc_opener(text: &str) -> bool {
    let Some(rest) = text.strip_prefix("<<") else {
        return false;
    };
    let name = rest
        .strip_prefix('-')
        .or_else(|| rest.strip_prefix(' '))
        .unwrap_or(rest);
    !name.is_empty() && name.chars().all(|c| c.is_ascii_uppercase())
}

/// Parse a heredoc value, starting at `<<` and ending after the terminator line
pub(crate) fn heredoc() -> impl Parser<char, RawValue, Error = ParserError> + Clone {
    let terminator = filter(|c: &char| c.is_ascii_uppercase())
        .repeated()
        .at_least(1)
        .collect::<String>();

    just("<<")
        .ignore_then(one_of("- ").or_not())
        .ignore_then(terminator)
        .then_ignore(newline())
        .then_with(heredoc_body)
}

/// A line holding exactly the terminator, optionally indented
fn terminator_line(terminator: String) -> impl Parser<char, (), Error = ParserError> + Clone {
    spaces()
        .ignore_then(literal(terminator))
        .ignore_then(line_end())
}

fn heredoc_body(terminator: String) -> impl Parser<char, RawValue, Error = ParserError> + Clone {
    let empty = terminator_line(terminator.clone()).to(String::new());

    let lines = take_until(newline().ignore_then(terminator_line(terminator.clone()))).map(
        |(chars, ()): (Vec<char>, ())| {
            let mut content: String = chars.into_iter().collect();
            content.push('\n');
            content
        },
    );

    empty.or(lines).map(move |content| RawValue::Heredoc {
        terminator: terminator.clone(),
        content,
    })
}
