//! Source location utilities for converting character offsets to line/column positions
//!
//! The parser works over `char` input, so every offset it reports counts
//! characters, not bytes. Lines and columns here are 1-based, which is what
//! error messages show to people.

/// A 1-based line/column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Provides fast conversion from character offsets to line/column positions
pub struct SourceLocation {
    /// Character offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    /// Create a new SourceLocation from source text
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (offset, ch) in source.chars().enumerate() {
            if ch == '\n' {
                line_starts.push(offset + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a character offset to a 1-based line/column position
    pub fn position(&self, offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);

        let column = offset - self.line_starts[line];

        Position::new(line + 1, column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_single_line() {
        let loc = SourceLocation::new("Hello");
        assert_eq!(loc.position(0), Position::new(1, 1));
        assert_eq!(loc.position(4), Position::new(1, 5));
    }

    #[test]
    fn test_position_multiline() {
        let loc = SourceLocation::new("foo\nbar\nbaz");

        assert_eq!(loc.position(0), Position::new(1, 1));
        assert_eq!(loc.position(3), Position::new(1, 4));
        assert_eq!(loc.position(4), Position::new(2, 1));
        assert_eq!(loc.position(6), Position::new(2, 3));
        assert_eq!(loc.position(8), Position::new(3, 1));
    }

    #[test]
    fn test_position_counts_chars_not_bytes() {
        let loc = SourceLocation::new("w√∂rld\nx");
        assert_eq!(loc.position(2), Position::new(1, 3));
        assert_eq!(loc.position(7), Position::new(2, 1));
    }

    #[test]
    fn test_position_at_end_of_input() {
        let loc = SourceLocation::new("a\n");
        assert_eq!(loc.position(2), Position::new(2, 1));
    }
}
