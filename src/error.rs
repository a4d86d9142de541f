use std::fmt;
use thiserror::Error;

/// A position in the input: absolute byte index plus 1-based line and column
///
/// The column is a byte column within the line. Character columns depend on
/// rendering (tabs, wide and combining characters), the byte column does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeLoc {
    pub index: usize,
    pub line: usize,
    pub column: usize,
}

impl CodeLoc {
    /// Calculate the location of byte `index` in `input`
    pub fn new(input: &str, index: usize) -> Self {
        let index = index.min(input.len());
        let before = &input.as_bytes()[..index];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |newline| newline + 1);

        CodeLoc {
            index,
            line,
            column: index - line_start + 1,
        }
    }

    /// Lines of context around this location
    /// Returns up to 2 lines before and after the error line, plus a pointer line
    fn context_lines(&self, input: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let first = self.line.saturating_sub(2).max(1);
        let last = self.line + 2;

        for (number, content) in input.split('\n').enumerate().map(|(i, l)| (i + 1, l)) {
            if number < first {
                continue;
            }
            if number > last {
                break;
            }

            let prefix = if number == self.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == self.line {
                // column counts bytes; the pointer is padded in characters
                let before = self.column.saturating_sub(1);
                let width = content
                    .get(..before)
                    .map_or(before, |head| head.chars().count());
                let pointer_offset = prefix.len() + width;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for CodeLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (index {})",
            self.line, self.column, self.index
        )
    }
}

/// Why a parse failed
///
/// Failures are data: they travel inside the returned `ParseState`, never as
/// panics. Every variant carries the location where the failure was detected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A primitive needed at least one more character than was available
    #[error("{parser}: unexpected end of input at {loc}")]
    UnexpectedEndOfInput { parser: String, loc: CodeLoc },

    /// Input was available but did not satisfy the literal, predicate or pattern
    #[error("{parser}: expected {expected}, found '{found}' at {loc}")]
    Mismatch {
        parser: String,
        expected: String,
        found: String,
        loc: CodeLoc,
    },

    /// A repetition observed a match count outside of its bounds
    #[error("{parser}: expected {} matches, found {found} at {loc}", bounds(.min, .max))]
    Arity {
        parser: String,
        min: usize,
        max: Option<usize>,
        found: usize,
        loc: CodeLoc,
    },

    /// None of the alternatives of a choice matched
    #[error("{parser}: unable to match any alternative at {loc}{}", furthest_suffix(.furthest))]
    NoAlternative {
        parser: String,
        loc: CodeLoc,
        furthest: Option<Box<ParseError>>,
    },

    /// A parser was built with arguments it cannot run with
    #[error("{parser}: {message}")]
    InvalidArgument {
        parser: String,
        message: String,
        loc: CodeLoc,
    },

    /// Error raised by mapping functions and `error_map`
    #[error("{message} at {loc}")]
    Custom { message: String, loc: CodeLoc },
}

/// Short, single-line preview of unconsumed input for error messages
pub(crate) fn excerpt(remaining: &str) -> String {
    const MAX_CHARS: usize = 16;

    let mut preview: String = remaining
        .chars()
        .take(MAX_CHARS)
        .map(|c| if c == '\n' { '⏎' } else { c })
        .collect();
    if remaining.chars().nth(MAX_CHARS).is_some() {
        preview.push('…');
    }
    preview
}

fn bounds(min: &usize, max: &Option<usize>) -> String {
    match *max {
        Some(max) if max == *min => format!("exactly {}", min),
        Some(max) => format!("between {} and {}", min, max),
        None => format!("at least {}", min),
    }
}

fn furthest_suffix(furthest: &Option<Box<ParseError>>) -> String {
    match furthest {
        Some(err) => format!(" (furthest attempt: {})", err),
        None => String::new(),
    }
}

impl ParseError {
    pub fn custom(message: impl Into<String>, loc: CodeLoc) -> Self {
        ParseError::Custom {
            message: message.into(),
            loc,
        }
    }

    /// The location where this error was detected
    pub fn loc(&self) -> CodeLoc {
        match self {
            ParseError::UnexpectedEndOfInput { loc, .. }
            | ParseError::Mismatch { loc, .. }
            | ParseError::Arity { loc, .. }
            | ParseError::NoAlternative { loc, .. }
            | ParseError::InvalidArgument { loc, .. }
            | ParseError::Custom { loc, .. } => *loc,
        }
    }

    /// Returns the byte index where this error occurred
    pub fn position(&self) -> usize {
        self.loc().index
    }

    /// Of two errors keep the one that made it furthest into the input
    /// On a tie the first one wins
    pub fn furthest(self, other: ParseError) -> ParseError {
        if other.deepest_loc().index > self.deepest_loc().index {
            other
        } else {
            self
        }
    }

    /// The deepest location this error refers to
    ///
    /// For a failed choice that is the location of the alternative that got
    /// furthest, for every other error its own location.
    pub fn deepest_loc(&self) -> CodeLoc {
        match self {
            ParseError::NoAlternative {
                furthest: Some(err),
                loc,
                ..
            } => {
                let inner = err.deepest_loc();
                if inner.index > loc.index { inner } else { *loc }
            }
            other => other.loc(),
        }
    }

    /// Multi-line report with the failing line, its neighbours and a pointer
    pub fn render(&self, input: &str) -> String {
        let loc = self.deepest_loc();
        let mut report = format!("Syntax error at line {}, column {}: {}\n\n", loc.line, loc.column, self);
        for line in loc.context_lines(input) {
            report.push_str(&line);
            report.push('\n');
        }
        report
    }
}

/// Errors raised while assembling a grammar, before any parse runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("forward parser '{0}' is already defined")]
    AlreadyDefined(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codeloc_first_line() {
        let loc = CodeLoc::new("hello world", 6);
        assert_eq!(loc.line, 1);
        assert_eq!(loc.column, 7);
        assert_eq!(loc.index, 6);
    }

    #[test]
    fn test_codeloc_multiline() {
        let loc = CodeLoc::new("line1\nline2", 8);
        assert_eq!(loc.line, 2);
        assert_eq!(loc.column, 3);
    }

    #[test]
    fn test_codeloc_end_of_input() {
        let data = "line1\nline2";
        let loc = CodeLoc::new(data, data.len());
        assert_eq!(loc.line, 2);
        assert_eq!(loc.column, 6);
    }

    #[test]
    fn test_codeloc_after_newline() {
        let loc = CodeLoc::new("hello\n", 6);
        assert_eq!(loc.line, 2);
        assert_eq!(loc.column, 1);
    }

    #[test]
    fn test_codeloc_empty_input() {
        let loc = CodeLoc::new("", 0);
        assert_eq!(loc, CodeLoc { index: 0, line: 1, column: 1 });
    }

    #[test]
    fn test_codeloc_clamps_index() {
        let loc = CodeLoc::new("ab", 10);
        assert_eq!(loc.index, 2);
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short"), "short");
        assert_eq!(excerpt("a\nb"), "a⏎b");
        assert_eq!(excerpt("0123456789abcdefXYZ"), "0123456789abcdef…");
    }

    #[test]
    fn test_arity_display() {
        let err = ParseError::Arity {
            parser: "count_min_max(Str('a'))".into(),
            min: 2,
            max: Some(3),
            found: 1,
            loc: CodeLoc::new("a", 1),
        };
        let text = err.to_string();
        assert!(text.contains("between 2 and 3"));
        assert!(text.contains("found 1"));
    }

    #[test]
    fn test_furthest_prefers_later_position() {
        let input = "abcdef";
        let near = ParseError::custom("near", CodeLoc::new(input, 1));
        let far = ParseError::custom("far", CodeLoc::new(input, 4));

        assert_eq!(near.clone().furthest(far.clone()), far);
        assert_eq!(far.clone().furthest(near), far);
    }

    #[test]
    fn test_render_points_at_failure() {
        let input = "first\nsecond\nthird";
        let err = ParseError::Mismatch {
            parser: "Str('x')".into(),
            expected: "'x'".into(),
            found: "cond".into(),
            loc: CodeLoc::new(input, 9),
        };

        let report = err.render(input);
        assert!(report.contains("line 2, column 4"));
        assert!(report.contains("  > 2 | second"));
        assert!(report.contains("    1 | first"));
        assert!(report.contains("    3 | third"));
        assert!(report.contains("^--- here"));
    }

    #[test]
    fn test_render_pointer_after_multibyte_chars() {
        let input = "űűx\nnext";
        let err = ParseError::Mismatch {
            parser: "Str('y')".into(),
            expected: "'y'".into(),
            found: "x".into(),
            loc: CodeLoc::new(input, 4),
        };

        let report = err.render(input);
        assert!(report.contains("line 1, column 5"));
        let lines: Vec<&str> = report.lines().collect();
        let source = lines.iter().position(|l| *l == "  > 1 | űűx").unwrap();
        let pointer = format!("{}^--- here", " ".repeat("  > 1 | ".len() + 2));
        assert_eq!(lines[source + 1], pointer);
    }

    #[test]
    fn test_render_empty_input() {
        let err = ParseError::UnexpectedEndOfInput {
            parser: "Str('x')".into(),
            loc: CodeLoc::new("", 0),
        };
        let report = err.render("");
        assert!(report.contains("unexpected end of input"));
    }

    #[test]
    fn test_deepest_loc_of_choice() {
        let input = "abcdef";
        let err = ParseError::NoAlternative {
            parser: "choice".into(),
            loc: CodeLoc::new(input, 0),
            furthest: Some(Box::new(ParseError::custom("inner", CodeLoc::new(input, 3)))),
        };
        assert_eq!(err.position(), 0);
        assert_eq!(err.deepest_loc().index, 3);
    }
}
