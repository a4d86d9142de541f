use crate::error::{ParseError, excerpt};
use crate::parser::Parser;
use crate::state::ParseState;
use std::borrow::Cow;

/// Parser that matches an exact UTF-8 string
pub struct IsStringParser {
    expected: Cow<'static, str>,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Parser for IsStringParser {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("Str('{}')", self.expected))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let loc = state.loc();

        if state.at_end() && !self.expected.is_empty() {
            return state.with_error(ParseError::UnexpectedEndOfInput {
                parser: self.name().into_owned(),
                loc,
            });
        }

        if state.remaining().starts_with(&*self.expected) {
            let index = state.index() + self.expected.len();
            return state.with_result(index, &*self.expected);
        }

        state.with_error(ParseError::Mismatch {
            parser: self.name().into_owned(),
            expected: format!("'{}'", self.expected),
            found: excerpt(state.remaining()),
            loc,
        })
    }
}

/// Convenience function to create an IsStringParser
pub fn is_string(expected: impl Into<Cow<'static, str>>) -> IsStringParser {
    IsStringParser::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_exact_match() {
        let state = is_string("Hello").parse("Hello World");
        assert!(!state.is_error());
        assert_eq!(state.index(), 5);
        assert_eq!(state.result(), &Value::from("Hello"));
    }

    #[test]
    fn test_mismatch_keeps_cursor() {
        let state = is_string("World").parse("Hello World");
        assert_eq!(state.index(), 0);
        match state.error() {
            Some(ParseError::Mismatch { expected, found, .. }) => {
                assert_eq!(expected, "'World'");
                assert_eq!(found, "Hello World");
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_input() {
        let state = is_string("Hello").parse("Hel");
        assert!(matches!(state.error(), Some(ParseError::Mismatch { .. })));
    }

    #[test]
    fn test_end_of_input() {
        let state = is_string("Hello").parse("");
        assert!(matches!(
            state.error(),
            Some(ParseError::UnexpectedEndOfInput { .. })
        ));
    }

    #[test]
    fn test_empty_string_always_matches() {
        let state = is_string("").parse("");
        assert!(!state.is_error());
        assert_eq!(state.index(), 0);
        assert_eq!(state.result(), &Value::from(""));
    }

    #[test]
    fn test_unicode() {
        let state = is_string("szöveg").parse("szöveg!");
        assert_eq!(state.index(), "szöveg".len());
        assert_eq!(state.remaining(), "!");
    }

    #[test]
    fn test_owned_argument() {
        let expected = String::from("dynamic");
        let state = is_string(expected).parse("dynamic value");
        assert_eq!(state.index(), 7);
    }
}
