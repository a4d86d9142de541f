use crate::cond::{cond, cond_min};
use crate::error::{ParseError, excerpt};
use crate::parser::{NamedExt, Parser};
use crate::state::ParseState;
use std::borrow::Cow;

/// Parser that matches a specific single character
///
/// The character is given as a string so that a wrong argument (empty or
/// longer than one character) shows up as a parse error instead of a panic.
pub struct IsChar {
    expected: Cow<'static, str>,
}

impl Parser for IsChar {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("Char('{}')", self.expected))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let loc = state.loc();

        if self.expected.chars().count() != 1 {
            return state.with_error(ParseError::InvalidArgument {
                parser: self.name().into_owned(),
                message: format!(
                    "wrong argument '{}', it must be a single character",
                    self.expected
                ),
                loc,
            });
        }

        if state.at_end() {
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

/// Convenience function to create a parser that matches a specific character
pub fn is_char(expected: impl Into<Cow<'static, str>>) -> IsChar {
    IsChar {
        expected: expected.into(),
    }
}

/// Predicate accepting every character
pub fn is_any_char(_: char) -> bool {
    true
}

/// Parser that matches any single character
pub fn any_char() -> impl Parser {
    cond(is_any_char).named("AnyChar")
}

/// Parser that matches all remaining characters, at least one
pub fn any_str() -> impl Parser {
    cond_min(is_any_char, 1).named("AnyStr")
}
