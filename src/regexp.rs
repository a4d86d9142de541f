use crate::error::{ParseError, excerpt};
use crate::parser::Parser;
use crate::state::ParseState;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Parser that matches a regular expression at the cursor
///
/// The pattern is anchored at the current position and compiled once, when
/// the parser is built. A pattern that fails to compile turns every run into
/// an `InvalidArgument` error.
#[derive(Clone)]
pub struct RegExp {
    name: Cow<'static, str>,
    pattern: String,
    regex: Result<Regex, String>,
}

impl RegExp {
    pub fn new(name: impl Into<Cow<'static, str>>, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(|err| err.to_string());
        RegExp {
            name: name.into(),
            pattern,
            regex,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Parser for RegExp {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let loc = state.loc();

        let regex = match &self.regex {
            Ok(regex) => regex,
            Err(message) => {
                return state.with_error(ParseError::InvalidArgument {
                    parser: self.name.to_string(),
                    message: format!("invalid pattern /{}/: {}", self.pattern, message),
                    loc,
                });
            }
        };

        if let Some(found) = regex.find(state.remaining()) {
            let index = state.index() + found.end();
            return state.with_result(index, found.as_str());
        }

        if state.at_end() {
            return state.with_error(ParseError::UnexpectedEndOfInput {
                parser: self.name.to_string(),
                loc,
            });
        }

        state.with_error(ParseError::Mismatch {
            parser: self.name.to_string(),
            expected: format!("/{}/", self.pattern),
            found: excerpt(state.remaining()),
            loc,
        })
    }
}

/// Convenience function to create a RegExp parser
pub fn regexp(name: impl Into<Cow<'static, str>>, pattern: impl Into<String>) -> RegExp {
    RegExp::new(name, pattern)
}

static LETTER: Lazy<RegExp> = Lazy::new(|| RegExp::new("Letter", "[A-Za-z]"));
static LETTERS: Lazy<RegExp> = Lazy::new(|| RegExp::new("Letters", "[A-Za-z]+"));
static DIGIT: Lazy<RegExp> = Lazy::new(|| RegExp::new("Digit", "[0-9]"));
static DIGITS: Lazy<RegExp> = Lazy::new(|| RegExp::new("Digits", "[0-9]+"));

/// Regex twin of [`crate::utf8::letter`]
pub fn letter() -> RegExp {
    LETTER.clone()
}

/// Regex twin of [`crate::utf8::letters`]
pub fn letters() -> RegExp {
    LETTERS.clone()
}

/// Regex twin of [`crate::utf8::digit`]
pub fn digit() -> RegExp {
    DIGIT.clone()
}

/// Regex twin of [`crate::utf8::digits`]
pub fn digits() -> RegExp {
    DIGITS.clone()
}
