use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser, names};
use crate::state::ParseState;
use std::borrow::Cow;

/// Parser combinator that tries alternatives in order and returns the first
/// success
///
/// Every alternative starts from the same state. When all of them fail the
/// error names the choice at the start position and keeps the alternative
/// error that got furthest into the input.
pub struct Choice {
    parsers: Vec<BoxedParser>,
}

impl Choice {
    pub fn new(parsers: Vec<BoxedParser>) -> Self {
        Choice { parsers }
    }
}

impl Parser for Choice {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("Choice({})", names(&self.parsers)))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let mut furthest: Option<ParseError> = None;

        for parser in &self.parsers {
            let next = parser.run(state.clone());
            match next.error() {
                None => return next,
                Some(err) => {
                    furthest = Some(match furthest {
                        Some(best) => best.furthest(err.clone()),
                        None => err.clone(),
                    });
                }
            }
        }

        let loc = state.loc();
        state.with_error(ParseError::NoAlternative {
            parser: self.name().into_owned(),
            loc,
            furthest: furthest.map(Box::new),
        })
    }
}

/// Convenience function to create a Choice parser
pub fn choice(parsers: Vec<BoxedParser>) -> Choice {
    Choice::new(parsers)
}

/// Build a [`Choice`] from parsers of any type
#[macro_export]
macro_rules! choice {
    ($($parser:expr),* $(,)?) => {
        $crate::choice::choice(vec![$($crate::parser::BoxedExt::boxed($parser)),*])
    };
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized + 'static {
    fn or<P>(self, other: P) -> Choice
    where
        P: Parser + 'static,
    {
        crate::choice![self, other]
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence_of;
    use crate::utf8::char::is_char;
    use crate::utf8::digit::digits;
    use crate::utf8::letter::letters;
    use crate::utf8::string::is_string;
    use crate::value::Value;

    #[test]
    fn test_choice_first_succeeds() {
        let parser = choice![is_char("a"), is_char("b")];
        let state = parser.parse("abc");
        assert_eq!(state.result(), &Value::from("a"));
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn test_choice_second_succeeds() {
        let parser = choice![is_char("a"), is_char("b")];
        let state = parser.parse("bcd");
        assert_eq!(state.result(), &Value::from("b"));
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn test_choice_letters_or_digits() {
        let parser = choice![letters(), digits()];

        let state = parser.parse("Hello World");
        assert_eq!(state.result(), &Value::from("Hello"));
        assert_eq!(state.index(), 5);

        let state = parser.parse("1342 234 45");
        assert_eq!(state.result(), &Value::from("1342"));
        assert_eq!(state.index(), 4);

        let state = parser.parse("!.,");
        assert!(state.is_error());
        assert_eq!(state.index(), 0);
        assert!(matches!(state.error(), Some(ParseError::NoAlternative { .. })));
    }

    #[test]
    fn test_choice_is_ordered() {
        let parser = choice![is_string("a"), is_string("ab")];
        let state = parser.parse("abc");
        assert_eq!(state.index(), 1);
        assert_eq!(state.result(), &Value::from("a"));
    }

    #[test]
    fn test_choice_returns_winner_verbatim() {
        let winner = sequence_of![letters(), digits()];
        let choice = choice![digits(), sequence_of![letters(), digits()]];
        assert_eq!(choice.parse("abc123"), winner.parse("abc123"));
    }

    #[test]
    fn test_choice_all_fail() {
        let parser = choice![
            sequence_of![is_string("Hello"), is_string(" World")],
            is_string("Goodbye")
        ];

        let state = parser.parse("Hello there");
        assert!(state.is_error());
        assert_eq!(state.index(), 0);
        match state.error() {
            Some(ParseError::NoAlternative { loc, furthest, .. }) => {
                assert_eq!(loc.index, 0);
                let furthest = furthest.as_deref().map(ParseError::position);
                assert_eq!(furthest, Some(5));
            }
            other => panic!("expected no alternative, got {:?}", other),
        }
        assert_eq!(state.error().map(|err| err.deepest_loc().index), Some(5));
    }

    #[test]
    fn test_empty_choice_fails() {
        let state = choice(Vec::new()).parse("abc");
        assert!(matches!(
            state.error(),
            Some(ParseError::NoAlternative { furthest: None, .. })
        ));
    }

    #[test]
    fn test_or() {
        let parser = digits().or(letters());
        assert_eq!(parser.parse("abc").result(), &Value::from("abc"));
        assert_eq!(parser.parse("123").result(), &Value::from("123"));
        assert!(parser.parse("!").is_error());
    }
}
