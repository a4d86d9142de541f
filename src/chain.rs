use crate::parser::Parser;
use crate::state::ParseState;
use crate::value::Value;
use std::borrow::Cow;

/// Context-sensitive sequencing
///
/// Runs `parser`, builds the next parser from its result and runs that on
/// the state `parser` left behind. A failure of either stage is reported at
/// its own location while the cursor returns to where the chain began.
pub struct Chain<P, F> {
    parser: P,
    make_next: F,
}

impl<P, F> Chain<P, F> {
    pub fn new(parser: P, make_next: F) -> Self {
        Chain { parser, make_next }
    }
}

impl<P, F, Q> Parser for Chain<P, F>
where
    P: Parser,
    F: Fn(&Value) -> Q + Send + Sync,
    Q: Parser,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("Chain({})", self.parser.name()))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let next = self.parser.run(state.clone());
        if next.is_error() {
            return next;
        }

        let follow = (self.make_next)(next.result());
        let last = follow.run(next);
        match last.error() {
            Some(err) => state.with_error(err.clone()),
            None => last,
        }
    }
}

/// Convenience function to create a Chain parser
pub fn chain<P, F, Q>(parser: P, make_next: F) -> Chain<P, F>
where
    P: Parser,
    F: Fn(&Value) -> Q + Send + Sync,
    Q: Parser,
{
    Chain::new(parser, make_next)
}

/// Extension trait to add .chain() method support for parsers
pub trait ChainExt: Parser + Sized {
    fn chain<F, Q>(self, make_next: F) -> Chain<Self, F>
    where
        F: Fn(&Value) -> Q + Send + Sync,
        Q: Parser,
    {
        Chain::new(self, make_next)
    }
}

/// Implement ChainExt for all parsers
impl<P> ChainExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice;
    use crate::count::count;
    use crate::map::MapExt;
    use crate::parser::{BoxedExt, BoxedParser};
    use crate::utf8::char::is_char;
    use crate::utf8::digit::{digit, digits};
    use crate::utf8::letter::letters;
    use crate::utf8::string::is_string;

    fn tagged() -> impl Parser {
        // "str:" is followed by letters, "int:" by digits
        choice![is_string("str:"), is_string("int:")].chain(|tag: &Value| -> BoxedParser {
            match tag.as_str() {
                Some("str:") => letters().boxed(),
                _ => digits().boxed(),
            }
        })
    }

    #[test]
    fn test_chain_selects_grammar() {
        let state = tagged().parse("str:abc");
        assert_eq!(state.result(), &Value::from("abc"));
        assert_eq!(state.index(), 7);

        let state = tagged().parse("int:42");
        assert_eq!(state.result(), &Value::from("42"));
    }

    #[test]
    fn test_chain_second_stage_fails() {
        let state = tagged().parse("int:abc");
        assert!(state.is_error());
        assert_eq!(state.index(), 0);
        assert_eq!(state.error().map(|err| err.position()), Some(4));
    }

    #[test]
    fn test_chain_first_stage_fails() {
        let state = tagged().parse("bool:1");
        assert!(state.is_error());
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_length_prefixed() {
        let parser = chain(
            digit().map(|value: Value| value.as_str().and_then(|s| s.parse::<i64>().ok()).unwrap_or(0)),
            |len: &Value| {
                let n = len.as_int().unwrap_or(0) as isize;
                count(is_char("x"), n)
            },
        );

        let state = parser.parse("3xxxx");
        assert_eq!(state.index(), 4);
        assert_eq!(state.result().as_list().map(<[Value]>::len), Some(3));

        assert!(parser.parse("5xxx").is_error());
    }
}
