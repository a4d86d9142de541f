use crate::parser::{BoxedParser, Parser};
use crate::state::ParseState;
use crate::value::Value;
use std::borrow::Cow;

/// Parser combinator that tries a parser once and never fails
///
/// On failure the result is [`Value::None`] and the cursor stays where it was.
pub struct ZeroOrOne {
    parser: BoxedParser,
}

impl Parser for ZeroOrOne {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("ZeroOrOne({})", self.parser.name()))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let next = self.parser.run(state.clone());
        if next.is_error() {
            let index = state.index();
            return state.with_result(index, Value::None);
        }
        next
    }
}

/// Convenience function to create a ZeroOrOne parser
pub fn zero_or_one<P: Parser + 'static>(parser: P) -> ZeroOrOne {
    ZeroOrOne {
        parser: BoxedParser::new(parser),
    }
}

/// Alias of [`zero_or_one`]
pub fn optional<P: Parser + 'static>(parser: P) -> ZeroOrOne {
    zero_or_one(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt: Parser + Sized + 'static {
    fn optional(self) -> ZeroOrOne {
        zero_or_one(self)
    }
}

/// Implement OptionalExt for all parsers
impl<P> OptionalExt for P where P: Parser + 'static {}
