use crate::count::{finish, repeat};
use crate::parser::{BoxedParser, Parser};
use crate::state::ParseState;
use std::borrow::Cow;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. A run that matches nothing succeeds with an empty list at
/// the original position.
pub struct ZeroOrMore {
    parser: BoxedParser,
}

impl Parser for ZeroOrMore {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("ZeroOrMore({})", self.parser.name()))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let repeat = repeat(&self.parser, &state, 0, None);
        finish(self, state, repeat, 0, None)
    }
}

/// Convenience function to create a ZeroOrMore parser
pub fn zero_or_more<P: Parser + 'static>(parser: P) -> ZeroOrMore {
    ZeroOrMore {
        parser: BoxedParser::new(parser),
    }
}

/// Alias of [`zero_or_more`]
pub fn many<P: Parser + 'static>(parser: P) -> ZeroOrMore {
    zero_or_more(parser)
}
