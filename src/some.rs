use crate::count::{finish, repeat};
use crate::parser::{BoxedParser, Parser};
use crate::state::ParseState;
use std::borrow::Cow;

/// Parser combinator that matches one or more occurrences of the given parser
pub struct OneOrMore {
    parser: BoxedParser,
}

impl Parser for OneOrMore {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("OneOrMore({})", self.parser.name()))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let repeat = repeat(&self.parser, &state, 1, None);
        finish(self, state, repeat, 1, None)
    }
}

/// Convenience function to create a OneOrMore parser
pub fn one_or_more<P: Parser + 'static>(parser: P) -> OneOrMore {
    OneOrMore {
        parser: BoxedParser::new(parser),
    }
}

/// Alias of [`one_or_more`]
pub fn some<P: Parser + 'static>(parser: P) -> OneOrMore {
    one_or_more(parser)
}
