use crate::error::{CodeLoc, ParseError};
use crate::parser::Parser;
use crate::state::ParseState;
use std::borrow::Cow;

/// Parser combinator that rewrites the error of a failed parser
///
/// The mapper receives the original error and the location where the inner
/// parser began. The result is still a failure; successes pass through.
pub struct ErrorMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> ErrorMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        ErrorMap { parser, mapper }
    }
}

impl<P, F> Parser for ErrorMap<P, F>
where
    P: Parser,
    F: Fn(&ParseError, CodeLoc) -> ParseError + Send + Sync,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("ErrorMap({})", self.parser.name()))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let loc = state.loc();
        let next = self.parser.run(state);
        match next.error() {
            Some(err) => {
                let mapped = (self.mapper)(err, loc);
                next.with_error(mapped)
            }
            None => next,
        }
    }
}

/// Extension trait to add .error_map() method support for parsers
pub trait ErrorMapExt: Parser + Sized {
    fn error_map<F>(self, mapper: F) -> ErrorMap<Self, F>
    where
        F: Fn(&ParseError, CodeLoc) -> ParseError + Send + Sync,
    {
        ErrorMap::new(self, mapper)
    }
}

/// Implement ErrorMapExt for all parsers
impl<P> ErrorMapExt for P where P: Parser {}

/// Convenience function to create an ErrorMap parser
pub fn error_map<P, F>(parser: P, mapper: F) -> ErrorMap<P, F>
where
    P: Parser,
    F: Fn(&ParseError, CodeLoc) -> ParseError + Send + Sync,
{
    ErrorMap::new(parser, mapper)
}
