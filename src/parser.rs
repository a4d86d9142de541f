use crate::state::ParseState;
use crate::trace::{self, TraceLevel};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// A parser is a named, stateless state-transition function. The same parser
/// value can be run against any number of independent states, including from
/// several threads at once.
pub trait Parser: Send + Sync {
    /// Debug identity used in traces and error messages, never for dispatch
    fn name(&self) -> Cow<'_, str>;

    /// Transform `state` into the next state
    ///
    /// Implementations may assume `state` is not failed; callers go through
    /// [`Parser::run`], which short-circuits failed states.
    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code>;

    /// Run this parser on `state`: failed states pass through untouched
    fn run<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        trace::run(self, state)
    }

    /// Run this parser from the start of `input`
    fn parse<'code>(&self, input: &'code str) -> ParseState<'code> {
        self.run(ParseState::new(input))
    }

    /// As [`Parser::parse`], with trace output at `level` for this call only
    fn parse_traced<'code>(&self, input: &'code str, level: TraceLevel) -> ParseState<'code> {
        self.run(ParseState::new(input).with_trace(level))
    }
}

/// A type-erased, cheaply clonable parser
///
/// Used wherever parsers of different types are stored together (sequences,
/// choices) and wherever a grammar is shared.
#[derive(Clone)]
pub struct BoxedParser {
    inner: Arc<dyn Parser>,
}

impl BoxedParser {
    pub fn new<P: Parser + 'static>(parser: P) -> Self {
        BoxedParser {
            inner: Arc::new(parser),
        }
    }
}

impl Parser for BoxedParser {
    fn name(&self) -> Cow<'_, str> {
        self.inner.name()
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        self.inner.transition(state)
    }
}

impl fmt::Debug for BoxedParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoxedParser").field(&self.name()).finish()
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized + 'static {
    fn boxed(self) -> BoxedParser {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<P> BoxedExt for P where P: Parser + 'static {}

/// Parser built from a plain transition function
pub struct FnParser<F> {
    name: Cow<'static, str>,
    transition: F,
}

impl<F> Parser for FnParser<F>
where
    F: for<'code> Fn(ParseState<'code>) -> ParseState<'code> + Send + Sync,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        (self.transition)(state)
    }
}

/// Wrap a transition function into a named parser
pub fn from_fn<F>(name: impl Into<Cow<'static, str>>, transition: F) -> FnParser<F>
where
    F: for<'code> Fn(ParseState<'code>) -> ParseState<'code> + Send + Sync,
{
    FnParser {
        name: name.into(),
        transition,
    }
}

/// Parser wrapper that only changes the name shown in traces and errors
pub struct Named<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P: Parser> Parser for Named<P> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        self.parser.transition(state)
    }
}

/// Extension trait to add .named() method support for parsers
pub trait NamedExt: Parser + Sized {
    fn named(self, name: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named {
            parser: self,
            name: name.into(),
        }
    }
}

/// Implement NamedExt for all parsers
impl<P> NamedExt for P where P: Parser {}

/// Comma separated names of `parsers`, for composite parser names
pub(crate) fn names(parsers: &[BoxedParser]) -> String {
    parsers
        .iter()
        .map(|parser| parser.name().into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}
