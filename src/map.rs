use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::value::Value;
use std::borrow::Cow;
use std::fmt;

/// Parser combinator that transforms the result of a parser using a mapping function
///
/// Index and error state are never touched; failures pass through unchanged.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, T> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(Value) -> T + Send + Sync,
    T: Into<Value>,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("Map({})", self.parser.name()))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let next = self.parser.run(state);
        if next.is_error() {
            return next;
        }

        let index = next.index();
        let mapped = (self.mapper)(next.result().clone());
        next.with_result(index, mapped)
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, T>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(Value) -> T + Send + Sync,
    T: Into<Value>,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, T>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Value) -> T + Send + Sync,
        T: Into<Value>,
    {
        Map::new(self, mapper)
    }

    fn try_map<F, T, E>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Value) -> Result<T, E> + Send + Sync,
        T: Into<Value>,
        E: fmt::Display,
    {
        TryMap::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}

/// Parser combinator with a fallible mapping function
///
/// An `Err` from the mapper turns the parse into a failure located where the
/// inner parser began.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<P, F, T, E> Parser for TryMap<P, F>
where
    P: Parser,
    F: Fn(Value) -> Result<T, E> + Send + Sync,
    T: Into<Value>,
    E: fmt::Display,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("TryMap({})", self.parser.name()))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let next = self.parser.run(state.clone());
        if next.is_error() {
            return next;
        }

        match (self.mapper)(next.result().clone()) {
            Ok(mapped) => {
                let index = next.index();
                next.with_result(index, mapped)
            }
            Err(err) => {
                let loc = state.loc();
                state.with_error(ParseError::custom(format!("{}: {}", self.name(), err), loc))
            }
        }
    }
}

/// Convenience function to create a TryMap parser
pub fn try_map<P, F, T, E>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser,
    F: Fn(Value) -> Result<T, E> + Send + Sync,
    T: Into<Value>,
    E: fmt::Display,
{
    TryMap::new(parser, mapper)
}
