use crate::parser::{BoxedParser, Parser, names};
use crate::state::ParseState;
use crate::value::Value;
use std::borrow::Cow;

/// Parser combinator that runs parsers one after the other and collects
/// their results into a list
///
/// The sequence is atomic: when any child fails, the returned state keeps
/// the cursor where the sequence began and carries the child's error.
///
/// Example:
/// ```
/// use parsistate::parser::Parser;
/// use parsistate::sequence_of;
/// use parsistate::utf8::{digits, is_char};
/// use parsistate::value::Value;
///
/// let parser = sequence_of![digits(), is_char("."), digits()];
/// let state = parser.parse("3.14");
/// assert_eq!(state.result(), &Value::List(vec!["3".into(), ".".into(), "14".into()]));
/// ```
pub struct SequenceOf {
    parsers: Vec<BoxedParser>,
}

impl SequenceOf {
    pub fn new(parsers: Vec<BoxedParser>) -> Self {
        SequenceOf { parsers }
    }
}

impl Parser for SequenceOf {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("SequenceOf({})", names(&self.parsers)))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let mut results = Vec::with_capacity(self.parsers.len());
        let mut next = state.clone();

        for parser in &self.parsers {
            next = parser.run(next);
            if let Some(err) = next.error() {
                return state.with_error(err.clone());
            }
            results.push(next.result().clone());
        }

        let index = next.index();
        next.with_result(index, results)
    }
}

/// Convenience function to create a SequenceOf parser
pub fn sequence_of(parsers: Vec<BoxedParser>) -> SequenceOf {
    SequenceOf::new(parsers)
}

/// Build a [`SequenceOf`] from parsers of any type
#[macro_export]
macro_rules! sequence_of {
    ($($parser:expr),* $(,)?) => {
        $crate::sequence::sequence_of(vec![$($crate::parser::BoxedExt::boxed($parser)),*])
    };
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt: Parser + Sized + 'static {
    /// Sequence `self` and `other`, producing a two element list
    fn then<P>(self, other: P) -> SequenceOf
    where
        P: Parser + 'static,
    {
        crate::sequence_of![self, other]
    }
}

/// Implement ThenExt for all parsers
impl<P> ThenExt for P where P: Parser + 'static {}
