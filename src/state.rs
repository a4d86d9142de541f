use crate::error::{CodeLoc, ParseError};
use crate::trace::TraceLevel;
use crate::value::Value;
use std::fmt;

/// Immutable snapshot of parsing progress over one input string
///
/// Every parser takes a state by value and returns a new one. The cursor
/// (`index`) is a byte offset that always lies on a character boundary.
/// Trace bookkeeping rides along but never takes part in equality.
#[derive(Debug, Clone)]
pub struct ParseState<'code> {
    input: &'code str,
    index: usize,
    result: Value,
    error: Option<ParseError>,
    trace: TraceLevel,
    depth: usize,
}

impl<'code> ParseState<'code> {
    /// Initial state: cursor at 0, no result, no error
    pub fn new(input: &'code str) -> Self {
        ParseState {
            input,
            index: 0,
            result: Value::None,
            error: None,
            trace: TraceLevel::Off,
            depth: 0,
        }
    }

    pub fn input(&self) -> &'code str {
        self.input
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn result(&self) -> &Value {
        &self.result
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Unconsumed suffix of the input
    pub fn remaining(&self) -> &'code str {
        &self.input[self.index..]
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.input.len()
    }

    /// Decode the next character and return it with a state advanced past it
    ///
    /// Returns `None` at end of input.
    pub fn next_rune(&self) -> Option<(char, ParseState<'code>)> {
        let c = self.remaining().chars().next()?;
        Some((c, self.consume(c.len_utf8())))
    }

    /// Copy with the cursor advanced by `n` bytes
    pub fn consume(&self, n: usize) -> ParseState<'code> {
        let mut next = self.clone();
        next.index = (self.index + n).min(self.input.len());
        next
    }

    /// Copy with index and result replaced and the error cleared
    pub fn with_result(&self, index: usize, result: impl Into<Value>) -> ParseState<'code> {
        ParseState {
            input: self.input,
            index,
            result: result.into(),
            error: None,
            trace: self.trace,
            depth: self.depth,
        }
    }

    /// Copy marked as failed; index and result stay as they are
    pub fn with_error(&self, error: ParseError) -> ParseState<'code> {
        ParseState {
            input: self.input,
            index: self.index,
            result: self.result.clone(),
            error: Some(error),
            trace: self.trace,
            depth: self.depth,
        }
    }

    /// Location of the cursor, with line and column
    pub fn loc(&self) -> CodeLoc {
        CodeLoc::new(self.input, self.index)
    }

    /// Consume the state into the usual `Result` shape
    pub fn into_result(self) -> Result<Value, ParseError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result),
        }
    }

    pub(crate) fn with_trace(mut self, level: TraceLevel) -> Self {
        self.trace = level;
        self
    }

    pub(crate) fn trace_level(&self) -> TraceLevel {
        self.trace
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn at_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

impl fmt::Display for ParseState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, result: {}", self.loc(), self.result)?;
        if let Some(err) = &self.error {
            write!(f, ", error: {}", err)?;
        }
        Ok(())
    }
}

impl PartialEq for ParseState<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.input == other.input
            && self.index == other.index
            && self.result == other.result
            && self.error == other.error
    }
}
