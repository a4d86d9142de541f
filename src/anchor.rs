use crate::error::{ParseError, excerpt};
use crate::parser::Parser;
use crate::state::ParseState;
use crate::value::Value;
use std::borrow::Cow;

/// Zero width parser that only succeeds at the very start of the input
pub struct StartOfInput;

impl Parser for StartOfInput {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("StartOfInput")
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.index() == 0 {
            return state.with_result(0, Value::None);
        }

        let loc = state.loc();
        state.with_error(ParseError::Mismatch {
            parser: self.name().into_owned(),
            expected: "start of input".into(),
            found: excerpt(state.remaining()),
            loc,
        })
    }
}

pub fn start_of_input() -> StartOfInput {
    StartOfInput
}

/// Zero width parser that only succeeds once all input is consumed
pub struct EndOfInput;

impl Parser for EndOfInput {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("EndOfInput")
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.at_end() {
            let index = state.index();
            return state.with_result(index, Value::None);
        }

        let loc = state.loc();
        state.with_error(ParseError::Mismatch {
            parser: self.name().into_owned(),
            expected: "end of input".into(),
            found: excerpt(state.remaining()),
            loc,
        })
    }
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}
