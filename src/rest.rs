use crate::parser::Parser;
use crate::state::ParseState;
use std::borrow::Cow;

/// Parser that consumes whatever input is left, possibly nothing
pub struct Rest;

impl Parser for Rest {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Rest")
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let remaining = state.remaining();
        state.with_result(state.input().len(), remaining)
    }
}

pub fn rest() -> Rest {
    Rest
}
