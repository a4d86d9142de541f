//! Per-invocation parse tracing
//!
//! Tracing is selected for a single call of [`Parser::parse_traced`] and
//! travels inside the parse state, so concurrent parses never share it.
//! Lines are emitted through the `log` facade under the `parsistate::trace`
//! target at debug level; install any logger to see them.

use crate::parser::Parser;
use crate::state::ParseState;

pub const TARGET: &str = "parsistate::trace";

/// How much a traced parse reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum TraceLevel {
    /// No trace output
    #[default]
    Off,
    /// Enter/exit line per parser with the remaining input and the error
    Calls,
    /// As `Calls`, plus the result of every parser
    Results,
}

/// Run `parser` on `state`, honouring fail-fast propagation and tracing
///
/// This is what [`Parser::run`] does; combinators reach their children
/// through it so that a failed state is never touched again.
pub(crate) fn run<'code, P>(parser: &P, state: ParseState<'code>) -> ParseState<'code>
where
    P: Parser + ?Sized,
{
    if state.is_error() {
        return state;
    }

    let level = state.trace_level();
    if level == TraceLevel::Off {
        return parser.transition(state);
    }

    let depth = state.depth();
    let indent = "|   ".repeat(depth);
    log::debug!(
        target: TARGET,
        "{}+-> {} <= input: '{}'",
        indent,
        parser.name(),
        state.remaining()
    );

    let next = parser.transition(state.at_depth(depth + 1)).at_depth(depth);

    log::debug!(target: TARGET, "{}+<- {} =>", indent, parser.name());
    match (level, next.error()) {
        (TraceLevel::Results, None) => {
            log::debug!(target: TARGET, "{}    index: {}, result: {}", indent, next.index(), next.result())
        }
        (_, Some(err)) => log::debug!(target: TARGET, "{}    error: {}", indent, err),
        _ => log::debug!(target: TARGET, "{}    index: {}", indent, next.index()),
    }

    next
}
