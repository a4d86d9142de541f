use crate::error::{ParseError, excerpt};
use crate::parser::Parser;
use crate::state::ParseState;
use std::borrow::Cow;

/// Outcome of a greedy scan over characters satisfying a predicate
struct Scan {
    count: usize,
    end: usize,
    hit_end: bool,
}

/// Consume characters while `predicate` holds, at most `max` of them
fn scan<F>(state: &ParseState<'_>, predicate: &F, max: Option<usize>) -> Scan
where
    F: Fn(char) -> bool,
{
    let mut count = 0;
    let mut end = state.index();

    for c in state.remaining().chars() {
        if max.is_some_and(|max| count >= max) || !predicate(c) {
            return Scan {
                count,
                end,
                hit_end: false,
            };
        }
        count += 1;
        end += c.len_utf8();
    }

    Scan {
        count,
        end,
        hit_end: true,
    }
}

/// Shared failure handling for the bounded character scanners
fn too_few<'code>(
    name: String,
    state: ParseState<'code>,
    scan: Scan,
    min: usize,
    max: Option<usize>,
) -> ParseState<'code> {
    let stop = state.consume(scan.end - state.index()).loc();
    let error = if scan.hit_end {
        ParseError::UnexpectedEndOfInput {
            parser: name,
            loc: stop,
        }
    } else {
        ParseError::Arity {
            parser: name,
            min,
            max,
            found: scan.count,
            loc: stop,
        }
    };
    state.with_error(error)
}

fn invalid<'code>(name: String, state: ParseState<'code>, message: String) -> ParseState<'code> {
    let loc = state.loc();
    state.with_error(ParseError::InvalidArgument {
        parser: name,
        message,
        loc,
    })
}

/// Parser that matches a single character satisfying a predicate
pub struct Cond<F> {
    predicate: F,
}

impl<F> Parser for Cond<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Cond")
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let Some((c, next)) = state.next_rune() else {
            let loc = state.loc();
            return state.with_error(ParseError::UnexpectedEndOfInput {
                parser: self.name().into_owned(),
                loc,
            });
        };

        if !(self.predicate)(c) {
            let loc = state.loc();
            return state.with_error(ParseError::Mismatch {
                parser: self.name().into_owned(),
                expected: "a character matching the condition".into(),
                found: excerpt(state.remaining()),
                loc,
            });
        }

        next.with_result(next.index(), c.to_string())
    }
}

/// Parser that matches one character for which `predicate` returns true
pub fn cond<F>(predicate: F) -> Cond<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    Cond { predicate }
}

/// Parser that greedily matches at least `min` characters satisfying a predicate
pub struct CondMin<F> {
    predicate: F,
    min: isize,
}

impl<F> Parser for CondMin<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("CondMin({})", self.min))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let Ok(min) = usize::try_from(self.min) else {
            return invalid(
                self.name().into_owned(),
                state,
                format!("minimum must not be negative, got {}", self.min),
            );
        };

        let scan = scan(&state, &self.predicate, None);
        if scan.count < min {
            return too_few(self.name().into_owned(), state, scan, min, None);
        }

        let matched = &state.input()[state.index()..scan.end];
        state.with_result(scan.end, matched)
    }
}

/// Parser that matches as many characters satisfying `predicate` as possible,
/// failing when fewer than `min` match
pub fn cond_min<F>(predicate: F, min: isize) -> CondMin<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    CondMin { predicate, min }
}

/// Parser that greedily matches between `min` and `max` characters satisfying a predicate
pub struct CondMinMax<F> {
    predicate: F,
    min: isize,
    max: isize,
}

impl<F> Parser for CondMinMax<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("CondMinMax({}, {})", self.min, self.max))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let (min, max) = match (usize::try_from(self.min), usize::try_from(self.max)) {
            (Ok(min), Ok(max)) if min <= max => (min, max),
            _ => {
                return invalid(
                    self.name().into_owned(),
                    state,
                    format!("wrong range of occurrences min: {}, max: {}", self.min, self.max),
                );
            }
        };

        let scan = scan(&state, &self.predicate, Some(max));
        if scan.count < min {
            return too_few(self.name().into_owned(), state, scan, min, Some(max));
        }

        let matched = &state.input()[state.index()..scan.end];
        state.with_result(scan.end, matched)
    }
}

/// Parser that matches up to `max` characters satisfying `predicate`,
/// failing when fewer than `min` match
pub fn cond_min_max<F>(predicate: F, min: isize, max: isize) -> CondMinMax<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    CondMinMax {
        predicate,
        min,
        max,
    }
}
