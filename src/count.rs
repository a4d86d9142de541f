use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::state::ParseState;
use crate::value::Value;
use std::borrow::Cow;

/// Results of running a parser repeatedly against an advancing state
pub(crate) struct Repeat<'code> {
    pub(crate) results: Vec<Value>,
    /// State after the last successful iteration
    pub(crate) last: ParseState<'code>,
}

/// Run `parser` until it fails or `max` successes are collected
///
/// Without an upper bound, an iteration that succeeds without consuming
/// input is counted and ends the loop once `min` successes are collected.
pub(crate) fn repeat<'code, P>(
    parser: &P,
    state: &ParseState<'code>,
    min: usize,
    max: Option<usize>,
) -> Repeat<'code>
where
    P: Parser + ?Sized,
{
    let mut results = Vec::new();
    let mut last = state.clone();

    while max.is_none_or(|max| results.len() < max) {
        let next = parser.run(last.clone());
        if next.is_error() {
            break;
        }

        let progressed = next.index() > last.index();
        results.push(next.result().clone());
        last = next;

        if max.is_none() && !progressed && results.len() >= min {
            break;
        }
    }

    Repeat { results, last }
}

/// Finish a repetition: succeed with the collected list or fail with an
/// arity error on the incoming state, named after `repetition`
pub(crate) fn finish<'code, R>(
    repetition: &R,
    state: ParseState<'code>,
    repeat: Repeat<'code>,
    min: usize,
    max: Option<usize>,
) -> ParseState<'code>
where
    R: Parser + ?Sized,
{
    if repeat.results.len() < min {
        let loc = repeat.last.loc();
        return state.with_error(ParseError::Arity {
            parser: repetition.name().into_owned(),
            min,
            max,
            found: repeat.results.len(),
            loc,
        });
    }

    let index = repeat.last.index();
    repeat.last.with_result(index, repeat.results)
}

fn invalid<'code>(name: Cow<'_, str>, state: ParseState<'code>, message: String) -> ParseState<'code> {
    let loc = state.loc();
    state.with_error(ParseError::InvalidArgument {
        parser: name.into_owned(),
        message,
        loc,
    })
}

/// Parser combinator that matches a parser exactly `n` times
pub struct Count {
    parser: BoxedParser,
    n: isize,
}

impl Parser for Count {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("Count({}, {})", self.parser.name(), self.n))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let Ok(n) = usize::try_from(self.n) else {
            let message = format!("number of occurrences must not be negative, got {}", self.n);
            return invalid(self.name(), state, message);
        };

        let repeat = repeat(&self.parser, &state, n, Some(n));
        finish(self, state, repeat, n, Some(n))
    }
}

/// Convenience function to create a Count parser
pub fn count<P: Parser + 'static>(parser: P, n: isize) -> Count {
    Count {
        parser: BoxedParser::new(parser),
        n,
    }
}

/// Alias of [`count`]
pub fn times<P: Parser + 'static>(parser: P, n: isize) -> Count {
    count(parser, n)
}

/// Parser combinator that matches a parser at least `min` times
pub struct CountMin {
    parser: BoxedParser,
    min: isize,
}

impl Parser for CountMin {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("CountMin({}, {})", self.parser.name(), self.min))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let Ok(min) = usize::try_from(self.min) else {
            let message = format!("minimum must not be negative, got {}", self.min);
            return invalid(self.name(), state, message);
        };

        let repeat = repeat(&self.parser, &state, min, None);
        finish(self, state, repeat, min, None)
    }
}

/// Convenience function to create a CountMin parser
pub fn count_min<P: Parser + 'static>(parser: P, min: isize) -> CountMin {
    CountMin {
        parser: BoxedParser::new(parser),
        min,
    }
}

/// Alias of [`count_min`]
pub fn times_min<P: Parser + 'static>(parser: P, min: isize) -> CountMin {
    count_min(parser, min)
}

/// Parser combinator that matches a parser between `min` and `max` times
///
/// Stops as soon as `max` matches are collected, even if more are available.
pub struct CountMinMax {
    parser: BoxedParser,
    min: isize,
    max: isize,
}

impl Parser for CountMinMax {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "CountMinMax({}, {}, {})",
            self.parser.name(),
            self.min,
            self.max
        ))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let (min, max) = match (usize::try_from(self.min), usize::try_from(self.max)) {
            (Ok(min), Ok(max)) if min <= max => (min, max),
            _ => {
                let message = format!("wrong range of occurrences min: {}, max: {}", self.min, self.max);
                return invalid(self.name(), state, message);
            }
        };

        let repeat = repeat(&self.parser, &state, min, Some(max));
        finish(self, state, repeat, min, Some(max))
    }
}

/// Convenience function to create a CountMinMax parser
pub fn count_min_max<P: Parser + 'static>(parser: P, min: isize, max: isize) -> CountMinMax {
    CountMinMax {
        parser: BoxedParser::new(parser),
        min,
        max,
    }
}

/// Alias of [`count_min_max`]
pub fn times_min_max<P: Parser + 'static>(parser: P, min: isize, max: isize) -> CountMinMax {
    count_min_max(parser, min, max)
}
