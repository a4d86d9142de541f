//! # parsistate - State-passing parser combinators
//!
//! A parser here is a named transition over an immutable [`ParseState`]: it
//! receives the input, a cursor and the previous result, and returns a new
//! state that either carries a result or a [`ParseError`]. Small primitives
//! (literals, character predicates, regular expressions, anchors) are
//! composed with combinators (sequence, choice, repetition, mapping,
//! chaining, late binding) into recursive-descent parsers.
//!
//! - **No panics on input**: failures are data inside the returned state
//! - **Shareable grammars**: parsers are `Send + Sync` and hold no per-parse state
//! - **Located errors**: every error carries line and column, with a context renderer
//! - **Per-call tracing**: [`Parser::parse_traced`] logs through the `log` facade
//!
//! ```
//! use parsistate::prelude::*;
//!
//! let greeting = sequence_of![is_string("Hello"), space(), letters()].map(join_strings);
//! let state = greeting.parse("Hello World");
//! assert_eq!(state.result().as_str(), Some("Hello World"));
//! ```

pub mod anchor;
pub mod ascii;
pub mod between;
pub mod chain;
pub mod choice;
pub mod cond;
pub mod count;
pub mod error;
pub mod lazy;
pub mod many;
pub mod map;
pub mod map_err;
pub mod optional;
pub mod parser;
pub mod regexp;
pub mod rest;
pub mod sequence;
pub mod some;
pub mod state;
pub mod trace;
pub mod utf8;
pub mod value;

pub use error::{CodeLoc, GrammarError, ParseError};
pub use parser::{BoxedParser, Parser};
pub use state::ParseState;
pub use trace::TraceLevel;
pub use value::{Node, Value};

/// Everything needed to write a grammar
pub mod prelude {
    pub use crate::anchor::{end_of_input, start_of_input};
    pub use crate::ascii::{
        exponent, integer, non_negative_integer, number, real_number, rest_of_line, sign,
        whole_number,
    };
    pub use crate::between::between;
    pub use crate::chain::{ChainExt, chain};
    pub use crate::choice::{OrExt, choice};
    pub use crate::cond::{cond, cond_min, cond_min_max};
    pub use crate::count::{count, count_min, count_min_max, times, times_min, times_min_max};
    pub use crate::error::{CodeLoc, GrammarError, ParseError};
    pub use crate::lazy::{Forward, forward, lazy};
    pub use crate::many::{many, zero_or_more};
    pub use crate::map::{MapExt, map, try_map};
    pub use crate::map_err::{ErrorMapExt, error_map};
    pub use crate::optional::{OptionalExt, optional, zero_or_one};
    pub use crate::parser::{BoxedExt, BoxedParser, NamedExt, Parser, from_fn};
    pub use crate::regexp::regexp;
    pub use crate::rest::rest;
    pub use crate::sequence::{ThenExt, sequence_of};
    pub use crate::some::{one_or_more, some};
    pub use crate::state::ParseState;
    pub use crate::trace::TraceLevel;
    pub use crate::utf8::{
        any_char, any_str, crlf, digit, digits, is_alphabetic, is_alphanumeric, is_any_char,
        is_ascii_letter, is_binary_digit, is_carriage_return, is_char, is_decimal_digit, is_digit,
        is_hexadecimal_digit, is_newline, is_octal_digit, is_space, is_string, is_tab,
        is_whitespace, letter, letters, newline, space, tab,
    };
    pub use crate::value::{Node, Value, join_strings};
    pub use crate::{choice, sequence_of};
}
