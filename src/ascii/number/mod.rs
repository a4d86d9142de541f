use crate::choice;
use crate::parser::{NamedExt, Parser};

pub mod integer;
pub mod real;
pub mod sign;

pub use integer::{integer, non_negative_integer, whole_number};
pub use real::real_number;
pub use sign::{exponent, sign};

/// Parser that matches either a real number or an integer
///
/// Produces a `Float` when the input has a decimal point, an `Int` otherwise.
pub fn number() -> impl Parser {
    choice![real_number(), integer()].named("Number")
}
