use crate::map::MapExt;
use crate::parser::{NamedExt, Parser};
use crate::sequence_of;
use crate::utf8::digit::digits;
use crate::value::Value;

use super::sign::sign;

/// Parser for one or more decimal digits, as an `Int`
///
/// Fails instead of wrapping when the digits do not fit into an `i64`.
pub fn non_negative_integer() -> impl Parser {
    digits()
        .try_map(|value: Value| value.as_str().unwrap_or_default().parse::<i64>())
        .named("NonNegativeInteger")
}

/// Alias of [`non_negative_integer`]
pub fn whole_number() -> impl Parser {
    non_negative_integer()
}

/// Parser for an optionally signed integer, as an `Int`
pub fn integer() -> impl Parser {
    sequence_of![sign(), digits()]
        .try_map(|value: Value| {
            let sign = value.get(0).and_then(Value::as_str).unwrap_or("+");
            let digits = value.get(1).and_then(Value::as_str).unwrap_or_default();
            format!("{}{}", sign, digits).parse::<i64>()
        })
        .named("Integer")
}
