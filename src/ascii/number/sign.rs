use crate::choice;
use crate::map::MapExt;
use crate::optional::zero_or_one;
use crate::parser::{NamedExt, Parser};
use crate::sequence_of;
use crate::utf8::char::is_char;
use crate::utf8::digit::digits;
use crate::value::Value;

/// Parser for an optional `+` or `-`
///
/// Always succeeds; the result is the sign as a string, `"+"` when absent.
pub fn sign() -> impl Parser {
    zero_or_one(choice![is_char("+"), is_char("-")])
        .map(|value: Value| match value.as_str() {
            Some("-") => "-",
            _ => "+",
        })
        .named("Sign")
}

/// Parser for the optional exponent part of a real number: `[eE][+-]?digits`
///
/// Always succeeds; the result is an `Int`, `0` when there is no exponent.
pub fn exponent() -> impl Parser {
    let marker = choice![is_char("e"), is_char("E")];
    zero_or_one(sequence_of![marker, sign(), digits()])
        .try_map(|value: Value| {
            if value.is_none() {
                return Ok(0);
            }
            let sign = value.get(1).and_then(Value::as_str).unwrap_or("+");
            let digits = value.get(2).and_then(Value::as_str).unwrap_or_default();
            format!("{}{}", sign, digits).parse::<i64>()
        })
        .named("Exponent")
}
