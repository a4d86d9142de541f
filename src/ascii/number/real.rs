use crate::map::MapExt;
use crate::optional::zero_or_one;
use crate::parser::{NamedExt, Parser};
use crate::sequence_of;
use crate::utf8::char::is_char;
use crate::utf8::digit::digits;
use crate::value::Value;

use super::sign::{exponent, sign};

/// Parser for a real number: `sign digits "." digits? exponent?`
///
/// The dot is mandatory, so `"42"` is not a real number while `"42."` is.
/// The result is a `Float`; values beyond the `f64` range are rejected.
pub fn real_number() -> impl Parser {
    sequence_of![sign(), digits(), is_char("."), zero_or_one(digits()), exponent()]
        .try_map(|value: Value| {
            let sign = value.get(0).and_then(Value::as_str).unwrap_or("+");
            let int_part = value.get(1).and_then(Value::as_str).unwrap_or("0");
            let fract_part = value.get(3).and_then(Value::as_str).unwrap_or("0");
            let exponent = value.get(4).and_then(Value::as_int).unwrap_or(0);

            let text = format!("{}{}.{}e{}", sign, int_part, fract_part, exponent);
            match text.parse::<f64>() {
                Ok(real) if real.is_finite() => Ok(real),
                Ok(_) => Err(format!("number out of range: {}", text)),
                Err(err) => Err(err.to_string()),
            }
        })
        .named("RealNumber")
}
