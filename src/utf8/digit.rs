use crate::cond::{cond, cond_min};
use crate::parser::{NamedExt, Parser};

/// Tests if a character is an ASCII decimal digit: `[0-9]`
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Alias of [`is_decimal_digit`]
pub fn is_digit(c: char) -> bool {
    is_decimal_digit(c)
}

/// Tests if a character is an ASCII hexadecimal digit: `[0-9A-Fa-f]`
pub fn is_hexadecimal_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Tests if a character is an ASCII octal digit: `[0-7]`
pub fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// Tests if a character is a binary digit: `[01]`
pub fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

/// Parser that matches a single decimal digit
pub fn digit() -> impl Parser {
    cond(is_decimal_digit).named("Digit")
}

/// Parser that matches one or more decimal digits
pub fn digits() -> impl Parser {
    cond_min(is_decimal_digit, 1).named("Digits")
}
