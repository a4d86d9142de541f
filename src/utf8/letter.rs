use crate::cond::{cond, cond_min};
use crate::parser::{NamedExt, Parser};

/// Tests if a character is an ASCII letter: `[A-Za-z]`
pub fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Alias of [`is_ascii_letter`]
pub fn is_alphabetic(c: char) -> bool {
    is_ascii_letter(c)
}

/// Parser that matches a single ASCII letter
pub fn letter() -> impl Parser {
    cond(is_ascii_letter).named("Letter")
}

/// Parser that matches one or more ASCII letters
pub fn letters() -> impl Parser {
    cond_min(is_ascii_letter, 1).named("Letters")
}
