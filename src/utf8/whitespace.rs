use crate::parser::{NamedExt, Parser};
use crate::utf8::char::is_char;
use crate::utf8::string::is_string;

/// Tests if a character is a space, newline or tab
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t')
}

pub fn is_space(c: char) -> bool {
    c == ' '
}

pub fn is_tab(c: char) -> bool {
    c == '\t'
}

pub fn is_newline(c: char) -> bool {
    c == '\n'
}

pub fn is_carriage_return(c: char) -> bool {
    c == '\r'
}

/// Parser that matches a space character
pub fn space() -> impl Parser {
    is_char(" ").named("Space")
}

/// Parser that matches a newline character
pub fn newline() -> impl Parser {
    is_char("\n").named("Newline")
}

/// Parser that matches a tab character
pub fn tab() -> impl Parser {
    is_char("\t").named("Tab")
}

/// Parser that matches the `\r\n` line ending
pub fn crlf() -> impl Parser {
    is_string("\r\n").named("Crlf")
}
