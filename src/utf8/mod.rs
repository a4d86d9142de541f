pub mod alphanumeric;
pub mod char;
pub mod digit;
pub mod letter;
pub mod string;
pub mod whitespace;

pub use alphanumeric::is_alphanumeric;
pub use char::{any_char, any_str, is_any_char, is_char};
pub use digit::{
    digit, digits, is_binary_digit, is_decimal_digit, is_digit, is_hexadecimal_digit,
    is_octal_digit,
};
pub use letter::{is_alphabetic, is_ascii_letter, letter, letters};
pub use string::is_string;
pub use whitespace::{
    crlf, is_carriage_return, is_newline, is_space, is_tab, is_whitespace, newline, space, tab,
};
