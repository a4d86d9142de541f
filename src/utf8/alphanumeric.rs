use super::digit::is_decimal_digit;
use super::letter::is_ascii_letter;

/// Tests if a character is an ASCII letter or digit: `[A-Za-z0-9]`
pub fn is_alphanumeric(c: char) -> bool {
    is_ascii_letter(c) || is_decimal_digit(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cond::cond_min_max;
    use crate::parser::Parser;
    use crate::value::Value;

    #[test]
    fn test_alphanumeric() {
        assert!("azAZ09".chars().all(is_alphanumeric));
        assert!(!"_- ö".chars().any(is_alphanumeric));
    }

    #[test]
    fn test_airline_designator_prefix() {
        let parser = cond_min_max(is_alphanumeric, 2, 2);

        let state = parser.parse("X3A");
        assert_eq!(state.result(), &Value::from("X3"));
        assert_eq!(state.remaining(), "A");
    }
}
