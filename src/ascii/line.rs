use crate::anchor::end_of_input;
use crate::choice;
use crate::cond::cond_min;
use crate::map::MapExt;
use crate::parser::{NamedExt, Parser};
use crate::sequence_of;
use crate::utf8::whitespace::newline;
use crate::value::Value;

/// Parser for the text up to the next `\n` or the end of input
///
/// The newline is consumed but not part of the result. An empty line fails.
pub fn rest_of_line() -> impl Parser {
    sequence_of![cond_min(|c| c != '\n', 1), choice![newline(), end_of_input()]]
        .map(|value: Value| value.get(0).cloned().unwrap_or_default())
        .named("RestOfLine")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::many;

    #[test]
    fn test_line_with_newline() {
        let state = rest_of_line().parse("first line\nsecond");
        assert_eq!(state.result(), &Value::from("first line"));
        assert_eq!(state.remaining(), "second");
    }

    #[test]
    fn test_last_line() {
        let state = rest_of_line().parse("only line");
        assert_eq!(state.result(), &Value::from("only line"));
        assert!(state.at_end());
    }

    #[test]
    fn test_empty_line_fails() {
        assert!(rest_of_line().parse("\nnext").is_error());
        assert!(rest_of_line().parse("").is_error());
    }

    #[test]
    fn test_lines() {
        let state = many(rest_of_line()).parse("a\nbb\nccc");
        assert_eq!(
            state.result(),
            &Value::List(vec!["a".into(), "bb".into(), "ccc".into()])
        );
    }
}
