use crate::parser::{BoxedParser, Parser};
use crate::state::ParseState;
use std::borrow::Cow;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and keeps only the content's result.
/// When any part fails the cursor stays where `open` began.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(42)"` → `"42"`
pub struct Between {
    open: BoxedParser,
    content: BoxedParser,
    close: BoxedParser,
}

impl Between {
    pub fn new<P1, P2, P3>(open: P1, content: P2, close: P3) -> Self
    where
        P1: Parser + 'static,
        P2: Parser + 'static,
        P3: Parser + 'static,
    {
        Between {
            open: BoxedParser::new(open),
            content: BoxedParser::new(content),
            close: BoxedParser::new(close),
        }
    }
}

impl Parser for Between {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "Between({}, {}, {})",
            self.open.name(),
            self.content.name(),
            self.close.name()
        ))
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let after_open = self.open.run(state.clone());
        let content = self.content.run(after_open);
        let after_close = self.close.run(content.clone());

        if let Some(err) = after_close.error() {
            return state.with_error(err.clone());
        }

        let index = after_close.index();
        after_close.with_result(index, content.result().clone())
    }
}

/// Creates a bracketing function: the returned closure wraps any content
/// parser between `open` and `close`
///
/// ```
/// use parsistate::between::between;
/// use parsistate::parser::{BoxedExt, Parser};
/// use parsistate::utf8::{digits, is_char};
///
/// let parens = between(is_char("("), is_char(")"));
/// let state = parens(digits().boxed()).parse("(42)");
/// assert_eq!(state.result().as_str(), Some("42"));
/// ```
pub fn between<P1, P3>(open: P1, close: P3) -> impl Fn(BoxedParser) -> Between
where
    P1: Parser + 'static,
    P3: Parser + 'static,
{
    let open = BoxedParser::new(open);
    let close = BoxedParser::new(close);
    move |content| Between {
        open: open.clone(),
        content,
        close: close.clone(),
    }
}
