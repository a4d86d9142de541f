use crate::error::{GrammarError, ParseError};
use crate::parser::{BoxedParser, Parser};
use crate::state::ParseState;
use once_cell::sync::OnceCell;
use std::borrow::Cow;
use std::sync::Arc;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for grammars where a parser function refers to itself.
pub struct Lazy<F> {
    factory: F,
}

impl<F, P> Lazy<F>
where
    F: Fn() -> P + Send + Sync,
    P: Parser,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P + Send + Sync,
    P: Parser,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Lazy")
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        let parser = (self.factory)();
        parser.run(state)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P + Send + Sync,
    P: Parser,
{
    Lazy::new(factory)
}

/// A late-bound parser slot for recursive grammars
///
/// Clones share the slot, so a grammar can refer to a rule before the rule
/// is defined. The slot is filled once with [`Forward::define`].
#[derive(Clone)]
pub struct Forward {
    name: Cow<'static, str>,
    slot: Arc<OnceCell<BoxedParser>>,
}

impl Forward {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Forward {
            name: name.into(),
            slot: Arc::new(OnceCell::new()),
        }
    }

    /// Bind the parser this slot stands for
    pub fn define<P: Parser + 'static>(&self, parser: P) -> Result<(), GrammarError> {
        self.slot
            .set(BoxedParser::new(parser))
            .map_err(|_| GrammarError::AlreadyDefined(self.name.to_string()))
    }

    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl Parser for Forward {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn transition<'code>(&self, state: ParseState<'code>) -> ParseState<'code> {
        match self.slot.get() {
            Some(parser) => parser.run(state),
            None => {
                let loc = state.loc();
                state.with_error(ParseError::InvalidArgument {
                    parser: self.name.to_string(),
                    message: "forward parser used before it was defined".into(),
                    loc,
                })
            }
        }
    }
}

/// Create an undefined forward parser
pub fn forward(name: impl Into<Cow<'static, str>>) -> Forward {
    Forward::new(name)
}
