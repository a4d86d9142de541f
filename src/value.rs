use std::fmt;

/// A user-defined syntax tree node produced by mapping functions
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: String,
    pub children: Vec<Value>,
}

impl Node {
    pub fn new(tag: impl Into<String>, children: Vec<Value>) -> Self {
        Node {
            tag: tag.into(),
            children,
        }
    }
}

/// The result carried by a parse state
///
/// Primitives produce `Str`, sequences and repetitions produce `List`, and
/// `None` marks an absent optional match. Mapping functions are free to turn
/// results into numbers or `Node`s.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    None,
    Str(String),
    Char(char),
    Int(i64),
    Float(f64),
    List(Vec<Value>),
    Node(Node),
}

impl Value {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Take the items out of a `List`, or wrap any other value in a one-item list
    pub fn into_list(self) -> Vec<Value> {
        match self {
            Value::List(items) => items,
            Value::None => Vec::new(),
            other => vec![other],
        }
    }

    /// The `index`th item of a `List` result, if there is one
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.as_list().and_then(|items| items.get(index))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "none"),
            Value::Str(s) => write!(f, "{}", s),
            Value::Char(c) => write!(f, "{}", c),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Node(node) => {
                write!(f, "({}", node.tag)?;
                for child in &node.children {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

/// Mapping function that concatenates a list of results into one `Str`
///
/// Nested lists are flattened, `None` items are skipped and scalars are
/// stringified. A non-list value is stringified as is.
pub fn join_strings(value: Value) -> Value {
    fn push(out: &mut String, value: &Value) {
        match value {
            Value::None => {}
            Value::List(items) => items.iter().for_each(|item| push(out, item)),
            other => out.push_str(&other.to_string()),
        }
    }

    let mut joined = String::new();
    push(&mut joined, &value);
    Value::Str(joined)
}
