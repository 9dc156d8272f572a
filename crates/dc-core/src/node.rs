//! Tree data model: scalars, sequences, and insertion-ordered mappings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Key-ordered mapping. Keys are unique, iteration follows insertion order.
pub type Mapping = IndexMap<String, Node>;

/// Leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Absent value. Has no JSON representation.
    Undefined,
    Null,
    Bool(bool),
    /// Exact integer, as read from JSON or built from a Rust integer.
    /// Wide enough for the whole `i64` and `u64` ranges.
    Integer(i128),
    Number(f64),
    String(String),
}

impl Scalar {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) | Self::Number(_) => "number",
            Self::String(_) => "string",
        }
    }
}

/// A tree node: either a leaf or one of the two container kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Node {
    Scalar(Scalar),
    Sequence(Vec<Node>),
    Mapping(Mapping),
}

impl Node {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(s) => s.kind(),
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    /// Sequences and mappings are container-like; everything else is a leaf.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Sequence(_) | Self::Mapping(_))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Shorthand for `Node::Scalar(Scalar::Undefined)`.
    pub fn undefined() -> Self {
        Self::Scalar(Scalar::Undefined)
    }

    pub fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }
}

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Self::Scalar(Scalar::Number(n))
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Self::Scalar(Scalar::Integer(n.into()))
    }
}

impl From<u64> for Node {
    fn from(n: u64) -> Self {
        Self::Scalar(Scalar::Integer(n.into()))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::String(s))
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Mapping> for Node {
    fn from(map: Mapping) -> Self {
        Self::Mapping(map)
    }
}

/// Integers keep their exact value; only fractional or exponent forms
/// become `Scalar::Number`.
fn number_to_scalar(n: &Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        return Scalar::Integer(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Scalar::Integer(u.into());
    }
    Scalar::Number(n.as_f64().unwrap_or(f64::NAN))
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(number_to_scalar(&n)),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

/// Borrowing conversion; only leaves are copied.
impl From<&Value> for Node {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(*b)),
            Value::Number(n) => Self::Scalar(number_to_scalar(n)),
            Value::String(s) => Self::Scalar(Scalar::String(s.clone())),
            Value::Array(items) => Self::Sequence(items.iter().map(Node::from).collect()),
            Value::Object(map) => {
                Self::Mapping(map.iter().map(|(k, v)| (k.clone(), Node::from(v))).collect())
            }
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Scalar(s) => scalar_to_value(s),
            Node::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            // JSON objects cannot hold undefined, so those entries are omitted.
            Node::Mapping(map) => Value::Object(
                map.into_iter()
                    .filter(|(_, v)| !matches!(v, Node::Scalar(Scalar::Undefined)))
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

fn scalar_to_value(s: Scalar) -> Value {
    match s {
        Scalar::Undefined | Scalar::Null => Value::Null,
        Scalar::Bool(b) => Value::Bool(b),
        Scalar::Integer(i) => integer_to_value(i),
        Scalar::Number(n) => number_to_value(n),
        Scalar::String(s) => Value::String(s),
    }
}

fn integer_to_value(i: i128) -> Value {
    if let Ok(n) = i64::try_from(i) {
        return Value::Number(Number::from(n));
    }
    if let Ok(n) = u64::try_from(i) {
        return Value::Number(Number::from(n));
    }
    number_to_value(i as f64)
}

/// Integral values in `i64` range stay integers, so `1` round-trips as `1`.
fn number_to_value(n: f64) -> Value {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        return Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
}
