use indexmap::IndexMap;

use entity_gql_core::{Selector, Value};

/// One argument of a query call.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryArg<'a> {
    /// Operation name or raw fragment text.
    Text(&'a str),
    /// Parameters, or any other structured value.
    Value(Value),
    Selector(&'a Selector),
}

impl<'a> QueryArg<'a> {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_selector(&self) -> Option<&'a Selector> {
        match self {
            Self::Selector(selector) => Some(selector),
            _ => None,
        }
    }

    /// Falsy values (`null`, `false`, `0`, `""`) count as an absent argument.
    pub(crate) fn is_absent(&self) -> bool {
        let Self::Value(value) = self else {
            return false;
        };
        match value {
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            _ => value.is_null() || value.as_str() == Some(""),
        }
    }

    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Value(Value::Object(_)) => "object",
            Self::Value(_) => "value",
            Self::Selector(_) => "selector",
        }
    }
}

impl<'a> From<&'a str> for QueryArg<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for QueryArg<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a Selector> for QueryArg<'a> {
    fn from(selector: &'a Selector) -> Self {
        Self::Selector(selector)
    }
}

impl From<Value> for QueryArg<'_> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<IndexMap<String, Value>> for QueryArg<'_> {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self::Value(Value::Object(map))
    }
}

impl From<serde_json::Value> for QueryArg<'_> {
    fn from(value: serde_json::Value) -> Self {
        Self::Value(value.into())
    }
}
