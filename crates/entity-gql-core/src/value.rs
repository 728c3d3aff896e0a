//! Closed value type for operation parameters.
//!
//! Mirrors the JSON data model. Objects keep insertion order so that encoded
//! parameter lists are stable.

use indexmap::IndexMap;

/// Largest integer magnitude a JSON number holds without precision loss.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A parameter value.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Build a number from a float.
    ///
    /// Integral floats become integers (`5.0` encodes as `5`); NaN and
    /// infinities become `Null`. Beyond 2^53 the float is kept and encodes
    /// in exponent form (`1e20`, not `100000000000000000000`).
    pub fn from_f64(v: f64) -> Self {
        if !v.is_finite() {
            return Self::Null;
        }
        if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
            return Self::Number((v as i64).into());
        }
        serde_json::Number::from_f64(v)
            .map(Self::Number)
            .unwrap_or(Self::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Encode as a JSON literal (`"a"`, `5`, `true`, `null`, `[..]`, `{..}`).
    pub fn to_json_literal(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Number(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Number(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::from_f64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Self::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(v: IndexMap<String, Value>) -> Self {
        Self::Object(v)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if n.is_f64() {
                    n.as_f64().map(Self::from_f64).unwrap_or(Self::Null)
                } else {
                    Self::Number(n)
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod value_tests;
