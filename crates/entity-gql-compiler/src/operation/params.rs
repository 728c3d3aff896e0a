use indexmap::IndexMap;

use entity_gql_core::Value;

use crate::Result;

/// Operation parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum Parameters {
    /// Pre-formed parameter text, placed between the parentheses verbatim.
    Raw(String),
    /// `key: value` entries; values are encoded as JSON literals.
    Map(IndexMap<String, Value>),
}

impl Default for Parameters {
    fn default() -> Self {
        Self::Map(IndexMap::new())
    }
}

impl Parameters {
    /// Interpret a structured value as parameters.
    ///
    /// Objects map entry by entry, lists by element index, strings are raw
    /// text. Anything else carries no parameters.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Map(map),
            Value::List(items) => Self::Map(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| (i.to_string(), item))
                    .collect(),
            ),
            Value::String(text) => Self::Raw(text),
            Value::Null | Value::Bool(_) | Value::Number(_) => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Raw(_) => false,
            Self::Map(map) => map.is_empty(),
        }
    }

    /// The parenthesized segment after the operation name, or `""` if there
    /// are no entries.
    pub fn segment(&self) -> Result<String> {
        if self.is_empty() {
            return Ok(String::new());
        }

        let entries = match self {
            Self::Raw(text) => vec![text.clone()],
            Self::Map(map) => map
                .iter()
                .map(|(key, value)| -> Result<String> {
                    Ok(format!("{key}: {}", value.to_json_literal()?))
                })
                .collect::<Result<Vec<_>>>()?,
        };

        Ok(format!("({})", entries.join(", ")))
    }
}

impl From<Value> for Parameters {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<IndexMap<String, Value>> for Parameters {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self::Map(map)
    }
}
