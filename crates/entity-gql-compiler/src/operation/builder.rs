use entity_gql_core::{Selector, Value};

use super::{Assembler, Parameters, QueryRequest};
use crate::Result;
use crate::diagnostics::Policy;

/// Typed construction of a named operation, without call-shape guessing.
///
/// ```
/// use entity_gql_compiler::QueryBuilder;
/// use entity_gql_core::{Relationship, Selector, Value};
///
/// let selector = Selector::new()
///     .field("name")
///     .relationship(Relationship::associative("id", "profile", Selector::new()));
///
/// let query = QueryBuilder::new("getUser", &selector)
///     .params([("id", Value::from(5))].into_iter().collect::<Value>())
///     .build()
///     .unwrap();
/// assert_eq!(query, "{\ngetUser(id: 5) {\nid\nprofile {\n}name\n}\n}");
/// ```
#[derive(Clone, Debug)]
pub struct QueryBuilder<'a> {
    name: &'a str,
    selector: &'a Selector,
    params: Option<Parameters>,
    policy: Policy,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(name: &'a str, selector: &'a Selector) -> Self {
        Self {
            name,
            selector,
            params: None,
            policy: Policy::default(),
        }
    }

    /// Set parameters from a structured value (usually an object).
    pub fn params(mut self, params: impl Into<Value>) -> Self {
        self.params = Some(Parameters::from_value(params.into()));
        self
    }

    /// Set pre-formed parameter text, e.g. `id: $id, first: 10`.
    pub fn raw_params(mut self, params: impl Into<String>) -> Self {
        self.params = Some(Parameters::Raw(params.into()));
        self
    }

    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn request(&self) -> QueryRequest<'a> {
        match &self.params {
            Some(params) => QueryRequest::NamedWithParams {
                name: self.name,
                params: params.clone(),
                selector: self.selector,
            },
            None => QueryRequest::NamedNoParams {
                name: self.name,
                selector: self.selector,
            },
        }
    }

    pub fn build(&self) -> Result<String> {
        Assembler::new().policy(self.policy).render(&self.request())
    }
}
