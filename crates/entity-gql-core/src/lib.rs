#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for entity-gql selectors.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the selector JSON emitted by the
//!   entity-relationship model (`relationships`, `meta.gqlFields`, ...)
//! - **Model layer**: a recursive [`Selector`] node whose edges are
//!   [`Relationship`] records carrying the edge metadata and the target node
//!
//! The model is read-only input for the compiler: nothing in this crate
//! renders GraphQL text.

pub mod colors;
pub mod value;

pub use colors::Colors;
pub use value::Value;

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw selector node as found in selector JSON.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RawSelector {
    #[serde(default)]
    pub relationships: Option<Vec<RawRelationship>>,
    #[serde(default)]
    pub meta: Option<RawMeta>,
}

/// Raw relationship: edge metadata plus the nested selector shape.
///
/// Keys are kept as untyped JSON so that a non-string `keyId`/`keyValue`
/// survives parsing and is dropped during conversion instead.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRelationship {
    #[serde(default)]
    pub ngrx_entity_relationship: Option<serde_json::Value>,
    #[serde(default)]
    pub key_id: Option<serde_json::Value>,
    #[serde(default)]
    pub key_value: Option<serde_json::Value>,
    #[serde(flatten)]
    pub target: RawSelector,
}

/// Raw `meta` block of a selector node.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeta {
    #[serde(default)]
    pub gql_fields: Option<Vec<serde_json::Value>>,
}

/// Parse selector JSON into raw nodes.
pub fn parse_raw_selector(json: &str) -> Result<RawSelector, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse selector JSON straight into the model layer.
pub fn parse_selector(json: &str) -> Result<Selector, serde_json::Error> {
    parse_raw_selector(json).map(Selector::from)
}

fn string_of(value: Option<serde_json::Value>) -> Option<String> {
    match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    }
}

impl From<RawSelector> for Selector {
    fn from(raw: RawSelector) -> Self {
        let relationships = raw
            .relationships
            .unwrap_or_default()
            .into_iter()
            .map(Relationship::from)
            .collect();

        // Non-string field names cannot be rendered; drop them here.
        let fields = raw
            .meta
            .and_then(|meta| meta.gql_fields)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|field| string_of(Some(field)))
            .collect();

        Self {
            relationships,
            fields,
        }
    }
}

impl From<RawRelationship> for Relationship {
    fn from(raw: RawRelationship) -> Self {
        let tag = string_of(raw.ngrx_entity_relationship);
        Self {
            kind: RelationshipKind::from_tag(tag.as_deref()),
            key_id: string_of(raw.key_id),
            key_value: string_of(raw.key_value),
            selector: Selector::from(raw.target),
        }
    }
}

// ============================================================================
// Model Layer
// ============================================================================

/// A node of the entity-relationship selector tree.
///
/// `relationships` and `fields` are ordered; their order is the order in
/// which fields appear in compiled output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub relationships: Vec<Relationship>,
    /// Field names requested verbatim at this level (`meta.gqlFields`).
    pub fields: Vec<String>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a requested field name.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    /// Append several requested field names.
    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(names.into_iter().map(Into::into));
        self
    }

    /// Append an outgoing relationship.
    pub fn relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Depth of the deepest relationship chain below this node.
    pub fn depth(&self) -> usize {
        self.relationships
            .iter()
            .map(|r| 1 + r.selector.depth())
            .max()
            .unwrap_or(0)
    }
}

/// How a relationship relates its parent to the target entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    /// One-to-many containment (`childrenEntities`).
    ChildrenEntities,
    /// One-to-one containment (`childEntity`).
    ChildEntity,
    /// Keyed reference or join; any other tag.
    #[default]
    Associative,
}

impl RelationshipKind {
    /// Map a discriminator tag to a kind. Unknown and absent tags are associative.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("childrenEntities") => Self::ChildrenEntities,
            Some("childEntity") => Self::ChildEntity,
            _ => Self::Associative,
        }
    }

    pub fn is_containment(self) -> bool {
        !matches!(self, Self::Associative)
    }
}

/// An edge from a selector node to a related entity.
///
/// `key_id` names the identifier field, `key_value` the field under which the
/// related object(s) are exposed. Either may be missing, in which case the
/// edge cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub kind: RelationshipKind,
    pub key_id: Option<String>,
    pub key_value: Option<String>,
    /// Selection requested on the related entity.
    pub selector: Selector,
}

impl Relationship {
    pub fn new(kind: RelationshipKind, selector: Selector) -> Self {
        Self {
            kind,
            key_id: None,
            key_value: None,
            selector,
        }
    }

    pub fn children_entities(
        key_id: impl Into<String>,
        key_value: impl Into<String>,
        selector: Selector,
    ) -> Self {
        Self::new(RelationshipKind::ChildrenEntities, selector).keyed(key_id, key_value)
    }

    pub fn child_entity(
        key_id: impl Into<String>,
        key_value: impl Into<String>,
        selector: Selector,
    ) -> Self {
        Self::new(RelationshipKind::ChildEntity, selector).keyed(key_id, key_value)
    }

    pub fn associative(
        key_id: impl Into<String>,
        key_value: impl Into<String>,
        selector: Selector,
    ) -> Self {
        Self::new(RelationshipKind::Associative, selector).keyed(key_id, key_value)
    }

    /// Set both keys.
    pub fn keyed(mut self, key_id: impl Into<String>, key_value: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self.key_value = Some(key_value.into());
        self
    }

    /// Both keys, if the relationship carries them.
    pub fn keys(&self) -> Option<(&str, &str)> {
        Some((self.key_id.as_deref()?, self.key_value.as_deref()?))
    }
}
