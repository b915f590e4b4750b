//! Frozen, render-only model.

use std::collections::HashSet;

use serde::Serialize;

use crate::Kind;

/// A frozen struct ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Struct {
    /// Struct name.
    pub name: String,
    /// Fields in the order they were added.
    pub fields: Vec<Field>,
    /// Mutually exclusive field sets declared on the struct.
    pub variants: Vec<Variant>,
}

impl Struct {
    /// Look up a field by name. Returns the first match.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Field names that occur more than once.
    pub fn duplicate_field_names(&self) -> Vec<&str> {
        repeated(self.field_names())
    }
}

/// Names that occur more than once, each reported once in order of first
/// repetition.
pub(crate) fn repeated<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    names
        .into_iter()
        .filter(|name| !seen.insert(*name) && reported.insert(*name))
        .collect()
}

/// A frozen field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field kind.
    pub kind: Kind,
    /// Serialized tag string, backticks included.
    pub tags: String,
}

/// A set of alternatives of which exactly one is meant to be populated.
///
/// Variants annotate a struct; they never add or remove entries in
/// [`Struct::fields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// How the alternatives relate to the struct's field list.
    pub origin: VariantOrigin,
    /// The alternatives in declaration order.
    pub alternatives: Vec<Alternative>,
}

/// Where the fields of a [`Variant`] live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantOrigin {
    /// The alternatives were merged into the struct's field list.
    Grouped,
    /// The alternatives exist only in the annotation.
    Detached,
}

/// One alternative of a [`Variant`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternative {
    pub fields: Vec<Field>,
}

impl Alternative {
    /// Names of the fields in this alternative, joined by `, `.
    pub fn label(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
