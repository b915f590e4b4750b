//! In-progress field descriptors.

use crate::{Category, Field, FieldOption, Kind, StructBuilder, TagKey, Tags};

/// A field under construction.
///
/// Options mutate the public fields directly; nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBuilder {
    /// Field name.
    pub name: String,
    /// Field kind. Starts out as [`Kind::Unset`].
    pub kind: Kind,
    /// Accumulated tags.
    pub tags: Tags,
}

impl FieldBuilder {
    /// Create a field with no kind and no tags.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: Kind::Unset,
            tags: Tags::new(),
        }
    }

    /// Create a field stamped with its construction category.
    pub fn with_category(category: Category, name: impl Into<String>) -> Self {
        let mut field = Self::new(name);
        field.tags.push(TagKey::Dll, category.as_str());
        field
    }

    /// Apply options left to right.
    pub fn apply(
        &mut self,
        owner: &StructBuilder,
        options: impl IntoIterator<Item = FieldOption>,
    ) {
        for option in options {
            option.apply(owner, self);
        }
    }

    /// Freeze into a render-only [`Field`].
    pub fn freeze(&self) -> Field {
        Field {
            name: self.name.clone(),
            kind: self.kind.clone(),
            tags: self.tags.serialize(),
        }
    }
}
