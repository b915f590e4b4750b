//! Field options.
//!
//! An option is a mutation applied to a [`FieldBuilder`] while it is being
//! added to a [`StructBuilder`]. Options never fail: tag options append, kind
//! options overwrite, and the last kind applied wins.

use std::fmt;

use crate::{FieldBuilder, Kind, StructBuilder, TagKey};

type ApplyFn = dyn Fn(&StructBuilder, &mut FieldBuilder);

/// A named mutation of a field under construction.
///
/// The owning struct builder is passed along for context.
pub struct FieldOption(Box<ApplyFn>);

impl FieldOption {
    /// Wrap an arbitrary mutation.
    pub fn new(f: impl Fn(&StructBuilder, &mut FieldBuilder) + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Apply this option to `field`.
    pub fn apply(&self, owner: &StructBuilder, field: &mut FieldBuilder) {
        (self.0)(owner, field)
    }
}

impl fmt::Debug for FieldOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldOption(..)")
    }
}

/// Append `value` to the tag named `key`.
pub fn with_tag(key: impl Into<TagKey>, value: impl Into<String>) -> FieldOption {
    let key = key.into();
    let value = value.into();
    FieldOption::new(move |_, field| field.tags.push(key.clone(), value.clone()))
}

/// Append literal SQL text to the `sql` tag.
pub fn with_sql(sql: impl Into<String>) -> FieldOption {
    with_tag(TagKey::Sql, sql)
}

/// Replace the field's kind.
pub fn with_type(kind: impl Into<Kind>) -> FieldOption {
    let kind = kind.into();
    FieldOption::new(move |_, field| field.kind = kind.clone())
}

/// Replace the field's kind with `*bool`.
pub fn with_type_bool_ptr() -> FieldOption {
    with_type(Kind::OptionalBool)
}

/// Mark the field's value as rendered inside single quotes.
pub fn single_quoted() -> FieldOption {
    with_tag(TagKey::Dll, "single_quotes")
}
