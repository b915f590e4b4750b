//! Fluent builder and frozen model for DDL command structs.
//!
//! A [`StructBuilder`] accumulates an ordered list of [`FieldBuilder`]s through
//! chained calls (`static_`, `keyword`, `identifier`, ...). Each field carries a
//! [`Kind`] and a multi-valued [`Tags`] map that [`FieldOption`]s mutate while the
//! field is being added. [`StructBuilder::build`] freezes everything into a
//! [`Struct`], the render-only projection consumed by template renderers.
//!
//! # Module Organization
//!
//! - [`Category`] - The construction family stamped on every primitive field
//! - [`Kind`], [`Tags`], [`TagKey`] - Field type and metadata model
//! - [`FieldOption`] - Composable field mutations
//! - [`StructBuilder`], [`FieldBuilder`] - The mutable builders
//! - [`Struct`], [`Field`], [`Variant`] - The frozen model
//!
//! # Example
//!
//! ```
//! use ddlgen_model::{StructBuilder, field_group, single_quoted};
//!
//! let set_role = StructBuilder::new("SetRole")
//!     .one_of_grouped([
//!         &field_group().static_("comment", []),
//!         &field_group().static_("tag", []),
//!     ])
//!     .build();
//!
//! let alter = StructBuilder::new("AlterRoleOptions")
//!     .alter([])
//!     .static_("role", [])
//!     .if_exists([single_quoted()])
//!     .account_object_identifier([])
//!     .build();
//!
//! assert_eq!(set_role.fields.len(), 2);
//! assert_eq!(alter.fields[2].tags, "`dll:\"keyword,single_quotes,IF EXISTS\"`");
//! ```

mod category;
mod field;
mod kind;
mod model;
mod option;
mod structure;
mod tags;

pub use category::Category;
pub use field::FieldBuilder;
pub use kind::Kind;
pub use model::{Alternative, Field, Struct, Variant, VariantOrigin};
pub use option::{
    FieldOption, single_quoted, with_sql, with_tag, with_type, with_type_bool_ptr,
};
pub use structure::{StructBuilder, field_group};
pub use tags::{TagKey, Tags};
