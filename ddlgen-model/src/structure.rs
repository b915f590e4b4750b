//! Struct builder and its fluent vocabulary.

use crate::{
    Alternative, Category, FieldBuilder, FieldOption, Kind, Struct, TagKey, Variant,
    VariantOrigin, with_tag, with_type, with_type_bool_ptr,
};

/// Mutable accumulator for a struct definition.
///
/// Every mutating call consumes the builder and hands it back, so definitions
/// read as one chain:
///
/// ```
/// use ddlgen_model::StructBuilder;
///
/// let drop = StructBuilder::new("DropRoleOptions")
///     .static_("drop", [])
///     .static_("role", [])
///     .if_exists([])
///     .account_object_identifier([])
///     .build();
///
/// let names: Vec<_> = drop.field_names().collect();
/// assert_eq!(names, ["drop", "role", "IfExists", "name"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructBuilder {
    name: String,
    fields: Vec<FieldBuilder>,
    variants: Vec<PendingVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingVariant {
    origin: VariantOrigin,
    alternatives: Vec<Vec<FieldBuilder>>,
}

/// Create an anonymous builder that only holds a reusable group of fields.
///
/// Groups are merged into real structs with [`StructBuilder::one_of_grouped`].
pub fn field_group() -> StructBuilder {
    StructBuilder::default()
}

impl StructBuilder {
    /// Create a builder for the struct named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Struct name. Empty for field groups.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields added so far, in order.
    pub fn fields(&self) -> &[FieldBuilder] {
        &self.fields
    }

    /// Number of fields added so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of variant annotations recorded so far.
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Field names that occur more than once, each reported once in order of
    /// first repetition.
    ///
    /// Duplicates are allowed; this only exists so callers can warn about them.
    pub fn duplicate_field_names(&self) -> Vec<&str> {
        crate::model::repeated(self.fields.iter().map(|f| f.name.as_str()))
    }

    // =========================================================================
    // Primitive fields
    // =========================================================================

    /// Add a field stamped with `category`, then apply `options` in order.
    pub fn field(
        mut self,
        category: Category,
        name: impl Into<String>,
        options: impl IntoIterator<Item = FieldOption>,
    ) -> Self {
        let mut field = FieldBuilder::with_category(category, name);
        field.apply(&self, options);
        self.fields.push(field);
        self
    }

    /// Add a static `bool` flag.
    ///
    /// The `bool` kind is applied after `options`, so it always wins.
    pub fn static_(
        self,
        name: impl Into<String>,
        options: impl IntoIterator<Item = FieldOption>,
    ) -> Self {
        let options = options.into_iter().chain([with_type(Kind::Bool)]);
        self.field(Category::Static, name, options)
    }

    /// Add the `create` static flag.
    pub fn create(self, options: impl IntoIterator<Item = FieldOption>) -> Self {
        self.static_("create", options)
    }

    /// Add the `alter` static flag.
    pub fn alter(self, options: impl IntoIterator<Item = FieldOption>) -> Self {
        self.static_("alter", options)
    }

    /// Add a keyword field.
    pub fn keyword(
        self,
        name: impl Into<String>,
        options: impl IntoIterator<Item = FieldOption>,
    ) -> Self {
        self.field(Category::Keyword, name, options)
    }

    /// Add the optional `OR REPLACE` keyword.
    pub fn or_replace(self, options: impl IntoIterator<Item = FieldOption>) -> Self {
        self.optional_keyword("OrReplace", "OR REPLACE", options)
    }

    /// Add the optional `IF EXISTS` keyword.
    pub fn if_exists(self, options: impl IntoIterator<Item = FieldOption>) -> Self {
        self.optional_keyword("IfExists", "IF EXISTS", options)
    }

    /// Add the optional `TRANSIENT` keyword.
    pub fn transient(self, options: impl IntoIterator<Item = FieldOption>) -> Self {
        self.optional_keyword("Transient", "TRANSIENT", options)
    }

    // Caller options run first; the `*bool` kind and the literal come last.
    fn optional_keyword(
        self,
        name: &str,
        literal: &str,
        options: impl IntoIterator<Item = FieldOption>,
    ) -> Self {
        let options = options
            .into_iter()
            .chain([with_type_bool_ptr(), with_tag(TagKey::Dll, literal)]);
        self.keyword(name, options)
    }

    /// Add an identifier field.
    pub fn identifier(
        self,
        name: impl Into<String>,
        options: impl IntoIterator<Item = FieldOption>,
    ) -> Self {
        self.field(Category::Identifier, name, options)
    }

    /// Add a `name` field of kind `AccountObjectIdentifier`.
    pub fn account_object_identifier(
        self,
        options: impl IntoIterator<Item = FieldOption>,
    ) -> Self {
        let options = options
            .into_iter()
            .chain([with_type("AccountObjectIdentifier")]);
        self.identifier("name", options)
    }

    /// Add a `name` field of kind `SchemaIdentifier`.
    pub fn schema_identifier(self, options: impl IntoIterator<Item = FieldOption>) -> Self {
        let options = options.into_iter().chain([with_type("SchemaIdentifier")]);
        self.identifier("name", options)
    }

    // =========================================================================
    // Groups and variants
    // =========================================================================

    /// Append every field of every source, in source order then field order.
    ///
    /// The sources are meant as mutually exclusive groups. The flat field list
    /// doesn't encode that, so a [`VariantOrigin::Grouped`] annotation listing
    /// each non-empty source is recorded alongside. Annotations already present
    /// on a source are carried over as well.
    pub fn one_of_grouped<'a>(
        mut self,
        sources: impl IntoIterator<Item = &'a StructBuilder>,
    ) -> Self {
        let mut alternatives = Vec::new();
        let mut inherited = Vec::new();
        for source in sources {
            self.fields.extend(source.fields.iter().cloned());
            inherited.extend(source.variants.iter().cloned());
            if !source.fields.is_empty() {
                alternatives.push(source.fields.clone());
            }
        }
        if !alternatives.is_empty() {
            self.variants.push(PendingVariant {
                origin: VariantOrigin::Grouped,
                alternatives,
            });
        }
        self.variants.extend(inherited);
        self
    }

    /// Declare mutually exclusive alternative fields.
    ///
    /// The field list is left untouched; the alternatives are only recorded as
    /// a [`VariantOrigin::Detached`] annotation.
    pub fn one_of(mut self, alternatives: impl IntoIterator<Item = FieldBuilder>) -> Self {
        let alternatives: Vec<_> = alternatives.into_iter().map(|f| vec![f]).collect();
        if !alternatives.is_empty() {
            self.variants.push(PendingVariant {
                origin: VariantOrigin::Detached,
                alternatives,
            });
        }
        self
    }

    /// Project this whole struct into a single field of kind `self.name()`.
    pub fn as_field_builder(
        &self,
        field_name: impl Into<String>,
        options: impl IntoIterator<Item = FieldOption>,
    ) -> FieldBuilder {
        let mut field = FieldBuilder::new(field_name);
        field.kind = Kind::named(self.name.as_str());
        field.apply(self, options);
        field
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Freeze the current state into a [`Struct`].
    ///
    /// The builder is left untouched, so calling this again yields an equal
    /// struct unless fields were added in between.
    pub fn build(&self) -> Struct {
        Struct {
            name: self.name.clone(),
            fields: self.fields.iter().map(FieldBuilder::freeze).collect(),
            variants: self.variants.iter().map(PendingVariant::freeze).collect(),
        }
    }
}

impl PendingVariant {
    fn freeze(&self) -> Variant {
        Variant {
            origin: self.origin,
            alternatives: self
                .alternatives
                .iter()
                .map(|fields| Alternative {
                    fields: fields.iter().map(FieldBuilder::freeze).collect(),
                })
                .collect(),
        }
    }
}
