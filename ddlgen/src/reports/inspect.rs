//! Inspect command report data structures.

use super::output::{Output, Report};

/// Report data describing one definition.
#[derive(Debug)]
pub struct InspectReport {
    pub name: String,
    pub fields: Vec<FieldInfo>,
    /// One line per variant, e.g. `grouped: a | b, c`.
    pub variants: Vec<String>,
    /// Field names used more than once.
    pub duplicates: Vec<String>,
}

/// A frozen field as shown to the user.
#[derive(Debug)]
pub struct FieldInfo {
    pub name: String,
    pub kind: String,
    pub tags: String,
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&self.name);
        out.newline();

        out.section(&format!("Fields ({})", self.fields.len()));
        for field in &self.fields {
            out.key_value_indented(&field.name, &format!("{} {}", field.kind, field.tags));
        }

        if !self.variants.is_empty() {
            out.newline();
            out.section("One of");
            for variant in &self.variants {
                out.list_item(variant);
            }
        }

        for name in &self.duplicates {
            out.warning(&format!("field '{}' is declared more than once", name));
        }
    }
}
