//! Core operations.
//!
//! This module contains the business logic for ddlgen commands,
//! separated from CLI argument parsing and output rendering.

use std::path::Path;

use ddlgen_model::{Struct, VariantOrigin};
use ddlgen_render::{Config, GeneratedFile};
use eyre::{Result, bail};

use crate::reports::{FieldInfo, GenerateReport, InspectReport, ListEntry, ListReport};

/// Find a definition by name.
pub fn find<'a>(structs: &'a [Struct], name: &str) -> Result<&'a Struct> {
    match structs.iter().find(|s| s.name == name) {
        Some(s) => Ok(s),
        None => {
            let available: Vec<_> = structs.iter().map(|s| s.name.as_str()).collect();
            bail!(
                "unknown definition '{}' (available: {})",
                name,
                available.join(", ")
            )
        }
    }
}

/// Summarize all definitions.
pub fn list(structs: &[Struct]) -> ListReport {
    ListReport {
        entries: structs
            .iter()
            .map(|s| ListEntry {
                name: s.name.clone(),
                fields: s.fields.len(),
                variants: s.variants.len(),
            })
            .collect(),
    }
}

/// Describe one definition.
pub fn inspect(item: &Struct) -> InspectReport {
    InspectReport {
        name: item.name.clone(),
        fields: item
            .fields
            .iter()
            .map(|f| FieldInfo {
                name: f.name.clone(),
                kind: if f.kind.is_unset() {
                    "<unset>".to_string()
                } else {
                    f.kind.to_string()
                },
                tags: f.tags.clone(),
            })
            .collect(),
        variants: item
            .variants
            .iter()
            .map(|v| {
                let origin = match v.origin {
                    VariantOrigin::Grouped => "grouped",
                    VariantOrigin::Detached => "detached",
                };
                let alternatives: Vec<_> = v.alternatives.iter().map(|a| a.label()).collect();
                format!("{}: {}", origin, alternatives.join(" | "))
            })
            .collect(),
        duplicates: item
            .duplicate_field_names()
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

/// Render `structs` and write them to `path`.
pub fn generate_file(
    config: &Config,
    path: &Path,
    structs: &[Struct],
) -> ddlgen_render::Result<GenerateReport> {
    let renderer = config.renderer()?;
    let file = GeneratedFile::new(path, renderer.render(structs)?);
    let result = file.write()?;

    Ok(GenerateReport {
        path: file.path().to_path_buf(),
        package: renderer.package().to_string(),
        structs: structs.iter().map(|s| s.name.clone()).collect(),
        result,
    })
}
