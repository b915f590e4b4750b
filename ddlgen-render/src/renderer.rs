//! Struct and file rendering.

use std::{io::Write, path::Path};

use ddlgen_model::Struct;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{Error, Result, TemplateSet, templates::Loaded};

/// Renders frozen structs through a [`TemplateSet`].
pub struct Renderer {
    templates: TemplateSet,
    package: String,
}

#[derive(Serialize)]
struct FileContext<'a> {
    package: &'a str,
    body: &'a str,
    structs: Vec<&'a str>,
}

impl Renderer {
    /// Create a renderer emitting into `package`.
    pub fn new(templates: TemplateSet, package: impl Into<String>) -> Self {
        Self {
            templates,
            package: package.into(),
        }
    }

    /// Renderer with the builtin templates and package `sdk`.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(TemplateSet::builtin()?, "sdk"))
    }

    /// Package name handed to the file template.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Render a single struct through the struct template.
    pub fn render_struct(&self, item: &Struct) -> Result<String> {
        debug!(name = %item.name, fields = item.fields.len(), "rendering struct");
        for name in item.duplicate_field_names() {
            warn!(owner = %item.name, field = name, "duplicate field name");
        }
        render(&self.templates.structure, item)
    }

    /// Render every struct and wrap the result with the file template.
    ///
    /// Structs are separated by one blank line.
    pub fn render(&self, structs: &[Struct]) -> Result<String> {
        let rendered = structs
            .iter()
            .map(|s| self.render_struct(s))
            .collect::<Result<Vec<_>>>()?;
        let body = rendered
            .iter()
            .map(|s| s.trim_end())
            .collect::<Vec<_>>()
            .join("\n\n");

        let context = FileContext {
            package: &self.package,
            body: &body,
            structs: structs.iter().map(|s| s.name.as_str()).collect(),
        };
        debug!(structs = structs.len(), package = %self.package, "rendering file");
        render(&self.templates.file, &context)
    }

    /// Render into `out`. `target` names the destination in write errors.
    pub fn render_to(
        &self,
        out: &mut impl Write,
        target: &Path,
        structs: &[Struct],
    ) -> Result<()> {
        let content = self.render(structs)?;
        out.write_all(content.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|source| {
                Box::new(Error::Write {
                    path: target.to_path_buf(),
                    source,
                })
            })
    }
}

fn render(loaded: &Loaded, context: &impl Serialize) -> Result<String> {
    let render_error = |e: liquid::Error| {
        Box::new(Error::TemplateRender {
            path: loaded.path.clone(),
            message: e.to_string(),
        })
    };
    let globals = liquid::to_object(context).map_err(render_error)?;
    loaded.template.render(&globals).map_err(render_error)
}

#[cfg(test)]
mod tests {
    use ddlgen_model::{StructBuilder, field_group, single_quoted};

    use super::*;

    #[test]
    fn test_render_struct_builtin() {
        let renderer = Renderer::builtin().unwrap();
        let s = StructBuilder::new("DropRoleOptions")
            .static_("drop", [])
            .if_exists([])
            .account_object_identifier([])
            .build();

        assert_eq!(
            renderer.render_struct(&s).unwrap(),
            "type DropRoleOptions struct {\n\
             \tdrop bool `dll:\"static\"`\n\
             \tIfExists *bool `dll:\"keyword,IF EXISTS\"`\n\
             \tname AccountObjectIdentifier `dll:\"identifier\"`\n\
             }\n"
        );
    }

    #[test]
    fn test_render_struct_with_variant() {
        let renderer = Renderer::builtin().unwrap();
        let s = StructBuilder::new("SetRole")
            .one_of_grouped([
                &field_group().static_("hey", []).static_("wassup", []),
                &field_group().static_("bye", []),
            ])
            .build();

        assert_eq!(
            renderer.render_struct(&s).unwrap(),
            "type SetRole struct {\n\
             \t// one of: hey, wassup | bye\n\
             \they bool `dll:\"static\"`\n\
             \twassup bool `dll:\"static\"`\n\
             \tbye bool `dll:\"static\"`\n\
             }\n"
        );
    }

    #[test]
    fn test_render_empty_struct() {
        let renderer = Renderer::builtin().unwrap();
        let s = StructBuilder::new("UnsetRole").build();
        assert_eq!(
            renderer.render_struct(&s).unwrap(),
            "type UnsetRole struct {\n}\n"
        );
    }

    #[test]
    fn test_render_file_wraps_structs() {
        let renderer = Renderer::new(TemplateSet::builtin().unwrap(), "roles");
        let structs = [
            StructBuilder::new("A").create([]).build(),
            StructBuilder::new("B")
                .identifier("comment", [single_quoted()])
                .build(),
        ];

        let out = renderer.render(&structs).unwrap();
        assert_eq!(
            out,
            "// Code generated by ddlgen. DO NOT EDIT.\n\
             \n\
             package roles\n\
             \n\
             type A struct {\n\
             \tcreate bool `dll:\"static\"`\n\
             }\n\
             \n\
             type B struct {\n\
             \tcomment  `dll:\"identifier,single_quotes\"`\n\
             }\n"
        );
    }

    #[test]
    fn test_render_to_writer() {
        let renderer = Renderer::builtin().unwrap();
        let mut out = Vec::new();
        renderer
            .render_to(
                &mut out,
                Path::new("<buffer>"),
                &[StructBuilder::new("A").build()],
            )
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("// Code generated by ddlgen"));
        assert!(text.contains("package sdk"));
        assert!(text.ends_with("type A struct {\n}\n"));
    }

    #[test]
    fn test_render_error_names_template() {
        let templates = TemplateSet::from_sources(
            ("file.liquid", "{{ body }}"),
            ("strict.liquid", "{{ no_such_variable }}"),
        )
        .unwrap();

        let err = Renderer::new(templates, "sdk")
            .render(&[StructBuilder::new("A").build()])
            .unwrap_err();

        assert!(matches!(*err, Error::TemplateRender { .. }));
        assert_eq!(err.path(), Some(Path::new("strict.liquid")));
    }

    #[test]
    fn test_write_error_names_target() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = Renderer::builtin()
            .unwrap()
            .render_to(&mut Closed, Path::new("<stdout>"), &[])
            .unwrap_err();

        assert!(matches!(*err, Error::Write { .. }));
        assert_eq!(err.path(), Some(Path::new("<stdout>")));
    }
}
