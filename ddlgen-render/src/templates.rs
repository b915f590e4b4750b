//! Liquid template loading.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// File name of the whole-file template inside a template directory.
pub const FILE_TEMPLATE: &str = "file.go.liquid";

/// File name of the per-struct template inside a template directory.
pub const STRUCT_TEMPLATE: &str = "struct.go.liquid";

const BUILTIN_FILE: &str = include_str!("../templates/file.go.liquid");
const BUILTIN_STRUCT: &str = include_str!("../templates/struct.go.liquid");

/// A parsed template and the path it was loaded from.
pub(crate) struct Loaded {
    pub(crate) path: PathBuf,
    pub(crate) template: liquid::Template,
}

/// The two templates a [`Renderer`](crate::Renderer) needs.
///
/// The struct template sees one struct (`name`, `fields`, `variants`). The
/// file template sees `package`, `body` (all rendered structs) and `structs`
/// (their names).
pub struct TemplateSet {
    pub(crate) file: Loaded,
    pub(crate) structure: Loaded,
}

impl TemplateSet {
    /// Templates embedded in this crate.
    pub fn builtin() -> Result<Self> {
        let dir = Path::new("<builtin>");
        Self::from_sources(
            (dir.join(FILE_TEMPLATE), BUILTIN_FILE),
            (dir.join(STRUCT_TEMPLATE), BUILTIN_STRUCT),
        )
    }

    /// Read [`FILE_TEMPLATE`] and [`STRUCT_TEMPLATE`] from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        debug!(dir = %dir.display(), "loading templates");

        let file_path = dir.join(FILE_TEMPLATE);
        let file_src = read(&file_path)?;
        let struct_path = dir.join(STRUCT_TEMPLATE);
        let struct_src = read(&struct_path)?;

        Self::from_sources(
            (file_path, file_src.as_str()),
            (struct_path, struct_src.as_str()),
        )
    }

    /// Parse templates from in-memory sources. The paths only label errors.
    pub fn from_sources(
        file: (impl Into<PathBuf>, &str),
        structure: (impl Into<PathBuf>, &str),
    ) -> Result<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| {
                Box::new(Error::TemplateParse {
                    path: PathBuf::from("<parser>"),
                    message: e.to_string(),
                })
            })?;

        Ok(Self {
            file: parse(&parser, file.0.into(), file.1)?,
            structure: parse(&parser, structure.0.into(), structure.1)?,
        })
    }

    /// Path the file template was loaded from.
    pub fn file_path(&self) -> &Path {
        &self.file.path
    }

    /// Path the struct template was loaded from.
    pub fn struct_path(&self) -> &Path {
        &self.structure.path
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        Box::new(Error::TemplateRead {
            path: path.to_path_buf(),
            source,
        })
    })
}

fn parse(parser: &liquid::Parser, path: PathBuf, src: &str) -> Result<Loaded> {
    match parser.parse(src) {
        Ok(template) => Ok(Loaded { path, template }),
        Err(e) => Err(Box::new(Error::TemplateParse {
            path,
            message: e.to_string(),
        })),
    }
}
