use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for rendering operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read template '{path}'")]
    #[diagnostic(
        code(ddlgen::template_read),
        help("check the `templates` directory, or drop it to use the builtin templates")
    )]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse template '{path}'")]
    #[diagnostic(code(ddlgen::template_parse), help("{message}"))]
    TemplateParse { path: PathBuf, message: String },

    #[error("failed to render template '{path}'")]
    #[diagnostic(code(ddlgen::template_render), help("{message}"))]
    TemplateRender { path: PathBuf, message: String },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(ddlgen::config_read))]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse ddlgen.toml")]
    #[diagnostic(code(ddlgen::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(ddlgen::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn config_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Path of the file the error is about.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::TemplateRead { path, .. }
            | Error::TemplateParse { path, .. }
            | Error::TemplateRender { path, .. }
            | Error::ConfigRead { path, .. }
            | Error::Write { path, .. } => Some(path.as_path()),
            Error::ConfigParse { .. } => None,
        }
    }
}
