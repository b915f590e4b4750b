//! Template rendering for ddlgen struct definitions.
//!
//! This crate turns frozen [`Struct`](ddlgen_model::Struct)s into source text:
//!
//! - [`TemplateSet`] - The per-struct and whole-file Liquid templates
//! - [`Renderer`] - Renders structs and wraps them into a file
//! - [`Config`] - Optional `ddlgen.toml` settings
//! - [`GeneratedFile`] - Writing rendered output to disk
//!
//! Template and config failures are reported as [`Error`]s carrying the
//! offending path.

mod config;
mod error;
mod file;
mod renderer;
mod templates;

pub use config::Config;
pub use error::{Error, Result};
pub use file::{GeneratedFile, WriteResult};
pub use renderer::Renderer;
pub use templates::{FILE_TEMPLATE, STRUCT_TEMPLATE, TemplateSet};
