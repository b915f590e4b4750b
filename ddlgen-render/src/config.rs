//! `ddlgen.toml` settings.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Renderer, Result, TemplateSet};

/// Settings read from `ddlgen.toml`. Every key is optional.
///
/// ```toml
/// package = "sdk"
/// templates = "templates"
/// output = "gen/roles.go"
/// ```
///
/// Relative paths are resolved against the directory holding the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Package name written by the file template.
    pub package: String,
    /// Directory with custom templates. Builtin templates are used when unset.
    pub templates: Option<PathBuf>,
    /// Output file. Rendered text goes to stdout when unset.
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: "sdk".to_string(),
            templates: None,
            output: None,
        }
    }
}

impl Config {
    /// Conventional config file name.
    pub const FILENAME: &'static str = "ddlgen.toml";

    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let config = Self::from_str_with_filename(&content, &path.display().to_string())?;

        let base = path.parent().unwrap_or(Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Open `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config content. `filename` only labels errors.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_parse(e, content, filename))
    }

    /// The configured templates, or the builtin ones.
    pub fn templates(&self) -> Result<TemplateSet> {
        match &self.templates {
            Some(dir) => TemplateSet::load(dir),
            None => TemplateSet::builtin(),
        }
    }

    /// A renderer for this configuration.
    pub fn renderer(&self) -> Result<Renderer> {
        Ok(Renderer::new(self.templates()?, self.package.clone()))
    }

    fn relative_to(mut self, base: &Path) -> Self {
        self.templates = self.templates.map(|p| base.join(p));
        self.output = self.output.map(|p| base.join(p));
        self
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str_with_filename("", "ddlgen.toml").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.package, "sdk");
    }

    #[test]
    fn test_parse_all_keys() {
        let config = Config::from_str_with_filename(
            r#"
            package = "roles"
            templates = "tpl"
            output = "out/roles.go"
            "#,
            "ddlgen.toml",
        )
        .unwrap();

        assert_eq!(config.package, "roles");
        assert_eq!(config.templates, Some(PathBuf::from("tpl")));
        assert_eq!(config.output, Some(PathBuf::from("out/roles.go")));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_str_with_filename("pakage = \"x\"", "ddlgen.toml").unwrap_err();
        assert!(matches!(*err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_open_resolves_relative_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(Config::FILENAME);
        fs::write(&path, "templates = \"tpl\"\noutput = \"roles.go\"\n").unwrap();

        let config = Config::open(&path).unwrap();
        assert_eq!(config.templates, Some(temp.path().join("tpl")));
        assert_eq!(config.output, Some(temp.path().join("roles.go")));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_or_default(temp.path().join(Config::FILENAME)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_template_dir_fails() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            templates: Some(temp.path().join("nope")),
            ..Config::default()
        };

        let err = config.renderer().err().unwrap();
        assert!(matches!(*err, Error::TemplateRead { .. }));
    }
}
