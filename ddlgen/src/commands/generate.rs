use std::path::{Path, PathBuf};

use clap::Args;
use ddlgen_render::Config;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    definitions, ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to a config file [default: ./ddlgen.toml, if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding file.go.liquid and struct.go.liquid
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Package name for the generated file
    #[arg(short, long)]
    pub package: Option<String>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.resolve_config(self.load_config().unwrap_or_exit());
        let structs = definitions::all();

        match &config.output {
            Some(path) => {
                let report = ops::generate_file(&config, path, &structs).unwrap_or_exit();
                report.render(&mut TerminalOutput::new());
            }
            None => {
                let renderer = config.renderer().unwrap_or_exit();
                renderer
                    .render_to(&mut std::io::stdout().lock(), Path::new("<stdout>"), &structs)
                    .unwrap_or_exit();
            }
        }

        Ok(())
    }

    /// An explicit `--config` must exist; the implicit one may be absent.
    fn load_config(&self) -> ddlgen_render::Result<Config> {
        match &self.config {
            Some(path) => Config::open(path),
            None => Config::load_or_default(Config::FILENAME),
        }
    }

    /// Command-line flags take precedence over ddlgen.toml.
    fn resolve_config(&self, mut config: Config) -> Config {
        if let Some(templates) = &self.templates {
            config.templates = Some(templates.clone());
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if let Some(package) = &self.package {
            config.package = package.clone();
        }
        config
    }
}
