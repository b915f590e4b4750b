use clap::Args;
use eyre::Result;

use crate::{
    definitions, ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::list(&definitions::all());
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
