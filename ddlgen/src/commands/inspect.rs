use clap::Args;
use eyre::{Result, WrapErr};

use crate::{
    definitions, ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InspectCommand {
    /// Definition name, e.g. AlterRoleOptions
    pub name: String,

    /// Print the frozen model as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let structs = definitions::all();
        let item = ops::find(&structs, &self.name)?;

        if self.json {
            let json = serde_json::to_string_pretty(item).wrap_err("Failed to serialize model")?;
            println!("{}", json);
        } else {
            ops::inspect(item).render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
