//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod inspect;
mod list;
mod output;

pub use generate::GenerateReport;
pub use inspect::{FieldInfo, InspectReport};
pub use list::{ListEntry, ListReport};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub(crate) use output::testing;
