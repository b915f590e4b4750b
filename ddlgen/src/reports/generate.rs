//! Generate command report data structures.

use std::path::PathBuf;

use ddlgen_render::WriteResult;

use super::output::{Output, Report};

/// Report data from writing generated code to a file.
#[derive(Debug)]
pub struct GenerateReport {
    /// Output file.
    pub path: PathBuf,
    /// Package name used.
    pub package: String,
    /// Rendered definitions, in order.
    pub structs: Vec<String>,
    /// Whether the file changed.
    pub result: WriteResult,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let status = match self.result {
            WriteResult::Written => "written",
            WriteResult::Unchanged => "unchanged",
        };
        out.key_value(&self.path.display().to_string(), status);
        out.key_value_indented("package", &self.package);
        out.section(&format!("  Structs ({})", self.structs.len()));
        for name in &self.structs {
            out.list_item(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    #[test]
    fn test_render_generate() {
        let report = GenerateReport {
            path: PathBuf::from("gen/roles.go"),
            package: "sdk".into(),
            structs: vec!["CreateRoleOptions".into(), "DropRoleOptions".into()],
            result: WriteResult::Unchanged,
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "gen/roles.go: unchanged",
                "  package: sdk",
                "  Structs (2):",
                "  - CreateRoleOptions",
                "  - DropRoleOptions",
            ]
        );
    }
}
