//! List command report data structures.

use super::output::{Output, Report};

/// Report data from the list operation.
#[derive(Debug)]
pub struct ListReport {
    pub entries: Vec<ListEntry>,
}

/// One definition in the list.
#[derive(Debug)]
pub struct ListEntry {
    pub name: String,
    pub fields: usize,
    pub variants: usize,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("Definitions ({})", self.entries.len()));
        for (i, entry) in self.entries.iter().enumerate() {
            let mut counts = vec![plural(entry.fields, "field")];
            if entry.variants > 0 {
                counts.push(plural(entry.variants, "variant"));
            }
            out.numbered_item(i + 1, &format!("{} ({})", entry.name, counts.join(", ")));
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    #[test]
    fn test_render_list() {
        let report = ListReport {
            entries: vec![
                ListEntry {
                    name: "DropRoleOptions".into(),
                    fields: 4,
                    variants: 0,
                },
                ListEntry {
                    name: "SetRole".into(),
                    fields: 1,
                    variants: 1,
                },
            ],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "# Definitions (2)",
                "  1. DropRoleOptions (4 fields)",
                "  2. SetRole (1 field, 1 variant)",
            ]
        );
    }
}
