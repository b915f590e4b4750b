//! Line-oriented sinks for command reports.

/// Where a command's report ends up.
///
/// `list`, `inspect` and `generate` only call these methods, so the same
/// report can go to the terminal or to a buffer in tests.
pub trait Output {
    /// Underlined heading, printed once per report.
    fn title(&mut self, text: &str);

    /// Heading for a group of lines, printed as `name:`.
    fn section(&mut self, name: &str);

    /// `key: value` on its own line.
    fn key_value(&mut self, key: &str, value: &str);

    /// `key: value` nested under the last section.
    fn key_value_indented(&mut self, key: &str, value: &str);

    fn numbered_item(&mut self, index: usize, text: &str);

    fn list_item(&mut self, text: &str);

    /// A problem the user should see but that does not fail the command,
    /// such as a duplicated field name.
    fn warning(&mut self, msg: &str);

    fn newline(&mut self);
}

/// Result of an operation, printable through any [`Output`].
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Writes reports to stdout, and warnings to stderr.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}", text);
        println!("{}", "=".repeat(text.chars().count()));
    }

    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        println!("  {}. {}", index, text);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn newline(&mut self) {
        println!();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Output;

    /// Collects rendered lines for assertions.
    #[derive(Default)]
    pub(crate) struct BufferOutput {
        pub lines: Vec<String>,
    }

    impl Output for BufferOutput {
        fn title(&mut self, text: &str) {
            self.lines.push(format!("# {text}"));
        }

        fn section(&mut self, name: &str) {
            self.lines.push(format!("{name}:"));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("{key}: {value}"));
        }

        fn key_value_indented(&mut self, key: &str, value: &str) {
            self.lines.push(format!("  {key}: {value}"));
        }

        fn numbered_item(&mut self, index: usize, text: &str) {
            self.lines.push(format!("  {index}. {text}"));
        }

        fn list_item(&mut self, text: &str) {
            self.lines.push(format!("  - {text}"));
        }

        fn warning(&mut self, msg: &str) {
            self.lines.push(format!("warning: {msg}"));
        }

        fn newline(&mut self) {
            self.lines.push(String::new());
        }
    }
}
