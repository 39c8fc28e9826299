//! Output writer with indentation tracking

const INDENT: &str = "    ";

/// Builds line-oriented text with nested indentation.
#[derive(Debug)]
pub struct IndentWriter {
    output: String,
    indent_level: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl Default for IndentWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.output.push_str(INDENT);
            }
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }
}
