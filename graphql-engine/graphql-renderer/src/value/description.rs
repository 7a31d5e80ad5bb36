use std::{borrow::Cow, fmt};

/// A block string on top of a definition or a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description<'a> {
    lines: Vec<Cow<'a, str>>,
    indent: &'static str,
}

impl<'a> Description<'a> {
    /// A description from its lines.
    pub fn new(lines: impl IntoIterator<Item = impl Into<Cow<'a, str>>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            indent: "",
        }
    }

    /// Render the description inside a block.
    pub fn indented(mut self) -> Self {
        self.indent = "  ";
        self
    }
}

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\"\"\"", self.indent)?;

        for line in self.lines.iter() {
            writeln!(f, "{}{line}", self.indent)?;
        }

        writeln!(f, "{}\"\"\"", self.indent)
    }
}
