use crate::Description;
use gql_inflector::{constant, pascal};
use std::{borrow::Cow, fmt};

/// An enum definition. Values are rendered in constant case.
#[derive(Debug)]
pub struct EnumType<'a> {
    name: Cow<'a, str>,
    description: Option<Description<'a>>,
    values: Vec<String>,
}

impl<'a> EnumType<'a> {
    /// A new enum definition without values.
    ///
    /// ```ignore
    /// enum UserStatus {
    /// //   ^^^^^^^^^^ name
    /// }
    /// ```
    pub fn new(name: &'a str) -> Self {
        Self {
            name: Cow::Owned(pascal(name)),
            description: None,
            values: Vec::new(),
        }
    }

    /// Documentation of the enum.
    pub fn description(&mut self, description: Description<'a>) {
        self.description = Some(description);
    }

    /// Add a value, `in-stock` renders as `IN_STOCK`.
    pub fn push_value(&mut self, value: &str) {
        self.values.push(constant(value));
    }
}

impl fmt::Display for EnumType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref description) = self.description {
            description.fmt(f)?;
        }

        writeln!(f, "enum {} {{", self.name)?;

        for value in self.values.iter() {
            writeln!(f, "  {value}")?;
        }

        f.write_str("}\n")
    }
}
