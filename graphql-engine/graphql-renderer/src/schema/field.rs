use crate::{Description, TypeName};
use std::{borrow::Cow, fmt};

/// An argument of a field, `first: Int`.
#[derive(Debug)]
pub struct Argument<'a> {
    name: Cow<'a, str>,
    r#type: TypeName<'a>,
}

impl<'a> Argument<'a> {
    /// A new argument.
    pub fn new(name: impl Into<Cow<'a, str>>, r#type: TypeName<'a>) -> Self {
        Self {
            name: name.into(),
            r#type,
        }
    }
}

impl fmt::Display for Argument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.r#type)
    }
}

/// A field of an object type.
#[derive(Debug)]
pub struct Field<'a> {
    name: Cow<'a, str>,
    arguments: Vec<Argument<'a>>,
    r#type: TypeName<'a>,
    description: Option<Description<'a>>,
}

impl<'a> Field<'a> {
    /// A new field without arguments.
    ///
    /// ```ignore
    /// type Order {
    ///   total: Float
    /// //       ^^^^^ type
    /// //^^^^^ name
    /// }
    /// ```
    pub fn new(name: impl Into<Cow<'a, str>>, r#type: TypeName<'a>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            r#type,
            description: None,
        }
    }

    /// Add an argument. Fields with no arguments render without
    /// parentheses.
    pub fn push_argument(&mut self, argument: Argument<'a>) {
        self.arguments.push(argument);
    }

    /// Documentation of the field.
    pub fn description(&mut self, description: Description<'a>) {
        self.description = Some(description.indented());
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref description) = self.description {
            description.fmt(f)?;
        }

        write!(f, "  {}", self.name)?;

        if !self.arguments.is_empty() {
            f.write_str("(")?;

            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }

                argument.fmt(f)?;
            }

            f.write_str(")")?;
        }

        writeln!(f, ": {}", self.r#type)
    }
}
