use crate::{Description, Field};
use std::{borrow::Cow, fmt};

/// An object type definition, optionally declared as a federated entity.
#[derive(Debug)]
pub struct ObjectType<'a> {
    name: Cow<'a, str>,
    description: Option<Description<'a>>,
    keys: Vec<Cow<'a, str>>,
    resolvable: bool,
    fields: Vec<Field<'a>>,
}

impl<'a> ObjectType<'a> {
    /// A new type definition. Will not be valid without adding at least one
    /// field.
    ///
    /// ```ignore
    /// type Order {
    /// //   ^^^^^ name
    /// }
    /// ```
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name: name.into(),
            description: None,
            keys: Vec::new(),
            resolvable: true,
            fields: Vec::new(),
        }
    }

    /// Documentation of the type.
    pub fn description(&mut self, description: Description<'a>) {
        self.description = Some(description);
    }

    /// Add a key field to the entity directive.
    ///
    /// ```ignore
    /// type Order @key(fields: "id") {
    /// //                       ^^ key
    /// }
    /// ```
    pub fn push_key(&mut self, key: impl Into<Cow<'a, str>>) {
        self.keys.push(key.into());
    }

    /// The entity is only referenced here and resolved by another service.
    pub fn unresolvable(&mut self) {
        self.resolvable = false;
    }

    /// Add a new field to the type.
    pub fn push_field(&mut self, field: Field<'a>) {
        self.fields.push(field);
    }
}

impl fmt::Display for ObjectType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref description) = self.description {
            description.fmt(f)?;
        }

        write!(f, "type {}", self.name)?;

        if !self.keys.is_empty() {
            f.write_str(" @key(fields: ")?;

            for (i, key) in self.keys.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }

                write!(f, "\"{key}\"")?;
            }

            if !self.resolvable {
                f.write_str(", resolvable: false")?;
            }

            f.write_str(")")?;
        }

        f.write_str(" {\n")?;

        for field in self.fields.iter() {
            field.fmt(f)?;
        }

        f.write_str("}\n")
    }
}
