mod enum_type;
mod field;
mod object_type;

pub use enum_type::EnumType;
pub use field::{Argument, Field};
pub use object_type::ObjectType;

use std::fmt;

/// A GraphQL schema document. Definitions are rendered in the order they
/// were pushed, separated by an empty line.
#[derive(Debug, Default)]
pub struct Document<'a> {
    definitions: Vec<Definition<'a>>,
}

#[derive(Debug)]
enum Definition<'a> {
    Object(ObjectType<'a>),
    Enum(EnumType<'a>),
}

impl<'a> Document<'a> {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object type definition.
    pub fn push_object(&mut self, object: ObjectType<'a>) {
        self.definitions.push(Definition::Object(object));
    }

    /// Add an enum definition.
    pub fn push_enum(&mut self, enm: EnumType<'a>) {
        self.definitions.push(Definition::Enum(enm));
    }
}

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, definition) in self.definitions.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }

            match definition {
                Definition::Object(object) => object.fmt(f)?,
                Definition::Enum(enm) => enm.fmt(f)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeName;
    use expect_test::expect;

    #[test]
    fn definitions_are_separated_by_an_empty_line() {
        let mut document = Document::new();

        let mut query = ObjectType::new("Query");
        query.push_field(Field::new("users", TypeName::required("UserConnection")));
        document.push_object(query);

        let mut status = EnumType::new("UserStatus");
        status.push_value("active");
        document.push_enum(status);

        expect![[r#"
            type Query {
              users: UserConnection!
            }

            enum UserStatus {
              ACTIVE
            }
        "#]]
        .assert_eq(&document.to_string());
    }
}
