use gql_inflector::pascal;
use inference_engine::GraphQLOptions;
use service_ir::TypedValue;
use std::{borrow::Cow, fmt};

/// A type reference in a field or argument, e.g. `String`, `[Order!]!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName<'a> {
    name: Cow<'a, str>,
    is_array: bool,
    is_required: bool,
}

impl<'a> TypeName<'a> {
    /// A nullable single value.
    pub fn optional(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name: name.into(),
            is_array: false,
            is_required: false,
        }
    }

    /// A non-null single value, rendered with an exclamation mark.
    pub fn required(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            is_required: true,
            ..Self::optional(name)
        }
    }

    /// The GraphQL type of a property or parameter. Keys are always `ID`.
    pub fn from_typed_value(value: &'a TypedValue, is_id: bool, options: &'a GraphQLOptions) -> Self {
        let name = if is_id {
            Cow::Borrowed("ID")
        } else {
            scalar_name(value, options)
        };

        Self {
            name,
            is_array: value.is_array,
            is_required: value.is_required,
        }
    }
}

impl fmt::Display for TypeName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_array {
            write!(f, "[{}!]", self.name)?;
        } else {
            f.write_str(&self.name)?;
        }

        if self.is_required {
            f.write_str("!")?;
        }

        Ok(())
    }
}

/// The bare name of the GraphQL type of a value: the configured or builtin
/// scalar for primitives, the pascal cased type name otherwise.
pub fn scalar_name<'a>(value: &'a TypedValue, options: &'a GraphQLOptions) -> Cow<'a, str> {
    if value.is_primitive {
        if let Some(name) = options.type_override(&value.type_name) {
            return Cow::Borrowed(name);
        }

        let builtin = match value.type_name.as_str() {
            "boolean" => Some("Boolean"),
            "double" | "float" | "number" => Some("Float"),
            "integer" | "long" => Some("Int"),
            "date" | "date-time" | "string" | "null" | "untyped" => Some("String"),
            _ => None,
        };

        if let Some(name) = builtin {
            return Cow::Borrowed(name);
        }
    }

    Cow::Owned(pascal(&value.type_name))
}
