//! A set of datastructures meant for rendering the inferred relationships of
//! a service as a federated GraphQL schema.
//!
//! All structs implement `std::fmt::Display` for easy usage.

#![warn(missing_docs)]

mod generator;
mod schema;
mod value;

pub use generator::{file_name, generate, render, GeneratedFile};
pub use schema::{Argument, Document, EnumType, Field, ObjectType};
pub use value::{scalar_name, Description, TypeName};
