mod description;
mod type_name;

pub use description::Description;
pub use type_name::{scalar_name, TypeName};
