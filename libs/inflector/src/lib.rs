//! English inflection and identifier casing for schema names.

mod case;
mod categories;
mod exceptions;
mod inflector;
mod rules;

pub use case::{camel, constant, kebab, pascal, snake};
pub use inflector::Inflector;

use once_cell::sync::Lazy;

static DEFAULT: Lazy<Inflector> = Lazy::new(Inflector::new);

/// The shared inflector.
pub fn default() -> &'static Inflector {
    &DEFAULT
}

/// Pluralize a word with the default inflector.
pub fn plural(word: &str) -> String {
    default().pluralize(word)
}
