//! Convenient access to a service description.
//!
//! The walkers know how elements reference each other by name (a property's
//! declared type, a method's return type) and resolve those names against the
//! service. They know nothing about relationships; that is the engine's job.

mod r#enum;
mod method;
mod parameter;
mod property;
mod r#type;

pub use method::*;
pub use parameter::*;
pub use property::*;
pub use r#enum::*;
pub use r#type::*;

use crate::Service;
use std::fmt;

/// A generic walker. Only walkers instantiated with a concrete ID type (`I`) are useful.
#[derive(Clone, Copy)]
pub struct Walker<'a, I> {
    /// The service being traversed.
    pub service: &'a Service,
    /// The identifier of the focused element.
    pub id: I,
}

impl<I> PartialEq for Walker<'_, I>
where
    I: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.id.eq(&other.id)
    }
}

impl<I: Eq> Eq for Walker<'_, I> {}

impl<I: fmt::Debug> fmt::Debug for Walker<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walker").field("id", &self.id).finish()
    }
}
