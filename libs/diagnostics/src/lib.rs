#![deny(rust_2018_idioms, unsafe_code)]

//! Source spans and violations reported against a service description.

mod collection;
mod pretty_print;
mod span;
mod violation;

pub use collection::Diagnostics;
pub use pretty_print::{pretty_print, DiagnosticColorer};
pub use span::Span;
pub use violation::{Severity, Violation};
