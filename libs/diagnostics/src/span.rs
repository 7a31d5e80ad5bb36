use serde::{Deserialize, Serialize};

/// Byte offsets of an element in the source document the service
/// description was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Constructor.
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }
}
