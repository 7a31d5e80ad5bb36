use crate::Violation;

/// Violations accumulated over a whole analysis, in the order they were
/// found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    violations: Vec<Violation>,
}

impl Diagnostics {
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation)
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.violations
    }
}
