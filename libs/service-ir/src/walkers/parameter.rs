use super::Walker;
use crate::{Parameter, ParameterId, Rule, Span, TypedValue};

pub type ParameterWalker<'a> = Walker<'a, ParameterId>;

impl<'a> ParameterWalker<'a> {
    pub fn get(self) -> &'a Parameter {
        &self.service[self.id]
    }

    pub fn name(self) -> &'a str {
        &self.get().name
    }

    pub fn value(self) -> &'a TypedValue {
        &self.get().value
    }

    pub fn rules(self) -> &'a [Rule] {
        &self.get().rules
    }

    pub fn span(self) -> Span {
        self.get().span
    }
}
