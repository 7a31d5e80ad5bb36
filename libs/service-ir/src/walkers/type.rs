use super::{PropertyWalker, Walker};
use crate::{Description, PropertyId, Rule, Span, Type, TypeId};

pub type TypeWalker<'a> = Walker<'a, TypeId>;

impl<'a> TypeWalker<'a> {
    pub fn get(self) -> &'a Type {
        &self.service[self.id]
    }

    pub fn name(self) -> &'a str {
        &self.get().name
    }

    pub fn description(self) -> Option<&'a Description> {
        self.get().description.as_ref()
    }

    pub fn rules(self) -> &'a [Rule] {
        &self.get().rules
    }

    pub fn span(self) -> Span {
        self.get().span
    }

    /// The properties, in declaration order.
    pub fn properties(self) -> impl ExactSizeIterator<Item = PropertyWalker<'a>> + 'a {
        let id = self.id;
        let service = self.service;

        (0..self.get().properties.len()).map(move |idx| service.walk(PropertyId(id, idx as u32)))
    }

    pub fn property(self, name: &str) -> Option<PropertyWalker<'a>> {
        self.properties().find(|prop| prop.name() == name)
    }

    /// Response envelopes carry an `errors` array of records next to their
    /// payload.
    pub fn is_envelope(self) -> bool {
        self.properties()
            .any(|prop| prop.name().eq_ignore_ascii_case("errors") && prop.is_array() && !prop.is_primitive())
    }
}
