use super::{EnumWalker, TypeWalker, Walker};
use crate::{Description, Property, PropertyId, Rule, Span, TypedValue};

pub type PropertyWalker<'a> = Walker<'a, PropertyId>;

impl<'a> PropertyWalker<'a> {
    pub fn get(self) -> &'a Property {
        &self.service[self.id]
    }

    pub fn name(self) -> &'a str {
        &self.get().name
    }

    pub fn value(self) -> &'a TypedValue {
        &self.get().value
    }

    /// Name of the declared element type.
    pub fn type_name(self) -> &'a str {
        &self.value().type_name
    }

    pub fn is_array(self) -> bool {
        self.value().is_array
    }

    pub fn is_primitive(self) -> bool {
        self.value().is_primitive
    }

    pub fn is_required(self) -> bool {
        self.value().is_required
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

    /// The record type of a non-primitive property.
    pub fn record_type(self) -> Option<TypeWalker<'a>> {
        if self.is_primitive() {
            return None;
        }

        self.service.find_type(self.type_name())
    }

    /// The enum of a non-primitive property.
    pub fn enum_type(self) -> Option<EnumWalker<'a>> {
        if self.is_primitive() {
            return None;
        }

        self.service.find_enum(self.type_name())
    }
}
