use super::{ParameterWalker, TypeWalker, Walker};
use crate::{Description, HttpVerb, Method, MethodId, ParameterId, Span};

pub type MethodWalker<'a> = Walker<'a, MethodId>;

impl<'a> MethodWalker<'a> {
    pub fn get(self) -> &'a Method {
        &self.service[self.id]
    }

    pub fn name(self) -> &'a str {
        &self.get().name
    }

    pub fn http_verb(self) -> Option<&'a HttpVerb> {
        self.get().http_verb.as_ref()
    }

    /// Methods declared with a read-only verb.
    pub fn is_read_only(self) -> bool {
        self.http_verb().is_some_and(HttpVerb::is_read_only)
    }

    pub fn description(self) -> Option<&'a Description> {
        self.get().description.as_ref()
    }

    pub fn span(self) -> Span {
        self.get().span
    }

    pub fn parameters(self) -> impl ExactSizeIterator<Item = ParameterWalker<'a>> + 'a {
        let id = self.id;
        let service = self.service;

        (0..self.get().parameters.len()).map(move |idx| service.walk(ParameterId(id, idx as u32)))
    }

    pub fn return_type_name(self) -> Option<&'a str> {
        self.get().return_type.as_deref()
    }

    /// The record type returned by the method, if it is part of the service.
    pub fn return_type(self) -> Option<TypeWalker<'a>> {
        self.return_type_name().and_then(|name| self.service.find_type(name))
    }
}
