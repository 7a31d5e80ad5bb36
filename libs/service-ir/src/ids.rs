use crate::{Enum, Method, Parameter, Property, Service, Type};
use std::ops::Index;

/// The identifier for a type in a Service. Use it with the indexing syntax:
/// `let tpe = &service[type_id];`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(pub u32);

impl Index<TypeId> for Service {
    type Output = Type;

    fn index(&self, index: TypeId) -> &Self::Output {
        &self.types[index.0 as usize]
    }
}

/// The identifier for a property: the owning type and the position of the
/// property in its declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyId(pub TypeId, pub u32);

impl PropertyId {
    pub fn type_id(self) -> TypeId {
        self.0
    }
}

impl Index<PropertyId> for Service {
    type Output = Property;

    fn index(&self, index: PropertyId) -> &Self::Output {
        &self[index.0].properties[index.1 as usize]
    }
}

/// The identifier for a method in a Service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodId(pub u32);

impl Index<MethodId> for Service {
    type Output = Method;

    fn index(&self, index: MethodId) -> &Self::Output {
        &self.methods[index.0 as usize]
    }
}

/// The identifier for a parameter of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParameterId(pub MethodId, pub u32);

impl Index<ParameterId> for Service {
    type Output = Parameter;

    fn index(&self, index: ParameterId) -> &Self::Output {
        &self[index.0].parameters[index.1 as usize]
    }
}

/// The identifier for an enum in a Service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnumId(pub u32);

impl Index<EnumId> for Service {
    type Output = Enum;

    fn index(&self, index: EnumId) -> &Self::Output {
        &self.enums[index.0 as usize]
    }
}
