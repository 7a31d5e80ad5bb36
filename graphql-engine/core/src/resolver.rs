use service_ir::{MethodId, ParameterId, PropertyId, TypeId};
use std::collections::HashMap;

/// How a relationship is loaded: call `method`, passing the collected keys as
/// `param`, and read the records from the `entity_payload` property of the
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveWith {
    pub method: MethodId,
    pub param: ParameterId,
    pub entity_payload: String,
}

/// Like [`ResolveWith`], the join records sit in the `edge_payload` property
/// of the same response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeResolveWith {
    pub method: MethodId,
    pub param: ParameterId,
    pub entity_payload: String,
    pub edge_payload: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResolver {
    pub name: String,
}

/// A property replaced by the record it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityResolver {
    pub name: String,
    pub target_type: TypeId,
    pub resolve_with: ResolveWith,
    /// The remaining parameters of the method, without the key and paging
    /// parameters.
    pub parameters: Vec<ParameterId>,
}

/// A list of the records referencing a type through a to-many foreign key.
/// `name` is the pluralized referencing type (`Orders`); it is camel-cased
/// when rendered as a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionResolver {
    pub name: String,
    pub target_type: TypeId,
    pub resolve_with: ResolveWith,
    pub parameters: Vec<ParameterId>,
}

/// One direction of a many-to-many relationship through `join_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeResolver {
    pub name: String,
    pub target_type: TypeId,
    pub join_type: TypeId,
    pub resolve_with: EdgeResolveWith,
    pub parameters: Vec<ParameterId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolver {
    Key(KeyResolver),
    Entity(EntityResolver),
    Connection(ConnectionResolver),
    Edge(EdgeResolver),
}

impl Resolver {
    pub fn name(&self) -> &str {
        match self {
            Resolver::Key(key) => &key.name,
            Resolver::Entity(entity) => &entity.name,
            Resolver::Connection(connection) => &connection.name,
            Resolver::Edge(edge) => &edge.name,
        }
    }

    /// Virtual resolvers add a field that has no property behind it.
    pub fn is_virtual(&self) -> bool {
        matches!(self, Resolver::Connection(_) | Resolver::Edge(_))
    }
}

/// The resolvers of one type. Properties hold at most one `Key` or `Entity`
/// resolver; connections and edges are kept in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverTable {
    properties: HashMap<PropertyId, Resolver>,
    virtuals: Vec<Resolver>,
}

impl ResolverTable {
    pub fn get(&self, property: PropertyId) -> Option<&Resolver> {
        self.properties.get(&property)
    }

    pub fn virtual_resolvers(&self) -> &[Resolver] {
        &self.virtuals
    }

    pub fn has_key(&self) -> bool {
        self.properties.values().any(|r| matches!(r, Resolver::Key(_)))
    }

    pub(crate) fn insert(&mut self, property: PropertyId, resolver: Resolver) {
        debug_assert!(!resolver.is_virtual());
        self.properties.insert(property, resolver);
    }

    /// Returns false when a virtual resolver with the same name exists.
    pub(crate) fn push_virtual(&mut self, resolver: Resolver) -> bool {
        if self.virtuals.iter().any(|r| r.name() == resolver.name()) {
            return false;
        }

        self.virtuals.push(resolver);
        true
    }
}

/// A type referenced by a foreign key but defined outside the service. It is
/// declared as an unresolvable entity keyed by the referenced properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTypeStub {
    pub name: String,
    pub keys: Vec<String>,
}
