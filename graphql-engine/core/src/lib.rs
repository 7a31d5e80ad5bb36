//! Relationship and resolver inference over a service description.
//!
//! The engine walks the record types reachable from the read methods of a
//! service and works out, for every property, whether it is a key, a
//! reference to another record that can be batch-loaded, or a plain field.
//! One-to-many references become paginated connections on the referenced
//! type and join types become a pair of directional edges. Whenever a
//! relationship has no method able to batch-load it, a violation is
//! reported instead.
//!
//! Everything is computed in [`Engine::new`]; the accessors only read.

#![deny(rust_2018_idioms, unsafe_code)]

mod engine;
mod indexing;
mod lookup;
mod messages;
mod options;
mod resolver;

pub use engine::Engine;
pub use lookup::{EdgeDescriptor, ForeignKey, RelationshipLookup, RuleLookup};
pub use messages::RESOLVER_METHOD_CODE;
pub use options::{GraphQLOptions, NamespacedGraphQLOptions, DEFAULT_PAYLOAD_PROPERTIES};
pub use resolver::{
    ConnectionResolver, EdgeResolveWith, EdgeResolver, EntityResolver, ExternalTypeStub, KeyResolver, ResolveWith,
    Resolver, ResolverTable,
};

use diagnostics::Violation;
use service_ir::Service;

/// Run the inference over `service` with the rule based lookup and return
/// every relationship that cannot be resolved.
pub fn validate(service: &Service, options: &GraphQLOptions) -> Vec<Violation> {
    Engine::new(service, options).violations().to_vec()
}
