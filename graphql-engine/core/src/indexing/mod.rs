//! The inference passes. Each pass takes the index built so far and hands
//! back an extended one; they run in a fixed order because later passes read
//! what earlier ones decided.

mod closure;
mod connections;
mod edges;
mod entities;
mod matcher;

use crate::{messages, ExternalTypeStub, ForeignKey, RelationshipLookup, ResolverTable};
use diagnostics::Diagnostics;
use indexmap::{IndexMap, IndexSet};
use service_ir::{EnumId, MethodId, PropertyWalker, Service, TypeId, TypeWalker};
use std::collections::HashMap;

pub(crate) struct Context<'a> {
    pub(crate) service: &'a Service,
    pub(crate) lookup: &'a dyn RelationshipLookup,
    pub(crate) payload: &'a IndexSet<String>,
    pub(crate) diagnostics: Diagnostics,
}

impl Context<'_> {
    /// Report a relationship from `property` to `target` that no method can
    /// batch-load.
    pub(crate) fn push_missing_method(&mut self, target: TypeWalker<'_>, fk: &ForeignKey, property: PropertyWalker<'_>) {
        let span = self.lookup.range(property).unwrap_or_else(|| property.span());

        self.diagnostics.push(messages::resolver_method_violation(
            target.name(),
            fk,
            self.payload,
            span,
            self.service.source_path(),
        ));
    }
}

/// Everything the engine knows about a service once the passes ran.
#[derive(Debug, Default)]
pub(crate) struct Index {
    /// Read methods, in declaration order.
    pub(crate) methods: Vec<MethodId>,
    pub(crate) types: IndexSet<TypeId>,
    pub(crate) enums: IndexSet<EnumId>,
    /// Types listed by a read method, or referenced through a to-many
    /// foreign key that can be loaded.
    pub(crate) connections: IndexSet<TypeId>,
    pub(crate) resolvers: HashMap<TypeId, ResolverTable>,
    pub(crate) external_types: IndexMap<String, Vec<String>>,
}

impl Index {
    pub(crate) fn take_external_type_stubs(&mut self) -> Vec<ExternalTypeStub> {
        std::mem::take(&mut self.external_types)
            .into_iter()
            .map(|(name, keys)| ExternalTypeStub { name, keys })
            .collect()
    }
}

pub(crate) fn index(ctx: &mut Context<'_>) -> Index {
    let index = closure::index(ctx);
    let index = entities::index(ctx, index);
    let index = connections::index(ctx, index);

    edges::index(ctx, index)
}
