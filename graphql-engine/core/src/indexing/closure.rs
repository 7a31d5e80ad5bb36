//! Which parts of the service end up in the schema: the read methods, the
//! record types reachable from what they return, and the enums those types
//! use.

use super::{Context, Index};
use indexmap::IndexSet;
use service_ir::{MethodWalker, TypeId, TypeWalker};
use std::collections::HashSet;
use tracing::{debug, trace};

pub(super) fn index(ctx: &mut Context<'_>) -> Index {
    let mut index = Index::default();

    for method in ctx.service.walk_methods().filter(|m| m.is_read_only()) {
        index.methods.push(method.id);

        if let Some(root) = connection_root(ctx, method) {
            index.connections.insert(root.id);
        }
    }

    let mut roots = IndexSet::new();
    for method in index.methods.iter().map(|id| ctx.service.walk(*id)) {
        if let Some(returned) = method.return_type() {
            roots.insert(returned.id);
        }
    }

    for root in roots.into_iter().map(|id| ctx.service.walk(id)) {
        for id in traverse(root) {
            index.types.insert(id);
        }

        if root.is_envelope() {
            trace!(envelope = root.name(), "Eliding response envelope.");
            index.types.shift_remove(&root.id);
        }
    }

    for tpe in index.types.iter().map(|id| ctx.service.walk(*id)) {
        for property in tpe.properties() {
            if let Some(enm) = property.enum_type() {
                index.enums.insert(enm.id);
            }
        }
    }

    debug!(
        methods = index.methods.len(),
        types = index.types.len(),
        enums = index.enums.len(),
        connections = index.connections.len(),
        "Indexed type closure."
    );

    index
}

/// The record type listed by the first payload property of the method's
/// response.
fn connection_root<'a>(ctx: &Context<'_>, method: MethodWalker<'a>) -> Option<TypeWalker<'a>> {
    let payload = method
        .return_type()?
        .properties()
        .find(|prop| ctx.payload.contains(prop.name()))?;

    if !payload.is_array() {
        return None;
    }

    payload.record_type()
}

/// Depth-first, pre-order walk over the record types reachable from `root`,
/// visiting each type once.
fn traverse(root: TypeWalker<'_>) -> Vec<TypeId> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![root];

    while let Some(tpe) = stack.pop() {
        if !visited.insert(tpe.id) {
            continue;
        }

        order.push(tpe.id);

        let children: Vec<_> = tpe.properties().filter_map(|prop| prop.record_type()).collect();
        stack.extend(children.into_iter().rev());
    }

    order
}
