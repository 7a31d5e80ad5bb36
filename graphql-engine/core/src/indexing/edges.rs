//! Many-to-many relationships. A join type `J` marked with an edge
//! descriptor holds one reference to `A` and one to `B`; `A` gets a list of
//! its `B` records and `B` a list of its `A` records, each annotated with the
//! join record.

use super::{matcher, Context, Index};
use crate::{EdgeDescriptor, EdgeResolveWith, EdgeResolver, ForeignKey, Resolver};
use gql_inflector::plural;
use service_ir::{ParameterId, PropertyWalker, TypeWalker};
use tracing::{debug, trace};

pub(super) fn index(ctx: &mut Context<'_>, mut index: Index) -> Index {
    let service = ctx.service;

    for join in service.walk_types() {
        let Some(EdgeDescriptor { types: [a, b] }) = ctx.lookup.edge_descriptor(join) else {
            continue;
        };

        trace!(join = join.name(), "Removing join type.");
        index.types.shift_remove(&join.id);
        index.resolvers.remove(&join.id);

        let Some((prop_a, fk_a, type_a)) = edge_side(ctx, join, &a) else {
            continue;
        };
        let Some((prop_b, fk_b, type_b)) = edge_side(ctx, join, &b) else {
            continue;
        };

        // Loading the `B` records of an `A` filters the join by `A`'s key.
        let a_to_b = find_edge_method(ctx, &index, type_b, &fk_a, join);
        let b_to_a = find_edge_method(ctx, &index, type_a, &fk_b, join);

        if a_to_b.is_none() {
            ctx.push_missing_method(type_b, &fk_a, prop_a);
        }

        if b_to_a.is_none() {
            ctx.push_missing_method(type_a, &fk_b, prop_b);
        }

        let (Some(a_to_b), Some(b_to_a)) = (a_to_b, b_to_a) else {
            continue;
        };

        let on_a = EdgeResolver {
            name: plural(type_b.name()),
            target_type: type_b.id,
            join_type: join.id,
            parameters: remaining_parameters(ctx, &a_to_b, type_b),
            resolve_with: a_to_b,
        };
        let on_b = EdgeResolver {
            name: plural(type_a.name()),
            target_type: type_a.id,
            join_type: join.id,
            parameters: remaining_parameters(ctx, &b_to_a, type_a),
            resolve_with: b_to_a,
        };

        if let Some(table) = index.resolvers.get_mut(&type_a.id) {
            table.push_virtual(Resolver::Edge(on_a));
        }

        if let Some(table) = index.resolvers.get_mut(&type_b.id) {
            table.push_virtual(Resolver::Edge(on_b));
        }
    }

    debug!(types = index.types.len(), "Indexed edges.");

    index
}

/// The property of `join` referencing one side, its foreign key and the
/// referenced type.
fn edge_side<'a>(
    ctx: &Context<'_>,
    join: TypeWalker<'a>,
    side: &str,
) -> Option<(PropertyWalker<'a>, ForeignKey, TypeWalker<'a>)> {
    let property = join.property(side).or_else(|| {
        join.properties().find(|prop| {
            ctx.lookup
                .property_foreign_key(*prop)
                .map_or(false, |fk| fk.target_type == side)
        })
    })?;

    let fk = ctx.lookup.property_foreign_key(property)?;
    let target = join.service.find_type(&fk.target_type)?;

    Some((property, fk, target))
}

/// A direction only works when the response also lists the join records.
fn find_edge_method(
    ctx: &Context<'_>,
    index: &Index,
    target: TypeWalker<'_>,
    fk: &ForeignKey,
    join: TypeWalker<'_>,
) -> Option<EdgeResolveWith> {
    let found = matcher::find_batch_method(ctx, &index.methods, target.id, fk, Some(join))?;

    Some(EdgeResolveWith {
        method: found.method,
        param: found.param,
        entity_payload: found.entity_payload,
        edge_payload: found.edge_payload?,
    })
}

fn remaining_parameters(ctx: &Context<'_>, with: &EdgeResolveWith, opposite: TypeWalker<'_>) -> Vec<ParameterId> {
    ctx.service
        .walk(with.method)
        .parameters()
        .filter(|param| param.id != with.param)
        .filter(|param| {
            ctx.lookup
                .parameter_foreign_key(*param)
                .map_or(true, |fk| fk.target_type != opposite.name())
        })
        .map(|param| param.id)
        .collect()
}
