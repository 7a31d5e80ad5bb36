//! To-many foreign keys. When `S.p` references `T` and many `S` records may
//! share a `T`, the `T` type gets a paginated list of its `S` records.

use super::{matcher, Context, Index};
use crate::{ConnectionResolver, ResolveWith, Resolver};
use gql_inflector::plural;
use service_ir::{MethodId, ParameterId, TypeWalker};
use tracing::{debug, trace};

pub(super) fn index(ctx: &mut Context<'_>, mut index: Index) -> Index {
    let service = ctx.service;
    let types: Vec<_> = index.types.iter().copied().collect();

    for source in types.into_iter().map(|id| service.walk(id)) {
        for property in source.properties() {
            let Some(fk) = ctx.lookup.property_foreign_key(property).filter(|fk| fk.many) else {
                continue;
            };

            let Some(target) = service.find_type(&fk.target_type) else {
                continue;
            };

            if !index.types.contains(&target.id) {
                continue;
            }

            if !source.properties().any(|prop| ctx.lookup.is_primary_key(prop)) {
                trace!(type_name = source.name(), "Skipping connection from a type without key.");
                continue;
            }

            let Some(found) = matcher::find_batch_method(ctx, &index.methods, source.id, &fk, None) else {
                ctx.push_missing_method(source, &fk, property);
                continue;
            };

            index.connections.insert(source.id);

            let connection = ConnectionResolver {
                name: plural(source.name()),
                target_type: source.id,
                parameters: remaining_parameters(ctx, found.method, found.param, source),
                resolve_with: ResolveWith {
                    method: found.method,
                    param: found.param,
                    entity_payload: found.entity_payload,
                },
            };

            if let Some(table) = index.resolvers.get_mut(&target.id) {
                table.push_virtual(Resolver::Connection(connection));
            }
        }
    }

    debug!(connections = index.connections.len(), "Indexed connections.");

    index
}

/// The parameters of the method that neither carry the key nor filter by
/// another reference to `source`.
fn remaining_parameters(
    ctx: &Context<'_>,
    method: MethodId,
    matched: ParameterId,
    source: TypeWalker<'_>,
) -> Vec<ParameterId> {
    ctx.service
        .walk(method)
        .parameters()
        .filter(|param| param.id != matched)
        .filter(|param| {
            ctx.lookup
                .parameter_foreign_key(*param)
                .map_or(true, |fk| fk.target_type != source.name())
        })
        .map(|param| param.id)
        .collect()
}
