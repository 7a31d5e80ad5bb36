use super::Context;
use crate::ForeignKey;
use gql_inflector::snake;
use service_ir::{MethodId, ParameterId, TypeId, TypeWalker};

#[derive(Debug)]
pub(super) struct MethodMatch {
    pub(super) method: MethodId,
    pub(super) param: ParameterId,
    pub(super) entity_payload: String,
    /// Set when matching for a join type and the response carries the join
    /// records.
    pub(super) edge_payload: Option<String>,
}

/// Find the first read method able to load many `target` records by `fk`:
/// it takes an argument holding that foreign key and lists `target` records
/// in one of its payload properties.
pub(super) fn find_batch_method(
    ctx: &Context<'_>,
    methods: &[MethodId],
    target: TypeId,
    fk: &ForeignKey,
    join: Option<TypeWalker<'_>>,
) -> Option<MethodMatch> {
    for method in methods.iter().map(|id| ctx.service.walk(*id)) {
        let Some(response) = method.return_type() else {
            continue;
        };

        let Some(param) = method.parameters().find(|param| {
            ctx.lookup
                .parameter_foreign_key(*param)
                .map_or(false, |param_fk| param_fk.references(fk))
        }) else {
            continue;
        };

        let edge_payload = join.and_then(|join| {
            let join_name = snake(join.name());

            response
                .properties()
                .find(|prop| snake(prop.type_name()) == join_name)
                .map(|prop| prop.name().to_owned())
        });

        let entity_payload = response.properties().find(|prop| {
            prop.is_array()
                && ctx.payload.contains(prop.name())
                && prop.record_type().map_or(false, |tpe| tpe.id == target)
        });

        if let Some(entity_payload) = entity_payload {
            return Some(MethodMatch {
                method: method.id,
                param: param.id,
                entity_payload: entity_payload.name().to_owned(),
                edge_payload,
            });
        }
    }

    None
}
