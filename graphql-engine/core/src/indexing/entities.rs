//! Keys and references. Every property of an included type is either its key,
//! a reference to a record that can be loaded in batches, or a plain field.

use super::{matcher, Context, Index};
use crate::{EntityResolver, KeyResolver, ResolveWith, Resolver, ResolverTable};
use gql_inflector::{camel, pascal, snake};
use service_ir::{MethodId, ParameterId};
use tracing::{debug, trace, warn};

const PAGING_PARAMETERS: &[&str] = &["first", "after", "last", "before"];

pub(super) fn index(ctx: &mut Context<'_>, mut index: Index) -> Index {
    let service = ctx.service;

    for type_id in index.types.iter().copied() {
        let tpe = service.walk(type_id);
        let mut table = ResolverTable::default();

        for property in tpe.properties() {
            if ctx.lookup.is_primary_key(property) {
                if table.has_key() {
                    warn!(
                        type_name = tpe.name(),
                        property = property.name(),
                        "Ignoring additional primary key."
                    );
                    continue;
                }

                let key = KeyResolver {
                    name: property.name().to_owned(),
                };
                table.insert(property.id, Resolver::Key(key));
                continue;
            }

            let Some(fk) = ctx.lookup.property_foreign_key(property) else {
                continue;
            };

            let target = match service.find_type(&fk.target_type) {
                Some(target) if index.types.contains(&target.id) => target,
                _ => {
                    trace!(type_name = fk.target_type.as_str(), "Declaring external type.");
                    index
                        .external_types
                        .insert(pascal(&fk.target_type), vec![fk.target_property.clone()]);
                    continue;
                }
            };

            match matcher::find_batch_method(ctx, &index.methods, target.id, &fk, None) {
                Some(found) => {
                    let parameters = remaining_parameters(ctx, found.method, found.param);
                    let entity = EntityResolver {
                        name: clean_foreign_key_name(property.name(), &fk.target_property),
                        target_type: target.id,
                        resolve_with: ResolveWith {
                            method: found.method,
                            param: found.param,
                            entity_payload: found.entity_payload,
                        },
                        parameters,
                    };

                    table.insert(property.id, Resolver::Entity(entity));
                }
                None => ctx.push_missing_method(target, &fk, property),
            }
        }

        index.resolvers.insert(type_id, table);
    }

    debug!(tables = index.resolvers.len(), "Indexed keys and entities.");

    index
}

fn remaining_parameters(ctx: &Context<'_>, method: MethodId, matched: ParameterId) -> Vec<ParameterId> {
    ctx.service
        .walk(method)
        .parameters()
        .filter(|param| param.id != matched)
        .filter(|param| !PAGING_PARAMETERS.contains(&snake(param.name()).as_str()))
        .map(|param| param.id)
        .collect()
}

/// Name a reference after its property, dropping a trailing token naming the
/// referenced property: `owner_id` and `ownerId` both become `owner`.
pub(crate) fn clean_foreign_key_name(local: &str, foreign: &str) -> String {
    let local = snake(local);
    let suffix = format!("_{}", snake(foreign));

    camel(local.strip_suffix(&suffix).unwrap_or(&local))
}
