use crate::{
    indexing::{self, Context, Index},
    EdgeResolver, ExternalTypeStub, GraphQLOptions, RelationshipLookup, Resolver, RuleLookup,
};
use diagnostics::Violation;
use indexmap::IndexSet;
use service_ir::{EnumWalker, MethodWalker, PropertyId, PropertyWalker, Service, TypeId, TypeWalker};

static RULE_LOOKUP: RuleLookup = RuleLookup;

/// The relationships of one service, inferred once on construction.
///
/// ```ignore
/// let engine = Engine::new(&service, &options);
///
/// for tpe in engine.types() {
///     for resolver in engine.virtual_resolvers(tpe.id) {
///         println!("{}.{}", tpe.name(), resolver.name());
///     }
/// }
/// ```
pub struct Engine<'a> {
    service: &'a Service,
    lookup: &'a dyn RelationshipLookup,
    options: GraphQLOptions,
    payload: IndexSet<String>,
    index: Index,
    external_type_stubs: Vec<ExternalTypeStub>,
    violations: Vec<Violation>,
}

impl<'a> Engine<'a> {
    /// Infer relationships from the rules of the service description.
    pub fn new(service: &'a Service, options: &GraphQLOptions) -> Self {
        Self::with_lookup(service, options, &RULE_LOOKUP)
    }

    #[tracing::instrument(skip_all, fields(service = service.title()))]
    pub fn with_lookup(service: &'a Service, options: &GraphQLOptions, lookup: &'a dyn RelationshipLookup) -> Self {
        let payload = options.payload_properties();

        let mut ctx = Context {
            service,
            lookup,
            payload: &payload,
            diagnostics: Default::default(),
        };

        let mut index = indexing::index(&mut ctx);
        let external_type_stubs = index.take_external_type_stubs();
        let violations = ctx.diagnostics.into_vec();

        tracing::debug!(violations = violations.len(), "Inferred relationships.");

        Engine {
            service,
            lookup,
            options: options.clone(),
            payload,
            index,
            external_type_stubs,
            violations,
        }
    }

    pub fn service(&self) -> &'a Service {
        self.service
    }

    pub fn lookup(&self) -> &'a dyn RelationshipLookup {
        self.lookup
    }

    pub fn options(&self) -> &GraphQLOptions {
        &self.options
    }

    /// The payload allow-list in effect.
    pub fn payload_properties(&self) -> impl Iterator<Item = &str> + '_ {
        self.payload.iter().map(String::as_str)
    }

    /// The record types part of the schema, in discovery order.
    pub fn types(&self) -> impl Iterator<Item = TypeWalker<'a>> + '_ {
        self.index.types.iter().map(move |id| self.service.walk(*id))
    }

    pub fn is_included(&self, tpe: TypeId) -> bool {
        self.index.types.contains(&tpe)
    }

    /// Enums used by the included types.
    pub fn enums(&self) -> impl Iterator<Item = EnumWalker<'a>> + '_ {
        self.index.enums.iter().map(move |id| self.service.walk(*id))
    }

    /// The read methods of the service.
    pub fn methods(&self) -> impl Iterator<Item = MethodWalker<'a>> + '_ {
        self.index.methods.iter().map(move |id| self.service.walk(*id))
    }

    pub fn is_key(&self, property: PropertyId) -> bool {
        matches!(self.resolver_for(property), Some(Resolver::Key(_)))
    }

    /// Whether the type is listed with pagination somewhere in the schema.
    pub fn has_connection(&self, tpe: TypeId) -> bool {
        self.index.connections.contains(&tpe)
    }

    /// The `Key` or `Entity` resolver of a property, none for plain fields.
    pub fn resolver_for(&self, property: PropertyId) -> Option<&Resolver> {
        self.index.resolvers.get(&property.type_id())?.get(property)
    }

    /// The connections and edges added to a type.
    pub fn virtual_resolvers(&self, tpe: TypeId) -> &[Resolver] {
        self.index
            .resolvers
            .get(&tpe)
            .map(|table| table.virtual_resolvers())
            .unwrap_or_default()
    }

    /// Types referenced by foreign keys that are not part of the schema.
    pub fn external_type_stubs(&self) -> &[ExternalTypeStub] {
        &self.external_type_stubs
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The fields of the join record shown on an edge: the join type's
    /// properties except the references to either side.
    pub fn edge_properties(&self, from: TypeId, edge: &EdgeResolver) -> impl Iterator<Item = PropertyWalker<'a>> + '_ {
        let from = self.service.walk(from).name();
        let to = self.service.walk(edge.target_type).name();

        self.service.walk(edge.join_type).properties().filter(move |prop| {
            self.lookup
                .property_foreign_key(*prop)
                .map_or(true, |fk| fk.target_type != from && fk.target_type != to)
        })
    }
}
