use crate::{Argument, Description, Document, EnumType, Field, ObjectType, TypeName};
use gql_inflector::{camel, kebab, pascal, snake};
use inference_engine::{EdgeResolver, Engine, Resolver};
use service_ir::{MethodWalker, ParameterId, PropertyWalker, Service, TypeWalker, TypedValue};
use tracing::debug;

/// A rendered file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name, e.g. `example-store.graphql`.
    pub path: String,
    /// The schema document.
    pub contents: String,
}

/// `<kebab(title)>.graphql`.
pub fn file_name(service: &Service) -> String {
    format!("{}.graphql", kebab(service.title()))
}

/// Render the schema of the service the engine analyzed.
pub fn generate(engine: &Engine<'_>) -> GeneratedFile {
    GeneratedFile {
        path: file_name(engine.service()),
        contents: render(engine),
    }
}

/// The schema document: the query type, then the types, enums and
/// external entities, each sorted by name.
pub fn render(engine: &Engine<'_>) -> String {
    let mut document = Document::new();
    let factory = SchemaFactory { engine };

    document.push_object(factory.query_type());

    let mut types: Vec<_> = engine.types().collect();
    types.sort_by_key(|tpe| tpe.name());

    for tpe in types {
        factory.push_type(&mut document, tpe);
    }

    let mut enums: Vec<_> = engine.enums().collect();
    enums.sort_by_key(|enm| enm.name());

    for enm in enums {
        let mut rendered = EnumType::new(enm.name());

        if let Some(description) = enm.description() {
            rendered.description(Description::new(description.lines()));
        }

        for value in enm.values() {
            rendered.push_value(value);
        }

        document.push_enum(rendered);
    }

    let mut stubs: Vec<_> = engine.external_type_stubs().iter().collect();
    stubs.sort_by(|a, b| a.name.cmp(&b.name));

    for stub in stubs {
        let mut object = ObjectType::new(stub.name.as_str());
        object.unresolvable();

        for key in stub.keys.iter() {
            object.push_key(key.as_str());
            object.push_field(Field::new(camel(key), TypeName::required("ID")));
        }

        document.push_object(object);
    }

    debug!(service = engine.service().title(), "Rendered schema.");

    document.to_string()
}

struct SchemaFactory<'a> {
    engine: &'a Engine<'a>,
}

impl<'a> SchemaFactory<'a> {
    fn query_type(&self) -> ObjectType<'a> {
        let mut methods: Vec<_> = self.engine.methods().map(|m| (query_field_name(m.name()), m)).collect();
        methods.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut query = ObjectType::new("Query");

        for (name, method) in methods {
            let mut field = Field::new(name, self.resolver_type(method));

            for param in method.parameters() {
                field.push_argument(self.argument(param.name(), param.value()));
            }

            query.push_field(field);
        }

        query
    }

    fn push_type(&self, document: &mut Document<'a>, tpe: TypeWalker<'a>) {
        let name = pascal(tpe.name());
        let mut object = ObjectType::new(name.clone());
        let mut edges = Vec::new();

        if let Some(description) = tpe.description() {
            object.description(Description::new(description.lines()));
        }

        for prop in tpe.properties() {
            if self.engine.is_key(prop.id) {
                object.push_key(camel(prop.name()));
            }

            object.push_field(self.property_field(prop));
        }

        for resolver in self.engine.virtual_resolvers(tpe.id) {
            let (field, parameters) = match resolver {
                Resolver::Connection(connection) => {
                    let target = pascal(self.engine.service().walk(connection.target_type).name());
                    let r#type = TypeName::required(format!("{target}Connection"));

                    (Field::new(camel(&connection.name), r#type), &connection.parameters)
                }
                Resolver::Edge(edge) => {
                    let target = self.engine.service().walk(edge.target_type).name();
                    let r#type = TypeName::required(format!("{}Connection", pascal(&format!("{}_{target}", tpe.name()))));
                    edges.push(edge);

                    (Field::new(camel(&edge.name), r#type), &edge.parameters)
                }
                Resolver::Key(_) | Resolver::Entity(_) => continue,
            };

            object.push_field(self.with_arguments(field, parameters));
        }

        document.push_object(object);

        if self.engine.has_connection(tpe.id) {
            push_connection(document, &name, &name, Vec::new());
        }

        for edge in edges {
            let to = pascal(self.engine.service().walk(edge.target_type).name());
            let from_to = format!("{name}{to}");
            let payload = self.edge_fields(tpe, edge);

            push_connection(document, &from_to, &to, payload);
        }
    }

    fn property_field(&self, prop: PropertyWalker<'a>) -> Field<'a> {
        let mut field = match self.engine.resolver_for(prop.id) {
            Some(Resolver::Key(key)) => Field::new(key.name.clone(), TypeName::required("ID")),
            Some(Resolver::Entity(entity)) => {
                let target = pascal(self.engine.service().walk(entity.target_type).name());
                let r#type = if prop.is_required() {
                    TypeName::required(target)
                } else {
                    TypeName::optional(target)
                };

                Field::new(camel(&entity.name), r#type)
            }
            Some(Resolver::Connection(_)) | Some(Resolver::Edge(_)) | None => {
                let is_id = self.engine.lookup().is_primary_key(prop);
                let r#type = TypeName::from_typed_value(prop.value(), is_id, self.engine.options());

                Field::new(camel(prop.name()), r#type)
            }
        };

        if let Some(description) = prop.description() {
            field.description(Description::new(description.lines()));
        }

        field
    }

    fn edge_fields(&self, from: TypeWalker<'a>, edge: &EdgeResolver) -> Vec<Field<'a>> {
        self.engine
            .edge_properties(from.id, edge)
            .map(|prop| self.property_field(prop))
            .collect()
    }

    fn argument(&self, name: &str, value: &'a TypedValue) -> Argument<'a> {
        Argument::new(camel(name), TypeName::from_typed_value(value, false, self.engine.options()))
    }

    fn with_arguments(&self, mut field: Field<'a>, parameters: &[ParameterId]) -> Field<'a> {
        for param in parameters.iter().map(|id| self.engine.service().walk(*id)) {
            field.push_argument(self.argument(param.name(), param.value()));
        }

        field
    }

    /// The return type of a query field. Envelopes are unwrapped to their
    /// payload, which is paginated when the method follows the cursor
    /// connection conventions.
    fn resolver_type(&self, method: MethodWalker<'a>) -> TypeName<'a> {
        let Some(response) = method.return_type() else {
            return TypeName::optional("Unknown");
        };

        let payload = response.properties().find(|prop| {
            let name = snake(prop.name());
            self.engine.payload_properties().any(|p| p == name)
        });

        match payload {
            Some(payload) if response.is_envelope() && is_relay_connection(method) => {
                let name = crate::scalar_name(payload.value(), self.engine.options());
                TypeName::required(format!("{name}Connection"))
            }
            Some(payload) if response.is_envelope() => {
                TypeName::from_typed_value(payload.value(), false, self.engine.options())
            }
            _ => TypeName::optional(pascal(response.name())),
        }
    }
}

fn push_connection<'a>(document: &mut Document<'a>, prefix: &str, node: &str, payload: Vec<Field<'a>>) {
    let mut edge = ObjectType::new(format!("{prefix}Edge"));
    edge.push_field(Field::new("node", TypeName::required(node.to_owned())));
    edge.push_field(Field::new("cursor", TypeName::required("String")));

    for field in payload {
        edge.push_field(field);
    }

    let mut connection = ObjectType::new(format!("{prefix}Connection"));
    connection.push_field(Field::new("nodes", TypeName::required(format!("[{node}!]"))));
    connection.push_field(Field::new("edges", TypeName::required(format!("[{prefix}Edge!]"))));
    connection.push_field(Field::new("pageInfo", TypeName::required("PageInfo")));

    document.push_object(edge);
    document.push_object(connection);
}

/// `getUser` and `fetchUser` become `user`.
fn query_field_name(name: &str) -> String {
    let snake_name = snake(name);

    match snake_name.split_once('_') {
        Some(("get" | "fetch", rest)) => camel(rest),
        _ => camel(name),
    }
}

/// A method returning a page of records: an optional `first`/`last` count
/// and `after`/`before` cursor, and a response holding page info.
fn is_relay_connection(method: MethodWalker<'_>) -> bool {
    let Some(response) = method.return_type() else {
        return false;
    };

    if !response.properties().any(|prop| prop.record_type().map_or(false, is_page_info)) {
        return false;
    }

    let has_param = |name: &str, type_name: &str| {
        method.parameters().any(|param| {
            let value = param.value();

            snake(param.name()) == name
                && !value.is_array
                && value.is_primitive
                && value.type_name == type_name
                && !value.is_required
        })
    };

    has_param("first", "integer") && has_param("after", "string") && has_param("last", "integer") && has_param("before", "string")
}

fn is_page_info(tpe: TypeWalker<'_>) -> bool {
    if snake(tpe.name()) != "page_info" {
        return false;
    }

    let has_prop = |name: &str, type_name: &str, required: bool| {
        tpe.properties().any(|prop| {
            snake(prop.name()) == name
                && !prop.is_array()
                && prop.is_primitive()
                && prop.type_name() == type_name
                && (!required || prop.is_required())
        })
    };

    has_prop("has_previous_page", "boolean", true)
        && has_prop("has_next_page", "boolean", true)
        && has_prop("start_cursor", "string", false)
        && has_prop("end_cursor", "string", false)
}
