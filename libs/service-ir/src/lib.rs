//! Service description. A closed graph of record types, enums and methods,
//! read from the JSON intermediate representation and navigated by id.

#![deny(rust_2018_idioms, unsafe_code)]

pub mod walkers;

mod error;
mod ids;
mod rules;

pub use self::{
    error::{IrError, IrResult},
    ids::*,
    rules::Rule,
    walkers::*,
};
pub use diagnostics::Span;

use serde::Deserialize;
use std::{collections::HashMap, fmt, path::Path};
use tracing::debug;

/// The complete description of one service.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "ServiceDefinition")]
pub struct Service {
    title: String,
    source_path: String,
    types: Vec<Type>,
    enums: Vec<Enum>,
    methods: Vec<Method>,
    type_names: HashMap<String, TypeId>,
    enum_names: HashMap<String, EnumId>,
}

impl Service {
    pub fn new(title: String, source_path: String, types: Vec<Type>, enums: Vec<Enum>, methods: Vec<Method>) -> Self {
        let mut type_names = HashMap::with_capacity(types.len());
        for (idx, tpe) in types.iter().enumerate() {
            type_names.entry(tpe.name.clone()).or_insert(TypeId(idx as u32));
        }

        let mut enum_names = HashMap::with_capacity(enums.len());
        for (idx, e) in enums.iter().enumerate() {
            enum_names.entry(e.name.clone()).or_insert(EnumId(idx as u32));
        }

        Service {
            title,
            source_path,
            types,
            enums,
            methods,
            type_names,
            enum_names,
        }
    }

    /// Parse a service description from its JSON representation.
    pub fn from_json(json: &str) -> IrResult<Self> {
        let service: Service = serde_json::from_str(json)?;
        service.log_loaded();
        Ok(service)
    }

    /// Read and parse the service description at `path`.
    pub fn from_path(path: &Path) -> IrResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| IrError::Io {
            path: path.to_owned(),
            source,
        })?;

        Self::from_json(&json)
    }

    fn log_loaded(&self) {
        debug!(
            title = self.title.as_str(),
            types = self.types.len(),
            enums = self.enums.len(),
            methods = self.methods.len(),
            "Loaded service description."
        );
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Path of the document the description was produced from.
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    /// Traverse a service element by id.
    pub fn walk<I>(&self, id: I) -> Walker<'_, I> {
        Walker { service: self, id }
    }

    /// Find a record type by name.
    pub fn find_type(&self, name: &str) -> Option<TypeWalker<'_>> {
        self.type_names.get(name).map(|id| self.walk(*id))
    }

    /// Find an enum by name.
    pub fn find_enum(&self, name: &str) -> Option<EnumWalker<'_>> {
        self.enum_names.get(name).map(|id| self.walk(*id))
    }

    /// Walk all the types, in declaration order.
    pub fn walk_types(&self) -> impl ExactSizeIterator<Item = TypeWalker<'_>> + '_ {
        (0..self.types.len()).map(move |idx| self.walk(TypeId(idx as u32)))
    }

    /// Walk all the methods, in declaration order.
    pub fn walk_methods(&self) -> impl ExactSizeIterator<Item = MethodWalker<'_>> + '_ {
        (0..self.methods.len()).map(move |idx| self.walk(MethodId(idx as u32)))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceDefinition {
    title: String,
    #[serde(default)]
    source_path: String,
    #[serde(default)]
    types: Vec<Type>,
    #[serde(default)]
    enums: Vec<Enum>,
    #[serde(default)]
    methods: Vec<Method>,
}

impl From<ServiceDefinition> for Service {
    fn from(def: ServiceDefinition) -> Self {
        Service::new(def.title, def.source_path, def.types, def.enums, def.methods)
    }
}

/// Documentation attached to an element, either one string or one string
/// per line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Line(String),
    Lines(Vec<String>),
}

impl Description {
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        let lines: &[String] = match self {
            Description::Line(line) => std::slice::from_ref(line),
            Description::Lines(lines) => lines,
        };

        lines.iter().map(String::as_str)
    }
}

/// A record type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    pub name: String,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub span: Span,
}

/// The shape shared by properties and parameters: the name of the declared
/// element type and how the element is held.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedValue {
    pub type_name: String,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub is_primitive: bool,
    #[serde(default)]
    pub is_required: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(flatten)]
    pub value: TypedValue,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(flatten)]
    pub value: TypedValue,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub http_verb: Option<HttpVerb>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Name of the returned record type, if the method returns anything.
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub span: Span,
}

/// The HTTP verb of a method. Verbs outside the standard set are kept as
/// written and never count as read-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum HttpVerb {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Trace,
    Other(String),
}

impl HttpVerb {
    /// Read-only verbs fetch data without side effects.
    pub fn is_read_only(&self) -> bool {
        matches!(self, HttpVerb::Get)
    }
}

impl From<&str> for HttpVerb {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "get" => HttpVerb::Get,
            "head" => HttpVerb::Head,
            "post" => HttpVerb::Post,
            "put" => HttpVerb::Put,
            "patch" => HttpVerb::Patch,
            "delete" => HttpVerb::Delete,
            "options" => HttpVerb::Options,
            "trace" => HttpVerb::Trace,
            _ => HttpVerb::Other(s.to_owned()),
        }
    }
}

impl From<String> for HttpVerb {
    fn from(value: String) -> Self {
        HttpVerb::from(value.as_str())
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            HttpVerb::Get => "get",
            HttpVerb::Head => "head",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Patch => "patch",
            HttpVerb::Delete => "delete",
            HttpVerb::Options => "options",
            HttpVerb::Trace => "trace",
            HttpVerb::Other(verb) => verb,
        };

        f.write_str(verb)
    }
}
