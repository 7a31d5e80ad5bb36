use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Names of the response properties carrying the records of a read method
/// when nothing else is configured.
pub const DEFAULT_PAYLOAD_PROPERTIES: &[&str] = &["data", "value", "values"];

/// Options for the `graphql` section of the generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLOptions {
    /// Response properties holding the records of a read method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Vec<String>>,
    /// GraphQL scalar to use for a primitive, e.g. `{"date-time": "DateTime"}`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub types: BTreeMap<String, String>,
}

impl GraphQLOptions {
    /// The payload allow-list, deduplicated, in configuration order.
    pub fn payload_properties(&self) -> IndexSet<String> {
        match &self.payload {
            Some(payload) => payload.iter().cloned().collect(),
            None => DEFAULT_PAYLOAD_PROPERTIES.iter().map(|p| (*p).to_owned()).collect(),
        }
    }

    /// The configured scalar for a primitive type name.
    pub fn type_override(&self, primitive: &str) -> Option<&str> {
        self.types.get(primitive).map(String::as_str)
    }
}

/// The generator configuration as found in a project file, with the GraphQL
/// options nested under `graphql`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespacedGraphQLOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphql: Option<GraphQLOptions>,
}

impl NamespacedGraphQLOptions {
    pub fn graphql(&self) -> GraphQLOptions {
        self.graphql.clone().unwrap_or_default()
    }
}
