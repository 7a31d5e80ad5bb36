mod common;

use common::*;
use inference_engine::{Engine, GraphQLOptions};
use pretty_assertions::assert_eq;
use serde_json::json;

fn type_names(engine: &Engine<'_>) -> Vec<String> {
    engine.types().map(|t| t.name().to_owned()).collect()
}

#[test]
fn only_read_methods_are_indexed() {
    let service = store();
    let engine = Engine::new(&service, &GraphQLOptions::default());

    let methods: Vec<_> = engine.methods().map(|m| m.name()).collect();
    assert_eq!(methods, ["getUsers", "listOrders"]);
}

#[test]
fn types_are_reachable_from_read_methods_without_envelopes() {
    let service = store();
    let engine = Engine::new(&service, &GraphQLOptions::default());

    assert_eq!(type_names(&engine), ["User", "Address", "Error", "Order"]);

    let enums: Vec<_> = engine.enums().map(|e| e.name()).collect();
    assert_eq!(enums, ["UserStatus"]);
}

#[test]
fn payload_types_are_connections() {
    let service = store();
    let engine = Engine::new(&service, &GraphQLOptions::default());

    assert!(engine.has_connection(service.find_type("User").unwrap().id));
    assert!(engine.has_connection(service.find_type("Order").unwrap().id));
    assert!(!engine.has_connection(service.find_type("Address").unwrap().id));
}

#[test]
fn payload_names_are_configurable() {
    let service = store();
    let options = GraphQLOptions {
        payload: Some(vec!["values".to_owned()]),
        ..Default::default()
    };
    let engine = Engine::new(&service, &options);

    assert!(!engine.has_connection(service.find_type("User").unwrap().id));
    assert!(engine.has_connection(service.find_type("Order").unwrap().id));
    assert_eq!(engine.payload_properties().collect::<Vec<_>>(), ["values"]);
}

#[test]
fn cyclic_types_are_visited_once() {
    let service = service(json!({
        "title": "Tree",
        "types": [
            {
                "name": "Node",
                "properties": [
                    { "name": "id", "typeName": "string", "isPrimitive": true, "rules": primary_key() },
                    { "name": "parent", "typeName": "Node" },
                    { "name": "children", "typeName": "Node", "isArray": true },
                    { "name": "owner", "typeName": "Owner" }
                ]
            },
            { "name": "Owner", "properties": [{ "name": "nodes", "typeName": "Node", "isArray": true }] },
            {
                "name": "NodesResponse",
                "properties": [
                    { "name": "data", "typeName": "Node", "isArray": true },
                    { "name": "errors", "typeName": "Error", "isArray": true }
                ]
            },
            error_type()
        ],
        "methods": [
            { "name": "getNodes", "httpVerb": "get", "returnType": "NodesResponse" },
            { "name": "getOwner", "httpVerb": "get", "returnType": "Owner" }
        ]
    }));
    let engine = Engine::new(&service, &GraphQLOptions::default());

    assert_eq!(type_names(&engine), ["Node", "Owner", "Error"]);
}

#[test]
fn results_are_deterministic() {
    let service = blog();
    let options = GraphQLOptions::default();
    let first = Engine::new(&service, &options);
    let second = Engine::new(&service, &options);

    assert_eq!(type_names(&first), type_names(&second));
    assert_eq!(first.violations(), second.violations());
    assert_eq!(first.external_type_stubs(), second.external_type_stubs());

    for tpe in first.types() {
        assert_eq!(first.virtual_resolvers(tpe.id), second.virtual_resolvers(tpe.id));

        for prop in tpe.properties() {
            assert_eq!(first.resolver_for(prop.id), second.resolver_for(prop.id));
        }
    }
}
