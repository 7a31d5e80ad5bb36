mod common;

use common::*;
use diagnostics::Severity;
use expect_test::expect;
use inference_engine::{validate, Engine, GraphQLOptions, Resolver};
use pretty_assertions::assert_eq;
use serde_json::json;
use service_ir::Span;

#[test]
fn to_many_foreign_keys_add_connections() {
    let service = store();
    let engine = Engine::new(&service, &GraphQLOptions::default());
    let user = service.find_type("User").unwrap();
    let order = service.find_type("Order").unwrap();

    assert!(engine.has_connection(order.id));

    let [Resolver::Connection(orders)] = engine.virtual_resolvers(user.id) else {
        panic!("expected one connection on User");
    };
    let list_orders = service.walk_methods().nth(1).unwrap();
    let parameters: Vec<_> = orders.parameters.iter().map(|p| service.walk(*p).name()).collect();

    assert_eq!(orders.name, "Orders");
    assert_eq!(orders.target_type, order.id);
    assert_eq!(orders.resolve_with.method, list_orders.id);
    assert_eq!(orders.resolve_with.entity_payload, "values");
    assert_eq!(parameters, ["status"]);
    assert!(engine.virtual_resolvers(order.id).is_empty());
    assert!(engine.violations().is_empty());
}

#[test]
fn connections_mark_the_referencing_type() {
    let service = service(json!({
        "title": "Comments",
        "types": [
            {
                "name": "Article",
                "properties": [{ "name": "id", "typeName": "string", "isPrimitive": true, "rules": primary_key() }]
            },
            {
                "name": "Comment",
                "properties": [
                    { "name": "id", "typeName": "string", "isPrimitive": true, "rules": primary_key() },
                    { "name": "articleId", "typeName": "string", "isPrimitive": true, "rules": many_foreign_key("Article", "id") },
                    { "name": "replyTo", "typeName": "string", "isPrimitive": true, "rules": many_foreign_key("Article", "id") }
                ]
            },
            {
                "name": "Feed",
                "properties": [
                    { "name": "articles", "typeName": "Article", "isArray": true },
                    { "name": "pinned", "typeName": "Comment" }
                ]
            },
            {
                "name": "CommentsResponse",
                "properties": [
                    { "name": "value", "typeName": "string", "isPrimitive": true },
                    { "name": "data", "typeName": "Comment", "isArray": true },
                    { "name": "errors", "typeName": "Error", "isArray": true }
                ]
            },
            {
                "name": "ArticlesResponse",
                "properties": [
                    { "name": "data", "typeName": "Article", "isArray": true },
                    { "name": "errors", "typeName": "Error", "isArray": true }
                ]
            },
            error_type()
        ],
        "methods": [
            { "name": "getFeed", "httpVerb": "get", "returnType": "Feed" },
            {
                "name": "getArticles",
                "httpVerb": "get",
                "returnType": "ArticlesResponse",
                "parameters": [
                    { "name": "ids", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Article", "id") }
                ]
            },
            {
                "name": "searchComments",
                "httpVerb": "post",
                "returnType": "CommentsResponse",
                "parameters": [
                    { "name": "articleIds", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Article", "id") }
                ]
            },
            {
                "name": "listComments",
                "httpVerb": "get",
                "returnType": "CommentsResponse",
                "parameters": [
                    { "name": "articleIds", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Article", "id") },
                    { "name": "commentIds", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Comment", "id") }
                ]
            }
        ]
    }));
    let engine = Engine::new(&service, &GraphQLOptions::default());
    let article = service.find_type("Article").unwrap();
    let comment = service.find_type("Comment").unwrap();

    // `Comment` is only ever listed through its article.
    assert!(engine.has_connection(comment.id));

    let names: Vec<_> = engine.virtual_resolvers(article.id).iter().map(Resolver::name).collect();
    assert_eq!(names, ["Comments"]);

    let Resolver::Connection(connection) = &engine.virtual_resolvers(article.id)[0] else {
        panic!("expected a connection");
    };
    assert_eq!(service.walk(connection.resolve_with.method).name(), "listComments");
    assert!(connection.parameters.is_empty());
}

#[test]
fn connections_require_a_key_on_the_referencing_type() {
    let service = service(json!({
        "title": "Events",
        "types": [
            {
                "name": "Device",
                "properties": [{ "name": "id", "typeName": "string", "isPrimitive": true, "rules": primary_key() }]
            },
            {
                "name": "Reading",
                "properties": [
                    { "name": "deviceId", "typeName": "string", "isPrimitive": true, "rules": many_foreign_key("Device", "id") }
                ]
            },
            {
                "name": "Dashboard",
                "properties": [
                    { "name": "devices", "typeName": "Device", "isArray": true },
                    { "name": "readings", "typeName": "Reading", "isArray": true }
                ]
            },
            {
                "name": "DevicesResponse",
                "properties": [
                    { "name": "data", "typeName": "Device", "isArray": true },
                    { "name": "errors", "typeName": "Error", "isArray": true }
                ]
            },
            error_type()
        ],
        "methods": [
            { "name": "getDashboard", "httpVerb": "get", "returnType": "Dashboard" },
            {
                "name": "getDevices",
                "httpVerb": "get",
                "returnType": "DevicesResponse",
                "parameters": [
                    { "name": "ids", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Device", "id") }
                ]
            }
        ]
    }));
    let engine = Engine::new(&service, &GraphQLOptions::default());

    assert!(!engine.has_connection(service.find_type("Reading").unwrap().id));
    assert!(engine.virtual_resolvers(service.find_type("Device").unwrap().id).is_empty());
    assert!(engine.violations().is_empty());
}

#[test]
fn join_types_become_edges_in_both_directions() {
    let service = blog();
    let engine = Engine::new(&service, &GraphQLOptions::default());
    let post = service.find_type("Post").unwrap();
    let tag = service.find_type("Tag").unwrap();
    let post_tag = service.find_type("PostTag").unwrap();

    let types: Vec<_> = engine.types().map(|t| t.name()).collect();
    assert_eq!(types, ["Post", "Category", "Error", "Tag"]);
    assert!(!engine.is_included(post_tag.id));

    let [Resolver::Edge(tags)] = engine.virtual_resolvers(post.id) else {
        panic!("expected one edge on Post");
    };
    let [Resolver::Edge(posts)] = engine.virtual_resolvers(tag.id) else {
        panic!("expected one edge on Tag");
    };

    assert_eq!(tags.name, "Tags");
    assert_eq!((tags.target_type, tags.join_type), (tag.id, post_tag.id));
    assert_eq!(service.walk(tags.resolve_with.method).name(), "listTagsByPost");
    assert_eq!(tags.resolve_with.edge_payload, "postTags");
    assert_eq!(
        tags.parameters.iter().map(|p| service.walk(*p).name()).collect::<Vec<_>>(),
        ["first"]
    );

    assert_eq!(posts.name, "Posts");
    assert_eq!((posts.target_type, posts.join_type), (post.id, post_tag.id));
    assert_eq!(service.walk(posts.resolve_with.method).name(), "listPostsByTag");
    assert_eq!(posts.resolve_with.entity_payload, "data");
    assert!(posts.parameters.is_empty());

    let edge_fields: Vec<_> = engine.edge_properties(post.id, tags).map(|p| p.name()).collect();
    assert_eq!(edge_fields, ["createdAt"]);
}

#[test]
fn one_sided_edges_report_the_missing_direction() {
    let service = service(json!({
        "title": "Memberships",
        "types": [
            { "name": "Member", "properties": [{ "name": "id", "typeName": "string", "isPrimitive": true, "rules": primary_key() }] },
            { "name": "Club", "properties": [{ "name": "id", "typeName": "string", "isPrimitive": true, "rules": primary_key() }] },
            {
                "name": "Membership",
                "rules": [{ "id": "edge", "types": ["Member", "Club"] }],
                "properties": [
                    { "name": "memberId", "typeName": "string", "isPrimitive": true, "rules": foreign_key("Member", "id") },
                    { "name": "clubId", "typeName": "string", "isPrimitive": true, "rules": foreign_key("Club", "id") }
                ]
            },
            {
                "name": "ClubsResponse",
                "properties": [
                    { "name": "data", "typeName": "Club", "isArray": true },
                    { "name": "memberships", "typeName": "Membership", "isArray": true },
                    { "name": "errors", "typeName": "Error", "isArray": true }
                ]
            },
            {
                "name": "MembersResponse",
                "properties": [
                    { "name": "data", "typeName": "Member", "isArray": true },
                    { "name": "errors", "typeName": "Error", "isArray": true }
                ]
            },
            error_type()
        ],
        "methods": [
            {
                "name": "getMembers",
                "httpVerb": "get",
                "returnType": "MembersResponse",
                "parameters": [
                    { "name": "ids", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Member", "id") }
                ]
            },
            {
                "name": "getClubs",
                "httpVerb": "get",
                "returnType": "ClubsResponse",
                "parameters": [
                    { "name": "ids", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Club", "id") }
                ]
            },
            {
                "name": "listClubsByMember",
                "httpVerb": "get",
                "returnType": "ClubsResponse",
                "parameters": [
                    { "name": "memberIds", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Member", "id") }
                ]
            },
            {
                "name": "listMembersByClub",
                "httpVerb": "get",
                "returnType": "MembersResponse",
                "parameters": [
                    { "name": "clubIds", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Club", "id") }
                ]
            }
        ]
    }));
    let engine = Engine::new(&service, &GraphQLOptions::default());
    let membership = service.find_type("Membership").unwrap();

    assert!(!engine.is_included(membership.id));
    assert!(engine.virtual_resolvers(service.find_type("Member").unwrap().id).is_empty());
    assert!(engine.virtual_resolvers(service.find_type("Club").unwrap().id).is_empty());

    let messages: Vec<_> = engine.violations().iter().map(|v| v.message()).collect();
    expect![[r#"
        [
            "Service must define a method capable of batch-loading Members by \"Club.id\". The method must accept an array parameter (eg. clubIds) with an explicit foreign key to \"Club.id\". Also, the method's return type must define an array of Members in a property named \"data\", \"value\", or \"values\".",
        ]
    "#]]
    .assert_debug_eq(&messages);
}

#[test]
fn every_unresolved_relationship_is_reported() {
    let service = blog();
    let engine = Engine::new(&service, &GraphQLOptions::default());

    let [violation] = engine.violations() else {
        panic!("expected exactly one violation");
    };

    assert_eq!(violation.code(), "relationship/resolver-method");
    assert_eq!(violation.severity(), Severity::Error);
    assert_eq!(violation.span(), Span::new(120, 135));
    assert_eq!(violation.source_path(), "blog.json");
    assert!(violation.message().starts_with(
        "Service must define a method capable of batch-loading Categories by \"Category.id\"."
    ));

    assert_eq!(validate(&service, &GraphQLOptions::default()), engine.violations());
}

#[test]
fn users_and_orders() {
    let service = store();
    let engine = Engine::new(&service, &GraphQLOptions::default());
    let user = service.find_type("User").unwrap();
    let order = service.find_type("Order").unwrap();

    assert!(engine.has_connection(order.id));
    let [Resolver::Connection(orders)] = engine.virtual_resolvers(user.id) else {
        panic!("expected a single connection on User");
    };
    assert_eq!(orders.name, "Orders");
    assert_eq!(orders.target_type, order.id);
}
