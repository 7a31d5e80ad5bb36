#![allow(dead_code)]

use serde_json::{json, Value};
use service_ir::Service;

pub fn service(value: Value) -> Service {
    Service::from_json(&value.to_string()).unwrap()
}

pub fn primary_key() -> Value {
    json!([{ "id": "primary-key" }])
}

pub fn foreign_key(tpe: &str, property: &str) -> Value {
    json!([{ "id": "foreign-key", "type": tpe, "property": property }])
}

pub fn many_foreign_key(tpe: &str, property: &str) -> Value {
    json!([{ "id": "foreign-key", "type": tpe, "property": property, "many": true }])
}

pub fn error_type() -> Value {
    json!({ "name": "Error", "properties": [{ "name": "message", "typeName": "string", "isPrimitive": true }] })
}

/// Users and their orders.
pub fn store() -> Service {
    service(json!({
        "title": "Store",
        "sourcePath": "store.json",
        "types": [
            {
                "name": "User",
                "properties": [
                    { "name": "id", "typeName": "string", "isPrimitive": true, "isRequired": true, "rules": primary_key() },
                    { "name": "name", "typeName": "string", "isPrimitive": true },
                    { "name": "status", "typeName": "UserStatus" },
                    { "name": "address", "typeName": "Address" }
                ]
            },
            { "name": "Address", "properties": [{ "name": "street", "typeName": "string", "isPrimitive": true }] },
            {
                "name": "Order",
                "properties": [
                    { "name": "id", "typeName": "string", "isPrimitive": true, "isRequired": true, "rules": primary_key() },
                    { "name": "userId", "typeName": "string", "isPrimitive": true, "isRequired": true, "rules": many_foreign_key("User", "id") },
                    { "name": "total", "typeName": "number", "isPrimitive": true }
                ]
            },
            {
                "name": "UsersResponse",
                "properties": [
                    { "name": "data", "typeName": "User", "isArray": true },
                    { "name": "errors", "typeName": "Error", "isArray": true }
                ]
            },
            {
                "name": "OrdersResponse",
                "properties": [
                    { "name": "values", "typeName": "Order", "isArray": true },
                    { "name": "errors", "typeName": "Error", "isArray": true }
                ]
            },
            error_type(),
            { "name": "Widget", "properties": [{ "name": "id", "typeName": "string", "isPrimitive": true }] }
        ],
        "enums": [
            { "name": "UserStatus", "values": ["active", "suspended"] },
            { "name": "Unused", "values": ["a"] }
        ],
        "methods": [
            {
                "name": "getUsers",
                "httpVerb": "GET",
                "returnType": "UsersResponse",
                "parameters": [
                    { "name": "ids", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("User", "id") },
                    { "name": "first", "typeName": "integer", "isPrimitive": true },
                    { "name": "after", "typeName": "string", "isPrimitive": true },
                    { "name": "includeArchived", "typeName": "boolean", "isPrimitive": true }
                ]
            },
            {
                "name": "listOrders",
                "httpVerb": "get",
                "returnType": "OrdersResponse",
                "parameters": [
                    { "name": "userIds", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("User", "id") },
                    { "name": "status", "typeName": "string", "isPrimitive": true }
                ]
            },
            { "name": "createWidget", "httpVerb": "post", "returnType": "Widget" }
        ]
    }))
}

/// Posts and tags joined by `PostTag`, with a reference to a type outside
/// the service and one that cannot be loaded.
pub fn blog() -> Service {
    service(json!({
        "title": "Blog",
        "sourcePath": "blog.json",
        "types": [
            {
                "name": "Post",
                "properties": [
                    { "name": "id", "typeName": "string", "isPrimitive": true, "isRequired": true, "rules": primary_key() },
                    { "name": "authorId", "typeName": "string", "isPrimitive": true, "rules": foreign_key("author", "id") },
                    {
                        "name": "categoryId",
                        "typeName": "string",
                        "isPrimitive": true,
                        "span": { "start": 100, "end": 140 },
                        "rules": [{ "id": "foreign-key", "type": "Category", "property": "id", "span": { "start": 120, "end": 135 } }]
                    },
                    { "name": "primaryCategory", "typeName": "Category" }
                ]
            },
            { "name": "Category", "properties": [{ "name": "id", "typeName": "string", "isPrimitive": true, "rules": primary_key() }] },
            { "name": "Tag", "properties": [{ "name": "id", "typeName": "string", "isPrimitive": true, "rules": primary_key() }] },
            {
                "name": "PostTag",
                "rules": [{ "id": "edge", "types": ["postId", "tagId"] }],
                "properties": [
                    { "name": "postId", "typeName": "string", "isPrimitive": true, "rules": foreign_key("Post", "id") },
                    { "name": "tagId", "typeName": "string", "isPrimitive": true, "rules": foreign_key("Tag", "id") },
                    { "name": "createdAt", "typeName": "date-time", "isPrimitive": true }
                ]
            },
            {
                "name": "PostsResponse",
                "properties": [
                    { "name": "data", "typeName": "Post", "isArray": true },
                    { "name": "postTags", "typeName": "PostTag", "isArray": true },
                    { "name": "errors", "typeName": "Error", "isArray": true }
                ]
            },
            {
                "name": "TagsResponse",
                "properties": [
                    { "name": "data", "typeName": "Tag", "isArray": true },
                    { "name": "postTags", "typeName": "PostTag", "isArray": true },
                    { "name": "errors", "typeName": "Error", "isArray": true }
                ]
            },
            error_type()
        ],
        "methods": [
            {
                "name": "getPosts",
                "httpVerb": "get",
                "returnType": "PostsResponse",
                "parameters": [
                    { "name": "ids", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Post", "id") }
                ]
            },
            {
                "name": "getTags",
                "httpVerb": "get",
                "returnType": "TagsResponse",
                "parameters": [
                    { "name": "ids", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Tag", "id") }
                ]
            },
            {
                "name": "listTagsByPost",
                "httpVerb": "get",
                "returnType": "TagsResponse",
                "parameters": [
                    { "name": "postIds", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Post", "id") },
                    { "name": "first", "typeName": "integer", "isPrimitive": true }
                ]
            },
            {
                "name": "listPostsByTag",
                "httpVerb": "get",
                "returnType": "PostsResponse",
                "parameters": [
                    { "name": "tagIds", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Tag", "id") },
                    { "name": "postIds", "typeName": "string", "isArray": true, "isPrimitive": true, "rules": foreign_key("Post", "id") }
                ]
            }
        ]
    }))
}
