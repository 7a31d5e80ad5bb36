use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// `order_item` -> `OrderItem`
pub fn pascal(s: &str) -> String {
    s.to_upper_camel_case()
}

/// `order_item` -> `orderItem`
pub fn camel(s: &str) -> String {
    s.to_lower_camel_case()
}

/// `orderItem` -> `order_item`
pub fn snake(s: &str) -> String {
    s.to_snake_case()
}

/// `Example Store` -> `example-store`
pub fn kebab(s: &str) -> String {
    s.to_kebab_case()
}

/// `inStock` -> `IN_STOCK`
pub fn constant(s: &str) -> String {
    s.to_shouty_snake_case()
}
