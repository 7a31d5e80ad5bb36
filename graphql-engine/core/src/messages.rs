use crate::ForeignKey;
use diagnostics::{Span, Violation};
use gql_inflector::{camel, plural};
use indexmap::IndexSet;

/// Code of the violation reported when no method can batch-load a
/// relationship.
pub const RESOLVER_METHOD_CODE: &str = "relationship/resolver-method";

pub(crate) fn resolver_method_violation(
    target: &str,
    fk: &ForeignKey,
    payload: &IndexSet<String>,
    span: Span,
    source_path: &str,
) -> Violation {
    let records = plural(target);
    let reference = format!("\"{}.{}\"", fk.target_type, fk.target_property);
    let example_param = plural(&camel(&format!("{}_{}", fk.target_type, fk.target_property)));
    let payload_names: Vec<String> = payload.iter().map(|name| format!("\"{name}\"")).collect();

    let message = [
        format!("Service must define a method capable of batch-loading {records} by {reference}."),
        format!("The method must accept an array parameter (eg. {example_param}) with an explicit foreign key to {reference}."),
        format!(
            "Also, the method's return type must define an array of {records} in a property named {}.",
            oxford_comma(&payload_names, "or")
        ),
    ]
    .join(" ");

    Violation::new_error(RESOLVER_METHOD_CODE, message, span, source_path)
}

/// `a`, `a or b`, `a, b, or c`.
pub(crate) fn oxford_comma(items: &[String], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} {conjunction} {second}"),
        [init @ .., last] => format!("{}, {conjunction} {last}", init.join(", ")),
    }
}
