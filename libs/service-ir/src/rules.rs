use diagnostics::Span;
use serde::Deserialize;

/// Validation metadata attached to a type, property or parameter. Only the
/// relationship rules carry meaning here; every other rule is kept as
/// `Other` so descriptions produced for other tools still load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "id", rename_all = "kebab-case")]
pub enum Rule {
    /// The property is the identifier of its type.
    PrimaryKey {
        #[serde(default)]
        span: Option<Span>,
    },
    /// The property or parameter holds the value of `type.property`.
    ForeignKey {
        #[serde(rename = "type")]
        target_type: String,
        property: String,
        /// Many values of the owning type point at one target.
        #[serde(default)]
        many: bool,
        #[serde(default)]
        span: Option<Span>,
    },
    /// The type joins two other types. The entries name the two properties
    /// holding the references.
    Edge {
        types: [String; 2],
        #[serde(default)]
        span: Option<Span>,
    },
    #[serde(other)]
    Other,
}

impl Rule {
    pub fn span(&self) -> Option<Span> {
        match self {
            Rule::PrimaryKey { span } | Rule::ForeignKey { span, .. } | Rule::Edge { span, .. } => *span,
            Rule::Other => None,
        }
    }

    pub fn is_relationship(&self) -> bool {
        !matches!(self, Rule::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_rules_are_kept_as_other() {
        let rules: Vec<Rule> = serde_json::from_str(
            r#"[
                { "id": "string-max-length", "length": 10 },
                { "id": "foreign-key", "type": "User", "property": "id", "many": true },
                { "id": "primary-key", "span": { "start": 1, "end": 3 } }
            ]"#,
        )
        .unwrap();

        assert_eq!(
            rules,
            vec![
                Rule::Other,
                Rule::ForeignKey {
                    target_type: "User".to_owned(),
                    property: "id".to_owned(),
                    many: true,
                    span: None,
                },
                Rule::PrimaryKey {
                    span: Some(Span::new(1, 3)),
                },
            ]
        );
        assert_eq!(rules[2].span(), Some(Span::new(1, 3)));
        assert!(!rules[0].is_relationship());
    }
}
