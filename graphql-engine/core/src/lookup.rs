//! Where relationships come from. The engine never reads validation rules
//! itself; it asks a [`RelationshipLookup`].

use service_ir::{ParameterWalker, PropertyWalker, Rule, Span, TypeWalker};

/// A reference from a property or parameter to `target_type.target_property`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForeignKey {
    pub target_type: String,
    pub target_property: String,
    /// Many records of the referencing type point at one target record.
    pub many: bool,
}

impl ForeignKey {
    /// Two foreign keys reference the same column regardless of their
    /// cardinality.
    pub fn references(&self, other: &ForeignKey) -> bool {
        self.target_type == other.target_type && self.target_property == other.target_property
    }
}

/// Marks a type as the join of a many-to-many relationship. `types` names
/// the two properties holding the references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDescriptor {
    pub types: [String; 2],
}

/// Relationship metadata for a service.
pub trait RelationshipLookup: Send + Sync {
    fn is_primary_key(&self, property: PropertyWalker<'_>) -> bool;

    fn property_foreign_key(&self, property: PropertyWalker<'_>) -> Option<ForeignKey>;

    fn parameter_foreign_key(&self, parameter: ParameterWalker<'_>) -> Option<ForeignKey>;

    fn edge_descriptor(&self, tpe: TypeWalker<'_>) -> Option<EdgeDescriptor>;

    /// Where the relationship of a property is declared, for reporting.
    fn range(&self, property: PropertyWalker<'_>) -> Option<Span>;
}

/// Reads relationships from the rules of the service description.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleLookup;

impl RelationshipLookup for RuleLookup {
    fn is_primary_key(&self, property: PropertyWalker<'_>) -> bool {
        property.rules().iter().any(|rule| matches!(rule, Rule::PrimaryKey { .. }))
    }

    fn property_foreign_key(&self, property: PropertyWalker<'_>) -> Option<ForeignKey> {
        foreign_key(property.rules())
    }

    fn parameter_foreign_key(&self, parameter: ParameterWalker<'_>) -> Option<ForeignKey> {
        foreign_key(parameter.rules())
    }

    fn edge_descriptor(&self, tpe: TypeWalker<'_>) -> Option<EdgeDescriptor> {
        tpe.rules().iter().find_map(|rule| match rule {
            Rule::Edge { types, .. } => Some(EdgeDescriptor { types: types.clone() }),
            _ => None,
        })
    }

    fn range(&self, property: PropertyWalker<'_>) -> Option<Span> {
        property
            .rules()
            .iter()
            .filter(|rule| rule.is_relationship())
            .find_map(Rule::span)
            .or_else(|| Some(property.span()))
    }
}

fn foreign_key(rules: &[Rule]) -> Option<ForeignKey> {
    rules.iter().find_map(|rule| match rule {
        Rule::ForeignKey {
            target_type,
            property,
            many,
            ..
        } => Some(ForeignKey {
            target_type: target_type.clone(),
            target_property: property.clone(),
            many: *many,
        }),
        _ => None,
    })
}
