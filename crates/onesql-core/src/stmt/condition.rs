use super::{visit::ParamRefs, *};

/// A boolean condition of the query language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    /// `BETWEEN`
    Between(CondBetween),

    /// `IN`, `IN HIERARCHY`, `NOT IN`
    InList(CondInList),

    /// `IS [NOT] NULL`
    IsNull(CondIsNull),

    /// `LIKE`
    Like(CondLike),

    /// `AND` / `OR`
    Logic(CondLogic),

    /// `NOT`
    Not(CondNot),

    /// `REFS`
    Refs(CondRefs),

    /// Comparison
    Relation(CondRelation),
}

impl Condition {
    /// Every condition renders with top-level whitespace, so it is always
    /// parenthesized when embedded in a connective or `NOT`.
    pub fn has_spaces(&self) -> bool {
        match self {
            Self::Between(_)
            | Self::InList(_)
            | Self::IsNull(_)
            | Self::Like(_)
            | Self::Logic(_)
            | Self::Not(_)
            | Self::Refs(_)
            | Self::Relation(_) => true,
        }
    }

    /// Names of the parameters referenced by the condition, in the order
    /// they appear in the rendered text.
    pub fn param_refs(&self) -> Vec<Ident> {
        let mut refs = ParamRefs::default();
        refs.visit_condition(self);
        refs.0
    }
}
