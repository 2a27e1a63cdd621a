use super::{Condition, Expr};
use crate::{Error, Result};

/// `CASE WHEN .. THEN .. [WHEN .. THEN ..] ELSE .. END`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExprCase {
    /// Branches, tested in order. Never empty.
    pub branches: Vec<CaseBranch>,

    /// Value when no branch matches.
    pub default: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseBranch {
    pub when: Condition,
    pub then: Expr,
}

impl Expr {
    pub fn case(branches: Vec<CaseBranch>, default: impl Into<Self>) -> Result<Self> {
        if branches.is_empty() {
            return Err(Error::invalid_statement("CASE requires at least one branch"));
        }

        Ok(ExprCase {
            branches,
            default: Box::new(default.into()),
        }
        .into())
    }
}

impl CaseBranch {
    pub fn new(when: impl Into<Condition>, then: impl Into<Expr>) -> Self {
        Self {
            when: when.into(),
            then: then.into(),
        }
    }
}

impl From<ExprCase> for Expr {
    fn from(value: ExprCase) -> Self {
        Self::Case(value)
    }
}
