use super::{Condition, LogicOp};

/// `lhs AND rhs` / `lhs OR rhs`
///
/// Kept binary, so `a && b && c` is `And(And(a, b), c)`, matching the shape of
/// the host expression it was compiled from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CondLogic {
    pub lhs: Box<Condition>,
    pub op: LogicOp,
    pub rhs: Box<Condition>,
}

impl Condition {
    pub fn logic(lhs: impl Into<Self>, op: LogicOp, rhs: impl Into<Self>) -> Self {
        CondLogic {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::logic(lhs, LogicOp::And, rhs)
    }

    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::logic(lhs, LogicOp::Or, rhs)
    }

    /// AND-combines the conditions left to right. Returns `None` when there
    /// are none.
    pub fn and_all(conditions: impl IntoIterator<Item = Self>) -> Option<Self> {
        conditions.into_iter().reduce(Self::and)
    }
}

impl From<CondLogic> for Condition {
    fn from(value: CondLogic) -> Self {
        Self::Logic(value)
    }
}
