use super::Condition;

/// Negates a condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CondNot {
    pub cond: Box<Condition>,
}

impl Condition {
    pub fn not(cond: impl Into<Self>) -> Self {
        CondNot {
            cond: Box::new(cond.into()),
        }
        .into()
    }

    pub fn is_not(&self) -> bool {
        matches!(self, Self::Not(_))
    }
}

impl From<CondNot> for Condition {
    fn from(value: CondNot) -> Self {
        Self::Not(value)
    }
}
