use super::Condition;

/// The `WHERE` fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Filter {
    pub condition: Condition,
}

impl From<Condition> for Filter {
    fn from(value: Condition) -> Self {
        Self { condition: value }
    }
}
