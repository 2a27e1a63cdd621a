use super::{visit::ParamRefs, Condition, Filter, Ident, OrderBy, Select, Source, Visit};

/// A complete query statement.
///
/// ```text
/// SELECT [DISTINCT] [TOP n] <columns> [FROM <source>] [WHERE <condition>] [ORDER BY <...>]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub select: Select,
    pub source: Option<Source>,
    pub filter: Option<Filter>,
    pub order_by: Option<OrderBy>,
}

impl Query {
    pub fn new(select: Select) -> Self {
        Self {
            select,
            source: None,
            filter: None,
            order_by: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(Source::new(source));
        self
    }

    pub fn with_filter(mut self, condition: impl Into<Condition>) -> Self {
        self.filter = Some(Filter::from(condition.into()));
        self
    }

    pub fn with_order_by(mut self, order_by: impl Into<OrderBy>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Names of the parameters referenced by the statement, in the order they
    /// appear in the rendered text. A name appears once per reference.
    pub fn param_refs(&self) -> Vec<Ident> {
        let mut refs = ParamRefs::default();
        refs.visit_query(self);
        refs.0
    }
}
