//! Query descriptions: a source plus an ordered list of operations.
//!
//! ```
//! use onesql::{expr::Expr, query::Query};
//!
//! let r = Expr::data_record();
//! let query = Query::from_table("Catalog.Goods")
//!     .filter(Expr::eq(Expr::get_string(r.clone(), "Code"), "A-1"))
//!     .order_by(Expr::get_string(r, "Name"))
//!     .take(10);
//! assert_eq!(query.ops().len(), 3);
//! ```
//!
//! Operations are recorded as given. Whether a sequence is valid (no filter
//! after a projection, no sort after `take`, ...) is checked when the query
//! is compiled.

mod op;
pub use op::{Aggregate, AggregateFunc, QueryOp};

mod source;
pub use source::Source;

use crate::expr::Expr;
use crate::schema::RecordId;

use onesql_core::stmt::Direction;

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    source: Source,
    ops: Vec<QueryOp>,
}

impl Query {
    /// A query over untyped records read from the named table.
    pub fn from_table(name: impl Into<String>) -> Self {
        Self::new(Source::Table(name.into()))
    }

    /// A query over a mapped record type.
    pub fn from_record(record: RecordId) -> Self {
        Self::new(Source::Record(record))
    }

    pub fn new(source: Source) -> Self {
        Self {
            source,
            ops: vec![],
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn ops(&self) -> &[QueryOp] {
        &self.ops
    }

    /// The input parameter for expressions over this query's records.
    pub fn input(&self) -> Expr {
        self.source.input()
    }

    pub fn push(mut self, op: QueryOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn filter(self, predicate: impl Into<Expr>) -> Self {
        self.push(QueryOp::Filter(predicate.into()))
    }

    pub fn order_by(self, key: impl Into<Expr>) -> Self {
        self.push(QueryOp::OrderBy(key.into(), Direction::Asc))
    }

    pub fn order_by_desc(self, key: impl Into<Expr>) -> Self {
        self.push(QueryOp::OrderBy(key.into(), Direction::Desc))
    }

    pub fn then_by(self, key: impl Into<Expr>) -> Self {
        self.push(QueryOp::ThenBy(key.into(), Direction::Asc))
    }

    pub fn then_by_desc(self, key: impl Into<Expr>) -> Self {
        self.push(QueryOp::ThenBy(key.into(), Direction::Desc))
    }

    pub fn select(self, projection: impl Into<Expr>) -> Self {
        self.push(QueryOp::Select(projection.into()))
    }

    pub fn distinct(self) -> Self {
        self.push(QueryOp::Distinct)
    }

    pub fn take(self, count: u64) -> Self {
        self.push(QueryOp::Take(count))
    }

    pub fn aggregate(self, func: AggregateFunc, arg: Option<Expr>) -> Self {
        self.push(QueryOp::Aggregate(Aggregate { func, arg }))
    }

    /// `COUNT(*)`, or `COUNT(DISTINCT x)` after `select(x).distinct()`.
    pub fn count(self) -> Self {
        self.aggregate(AggregateFunc::Count, None)
    }

    /// Counts the records matching `predicate`.
    pub fn count_where(self, predicate: impl Into<Expr>) -> Self {
        self.aggregate(AggregateFunc::Count, Some(predicate.into()))
    }

    pub fn sum(self, selector: impl Into<Expr>) -> Self {
        self.aggregate(AggregateFunc::Sum, Some(selector.into()))
    }

    pub fn avg(self, selector: impl Into<Expr>) -> Self {
        self.aggregate(AggregateFunc::Avg, Some(selector.into()))
    }

    pub fn min(self, selector: impl Into<Expr>) -> Self {
        self.aggregate(AggregateFunc::Min, Some(selector.into()))
    }

    pub fn max(self, selector: impl Into<Expr>) -> Self {
        self.aggregate(AggregateFunc::Max, Some(selector.into()))
    }
}
