//! Whole query descriptions.
//!
//! Operations are accepted in this order, each stage optional:
//!
//! ```text
//! Source -> Filter* -> (OrderBy ThenBy*)* -> Select -> Distinct -> Take* -> Aggregate
//! ```
//!
//! A later `OrderBy` replaces the previous sort. Repeated `Take` keeps the
//! smallest count. An aggregate ends the query.

use super::{unsupported, Constants, ParseContext, Transform};
use crate::expr::{Expr, ExprNew};
use crate::query::{Aggregate, AggregateFunc, Query, QueryOp, Source};
use crate::reader::ItemReader;
use crate::schema::MappingProvider;

use onesql_core::{
    stmt::{self, Condition, Direction, OrderBy, Select},
    Error, Result,
};

/// Translates a query description into a statement. The reader is `None`
/// for aggregate queries.
pub fn transform(
    query: &Query,
    mapping: &dyn MappingProvider,
    cx: &mut ParseContext,
) -> Result<(stmt::Query, Option<ItemReader>)> {
    Transform::new(mapping, cx, Constants::Params).query(query)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    Source,
    Filter,
    Order,
    Select,
    Distinct,
    Take,
    Aggregate,
}

/// The operations of a query, grouped by stage.
#[derive(Default)]
struct Ops<'a> {
    filters: Vec<&'a Expr>,
    order: Vec<(&'a Expr, Direction)>,
    projection: Option<&'a Expr>,
    distinct: bool,
    take: Option<u64>,
    aggregate: Option<&'a Aggregate>,
}

impl<'a> Ops<'a> {
    fn collect(query: &'a Query) -> Result<Self> {
        let mut ops = Ops::default();
        let mut stage = Stage::Source;

        for op in query.ops() {
            let reject = |message: &str| Error::unsupported_expression(message, format!("{op:?}"));

            if stage == Stage::Aggregate {
                return Err(reject("no operation may follow an aggregate"));
            }

            stage = match op {
                QueryOp::Filter(predicate) => {
                    if stage > Stage::Filter {
                        return Err(reject("filter after sorting or projection"));
                    }
                    ops.filters.push(predicate);
                    Stage::Filter
                }
                QueryOp::OrderBy(key, direction) => {
                    if stage > Stage::Order {
                        return Err(reject("sort after projection or take"));
                    }
                    ops.order.clear();
                    ops.order.push((key, *direction));
                    Stage::Order
                }
                QueryOp::ThenBy(key, direction) => {
                    if stage != Stage::Order {
                        return Err(reject("then-by without a preceding order-by"));
                    }
                    ops.order.push((key, *direction));
                    Stage::Order
                }
                QueryOp::Select(projection) => {
                    if stage >= Stage::Select {
                        return Err(reject("only one projection is supported"));
                    }
                    ops.projection = Some(projection);
                    Stage::Select
                }
                QueryOp::Distinct => {
                    if stage >= Stage::Distinct {
                        return Err(reject("distinct after distinct or take"));
                    }
                    ops.distinct = true;
                    Stage::Distinct
                }
                QueryOp::Take(count) => {
                    ops.take = Some(ops.take.map_or(*count, |take| take.min(*count)));
                    Stage::Take
                }
                QueryOp::Aggregate(aggregate) => {
                    if stage == Stage::Take {
                        return Err(reject("take before an aggregate"));
                    }
                    if aggregate.func == AggregateFunc::Count
                        && aggregate.arg.is_some()
                        && ops.projection.is_some()
                    {
                        return Err(reject("counting predicate after a projection"));
                    }
                    ops.aggregate = Some(aggregate);
                    Stage::Aggregate
                }
            };
        }

        Ok(ops)
    }
}

impl Transform<'_> {
    pub(super) fn query(&mut self, query: &Query) -> Result<(stmt::Query, Option<ItemReader>)> {
        let ops = Ops::collect(query)?;
        let source = self.source_name(query.source())?;

        let mut filters = ops.filters.clone();

        if let Some(Aggregate {
            func: AggregateFunc::Count,
            arg: Some(predicate),
        }) = ops.aggregate
        {
            filters.push(predicate);
        }

        let filter = self.filter(&filters)?;

        let (stmt, reader) = match ops.aggregate {
            Some(aggregate) => (self.scalar_query(&ops, aggregate)?, None),
            None => {
                let (stmt, reader) = self.collection_query(&ops)?;
                (stmt, Some(reader))
            }
        };

        let mut stmt = stmt.with_source(source);
        if let Some(filter) = filter {
            stmt = stmt.with_filter(filter);
        }

        Ok((stmt, reader))
    }

    fn source_name(&self, source: &Source) -> Result<String> {
        match source {
            Source::Table(name) => Ok(name.clone()),
            Source::Record(id) => self.table_name(*id),
        }
    }

    /// AND-combines the filters, in order. A filter that is always true is
    /// dropped.
    fn filter(&mut self, filters: &[&Expr]) -> Result<Option<Condition>> {
        let mut conditions = vec![];

        for filter in filters {
            let filter = (*filter).clone().fold()?;

            match filter.as_constant().and_then(|c| c.value.as_bool()) {
                Some(true) => continue,
                Some(false) => return Err(unsupported("filter is always false", &filter)),
                None => conditions.push(self.condition(&filter)?),
            }
        }

        Ok(Condition::and_all(conditions))
    }

    fn collection_query(&mut self, ops: &Ops<'_>) -> Result<(stmt::Query, ItemReader)> {
        let (mut select, reader) = match ops.projection {
            Some(projection) => {
                let projection = projection.clone().fold()?;
                let projection = self.with_literals(|t| t.projection(&projection))?;
                (Select::new(projection.columns)?, projection.reader)
            }
            None => (Select::all(), ItemReader::Raw),
        };

        select.distinct = ops.distinct;
        select.top = ops.take;

        let mut stmt = stmt::Query::new(select);

        if !ops.order.is_empty() {
            let mut exprs = Vec::with_capacity(ops.order.len());

            for (key, direction) in &ops.order {
                let key = (*key).clone().fold()?;
                exprs.push(self.with_literals(|t| t.order_by_expr(&key, *direction))?);
            }

            stmt = stmt.with_order_by(OrderBy::new(exprs)?);
        }

        Ok((stmt, reader))
    }

    fn scalar_query(&mut self, ops: &Ops<'_>, aggregate: &Aggregate) -> Result<stmt::Query> {
        let column = match (aggregate.func, &aggregate.arg) {
            (AggregateFunc::Count, _) if ops.distinct => {
                let Some(projection) = ops.projection else {
                    return Err(Error::unsupported_expression(
                        "COUNT(DISTINCT) requires a single-column projection",
                        format!("{aggregate:?}"),
                    ));
                };
                stmt::Expr::count_distinct(self.single_column(projection)?)
            }
            (AggregateFunc::Count, _) => stmt::Expr::count_star(),
            (_, _) if ops.distinct => {
                return Err(Error::unsupported_expression(
                    "only COUNT supports DISTINCT",
                    format!("{aggregate:?}"),
                ))
            }
            (func, Some(selector)) => {
                if ops.projection.is_some() {
                    return Err(unsupported(
                        "aggregate selector after a projection",
                        selector,
                    ));
                }
                let selector = selector.clone().fold()?;
                let operand = self.with_literals(|t| t.expr(&selector))?;
                stmt::Expr::aggregate(aggregate_func(func), operand)
            }
            (func, None) => {
                let Some(projection) = ops.projection else {
                    return Err(Error::unsupported_expression(
                        "aggregate requires a selector or a single-column projection",
                        format!("{aggregate:?}"),
                    ));
                };
                stmt::Expr::aggregate(aggregate_func(func), self.single_column(projection)?)
            }
        };

        Ok(stmt::Query::new(Select::expr(column)))
    }

    /// The operand of an aggregate taken from a projection.
    fn single_column(&mut self, projection: &Expr) -> Result<stmt::Expr> {
        let projection = projection.clone().fold()?;

        let column = match &projection {
            Expr::New(ExprNew { members, .. }) => match &members[..] {
                [(_, member)] => member,
                _ => {
                    return Err(unsupported(
                        "aggregate over a projection with more than one column",
                        &projection,
                    ))
                }
            },
            column => column,
        };

        self.with_literals(|t| t.expr(column))
    }
}

fn aggregate_func(func: AggregateFunc) -> stmt::AggregateFunc {
    match func {
        AggregateFunc::Sum => stmt::AggregateFunc::Sum,
        AggregateFunc::Avg => stmt::AggregateFunc::Avg,
        AggregateFunc::Min => stmt::AggregateFunc::Min,
        AggregateFunc::Max => stmt::AggregateFunc::Max,
        AggregateFunc::Count => unreachable!("COUNT is built separately"),
    }
}
