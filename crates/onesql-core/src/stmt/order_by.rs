use super::OrderByExpr;
use crate::{Error, Result};

/// `ORDER BY` clause. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderBy {
    exprs: Vec<OrderByExpr>,
}

impl OrderBy {
    pub fn new(exprs: Vec<OrderByExpr>) -> Result<Self> {
        if exprs.is_empty() {
            return Err(Error::invalid_statement("ORDER BY list is empty"));
        }
        Ok(Self { exprs })
    }

    pub fn exprs(&self) -> &[OrderByExpr] {
        &self.exprs
    }
}

impl From<OrderByExpr> for OrderBy {
    fn from(value: OrderByExpr) -> Self {
        Self { exprs: vec![value] }
    }
}
