use super::Expr;
use crate::{Error, Result};

/// The `SELECT` fragment: modifiers plus the column set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Select {
    /// `SELECT DISTINCT`
    pub distinct: bool,

    /// `SELECT TOP n`
    pub top: Option<u64>,

    /// Never empty. `SELECT *` is a single [`Expr::AllColumns`].
    columns: Vec<Expr>,
}

impl Select {
    /// `SELECT *`
    pub fn all() -> Self {
        Self {
            distinct: false,
            top: None,
            columns: vec![Expr::AllColumns],
        }
    }

    pub fn new(columns: Vec<Expr>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::invalid_statement("column list is empty"));
        }

        Ok(Self {
            distinct: false,
            top: None,
            columns,
        })
    }

    /// Selects a single expression, e.g. an aggregate.
    pub fn expr(expr: impl Into<Expr>) -> Self {
        Self {
            distinct: false,
            top: None,
            columns: vec![expr.into()],
        }
    }

    pub fn columns(&self) -> &[Expr] {
        &self.columns
    }

    pub fn is_all_columns(&self) -> bool {
        matches!(&self.columns[..], [Expr::AllColumns])
    }
}
