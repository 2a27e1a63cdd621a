use crate::expr::Expr;
use crate::schema::RecordId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Untyped records of a named table, read with `get_*` accessors
    Table(String),

    /// A mapped record type; the table comes from the mapping
    Record(RecordId),
}

impl Source {
    pub fn input(&self) -> Expr {
        match *self {
            Self::Table(_) => Expr::data_record(),
            Self::Record(id) => Expr::record(id),
        }
    }
}
