#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Grouped};

// Fragment serializers
mod condition;
mod expr;
mod statement;
mod ty;

use onesql_core::stmt;

/// Renders query statements, and their fragments, to query text.
///
/// Parameters are already named in the statement, so serializing is a pure
/// function of the AST.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized text
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serialize(&self, stmt: &stmt::Query) -> String {
        self.render(stmt)
    }

    pub fn serialize_expr(&self, expr: &stmt::Expr) -> String {
        self.render(expr)
    }

    pub fn serialize_condition(&self, cond: &stmt::Condition) -> String {
        self.render(cond)
    }

    pub fn serialize_type(&self, ty: &stmt::Type) -> String {
        self.render(ty)
    }

    fn render(&self, node: impl ToSql) -> String {
        let mut ret = String::new();
        let mut f = Formatter { dst: &mut ret };
        node.to_sql(&mut f);
        ret
    }
}
