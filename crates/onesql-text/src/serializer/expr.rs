use super::{Comma, Formatter, Grouped, ToSql};

use onesql_core::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Expr::*;

        match self {
            Aggregate(expr) => {
                let arg: &stmt::Expr = &expr.expr;
                fmt!(f, expr.func.name() "(" arg ")");
            }
            AllColumns => fmt!(f, "*"),
            BinaryOp(expr) => {
                // Operands are always parenthesized
                let lhs: &stmt::Expr = &expr.lhs;
                let rhs: &stmt::Expr = &expr.rhs;
                fmt!(f, "(" lhs ") " expr.op.as_str() " (" rhs ")");
            }
            Case(expr) => {
                fmt!(f, "CASE");
                for branch in &expr.branches {
                    let (when, then) = (&branch.when, &branch.then);
                    fmt!(f, " WHEN " when " THEN " then);
                }
                let default: &stmt::Expr = &expr.default;
                fmt!(f, " ELSE " default " END");
            }
            Cast(expr) => {
                let inner: &stmt::Expr = &expr.expr;
                let ty = &expr.ty;
                fmt!(f, "CAST(" inner " AS " ty ")");
            }
            ColumnGroup(expr) => {
                let fields = Comma(expr.fields.iter().map(|name| FieldRef(&expr.table, name)));
                fmt!(f, "(" fields ")");
            }
            Count(expr) => match &expr.arg {
                None => fmt!(f, "COUNT(*)"),
                Some(arg) if expr.distinct => {
                    let arg: &stmt::Expr = arg;
                    fmt!(f, "COUNT(DISTINCT " arg ")");
                }
                Some(arg) => {
                    let arg: &stmt::Expr = arg;
                    fmt!(f, "COUNT(" arg ")");
                }
            },
            DefaultTable => {}
            Field(expr) => FieldRef(&expr.table, &expr.name).to_sql(f),
            Func(expr) => {
                fmt!(f, expr.func.name() "(" Comma(&expr.args) ")");
            }
            Literal(literal) => fmt!(f, literal.text()),
            Negate(expr) => {
                fmt!(f, "-" Grouped(&*expr.expr));
            }
            Param(expr) => {
                fmt!(f, "&" expr.name.as_str());
            }
        }
    }
}

/// A field name qualified by its table, unless the table is the default one.
struct FieldRef<'a>(&'a stmt::Expr, &'a stmt::Ident);

impl ToSql for FieldRef<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let FieldRef(table, name) = self;

        if !table.is_default_table() {
            fmt!(f, Grouped(table) ".");
        }

        fmt!(f, name.as_str());
    }
}
