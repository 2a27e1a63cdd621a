use super::{Formatter, ToSql};

use onesql_core::stmt;

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// Delimited by an arbitrary separator
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

/// Parenthesized when the node renders with top-level whitespace
pub(super) struct Grouped<T>(pub(super) T);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        Delimited(self.0, ", ").to_sql(f);
    }
}

impl<L> ToSql for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = self.1;
        }
    }
}

impl ToSql for Grouped<&stmt::Expr> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.0.has_spaces() {
            fmt!(f, "(" self.0 ")");
        } else {
            self.0.to_sql(f);
        }
    }
}

impl ToSql for Grouped<&stmt::Condition> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.0.has_spaces() {
            fmt!(f, "(" self.0 ")");
        } else {
            self.0.to_sql(f);
        }
    }
}
