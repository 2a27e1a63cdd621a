use super::{Comma, Formatter, ToSql};

use onesql_core::stmt;

impl ToSql for &stmt::Query {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let source = self.source.as_ref().map(|source| (" FROM ", &source.name));
        let filter = self.filter.as_ref().map(|filter| (" WHERE ", filter));
        let order_by = self.order_by.as_ref().map(|order_by| (" ORDER BY ", order_by));

        fmt!(f, &self.select source filter order_by);
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let distinct = if self.distinct { "DISTINCT " } else { "" };
        let top = self.top.map(|n| ("TOP ", n, " "));

        fmt!(f, "SELECT " distinct top Comma(self.columns()));
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, &self.condition);
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Comma(self.exprs()));
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, &self.expr);

        if self.direction.is_desc() {
            fmt!(f, " DESC");
        }
    }
}
