use super::{Comma, Formatter, Grouped, ToSql};

use onesql_core::stmt::{self, Literal};

impl ToSql for &stmt::Condition {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Condition::*;

        match self {
            Between(cond) => {
                let not = if cond.is_between { "" } else { " NOT" };
                fmt!(
                    f, Grouped(&cond.expr) not " BETWEEN " Grouped(&cond.start) " AND " Grouped(&cond.end)
                );
            }
            InList(cond) => {
                let not = if cond.is_in { "" } else { " NOT" };
                let hierarchy = if cond.is_hierarchy { "HIERARCHY " } else { "" };
                fmt!(
                    f, Grouped(&cond.expr) not " IN " hierarchy "(" Comma(&cond.values) ")"
                );
            }
            IsNull(cond) => {
                let test = if cond.is_null {
                    " IS NULL"
                } else {
                    " IS NOT NULL"
                };
                fmt!(f, Grouped(&cond.expr) test);
            }
            Like(cond) => {
                let not = if cond.is_like { "" } else { " NOT" };
                let pattern = Literal::string(cond.pattern.as_str());
                let escape = cond.escape.map(Literal::char);
                fmt!(f, Grouped(&cond.expr) not " LIKE " pattern.text());
                if let Some(escape) = &escape {
                    fmt!(f, " ESCAPE " escape.text());
                }
            }
            Logic(cond) => {
                fmt!(
                    f, Grouped(&*cond.lhs) " " cond.op.keyword() " " Grouped(&*cond.rhs)
                );
            }
            Not(cond) => {
                fmt!(f, "NOT " Grouped(&*cond.cond));
            }
            Refs(cond) => {
                let table = &cond.table;
                fmt!(f, Grouped(&cond.expr) " REFS " table);
            }
            Relation(cond) => {
                fmt!(
                    f, Grouped(&cond.lhs) " " cond.op.as_str() " " Grouped(&cond.rhs)
                );
            }
        }
    }
}
