use super::{Formatter, ToSql};

use onesql_core::stmt;

impl ToSql for &stmt::Type {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Type::Boolean => fmt!(f, "BOOLEAN"),
            stmt::Type::Date => fmt!(f, "DATE"),
            stmt::Type::Number(None) => fmt!(f, "NUMBER"),
            stmt::Type::Number(Some(size)) => match size.precision {
                Some(precision) => fmt!(f, "NUMBER(" size.length ", " precision ")"),
                None => fmt!(f, "NUMBER(" size.length ")"),
            },
            stmt::Type::String(None) => fmt!(f, "STRING"),
            &stmt::Type::String(Some(length)) => fmt!(f, "STRING(" length ")"),
            stmt::Type::Table(name) => fmt!(f, name),
        }
    }
}
