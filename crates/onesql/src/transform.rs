//! Translation of host expressions into query statements.
//!
//! Each submodule handles one position of an expression in the query:
//! [`expr`] for plain values, [`condition`] for filters, [`select`] for
//! projections, [`order_by`] for sort keys and [`query`] for a whole query
//! description. Expressions are folded (see [`Expr::fold`]) before they are
//! translated.

mod cx;
pub use cx::ParseContext;

pub mod condition;
pub mod expr;
pub mod order_by;
pub mod query;
pub mod select;

use crate::expr::{Expr, Type};
use crate::schema::{MappingProvider, MemberId, RecordId};

use onesql_core::{
    stmt::{self, Literal, Value},
    Error, Result,
};

/// How constants are embedded in the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Constants {
    /// Registered with the parse context and referenced as `&pN`
    Params,

    /// Rendered inline
    Literals,
}

/// Translation state shared by the expression, condition, select and
/// order-by translators.
struct Transform<'a> {
    mapping: &'a dyn MappingProvider,
    cx: &'a mut ParseContext,
    constants: Constants,
}

impl<'a> Transform<'a> {
    fn new(mapping: &'a dyn MappingProvider, cx: &'a mut ParseContext, constants: Constants) -> Self {
        Self {
            mapping,
            cx,
            constants,
        }
    }

    /// Runs `f` with constants rendered inline.
    fn with_literals<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let prev = std::mem::replace(&mut self.constants, Constants::Literals);
        let ret = f(self);
        self.constants = prev;
        ret
    }

    fn constant(&mut self, value: &Value) -> Result<stmt::Expr> {
        if value.is_record() {
            return Err(Error::invalid_record_usage(
                "a record constant cannot be used as a value",
            ));
        }

        if value.is_null() {
            return Ok(Literal::null().into());
        }

        match self.constants {
            Constants::Params => Ok(stmt::Expr::param(self.cx.add(value.clone()))),
            Constants::Literals => stmt::Expr::literal(value.clone()),
        }
    }

    fn table_name(&self, id: RecordId) -> Result<String> {
        self.mapping
            .table_name(id)
            .map(str::to_string)
            .ok_or_else(|| Error::unsupported_expression("record type is not mapped", format!("{id:?}")))
    }

    fn field_name(&self, id: MemberId) -> Result<String> {
        let Some(record) = self.mapping.record(id.record) else {
            return Err(Error::unknown_field_mapping(
                format!("{:?}", id.record),
                format!("#{}", id.index),
            ));
        };

        let Some(member) = record.member(id) else {
            return Err(Error::unknown_field_mapping(
                &record.name,
                format!("#{}", id.index),
            ));
        };

        member
            .field_name
            .clone()
            .ok_or_else(|| Error::unknown_field_mapping(&record.name, &member.name))
    }

    /// Display name of a host type, for diagnostics.
    fn type_name(&self, ty: &Type) -> String {
        match ty {
            Type::Record(id) => match self.mapping.record(*id) {
                Some(record) => record.name.clone(),
                None => format!("{id:?}"),
            },
            ty => format!("{ty:?}"),
        }
    }
}

fn unsupported(message: impl Into<String>, expr: &Expr) -> Error {
    Error::unsupported_expression(message, format!("{expr:?}"))
}
