//! Projections.

use super::{Constants, ParseContext, Transform};
use crate::expr::{Expr, ExprNew};
use crate::reader::{ColumnReader, ItemReader, ValueKind};
use crate::schema::MappingProvider;

use onesql_core::{stmt, Error, Result};

/// The columns of a projection and the reader rebuilding its output.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub columns: Vec<stmt::Expr>,
    pub reader: ItemReader,
}

/// Translates a projection: a record construction with one column per
/// member, or a single scalar expression.
pub fn transform(
    expr: &Expr,
    mapping: &dyn MappingProvider,
    cx: &mut ParseContext,
) -> Result<Projection> {
    let expr = expr.clone().fold()?;
    Transform::new(mapping, cx, Constants::Literals).projection(&expr)
}

impl Transform<'_> {
    pub(super) fn projection(&mut self, expr: &Expr) -> Result<Projection> {
        match expr {
            Expr::New(new) => self.projection_record(new),
            _ if expr.ty().is_record() => Err(Error::invalid_record_usage(
                "a projection cannot return a whole record",
            )),
            _ => {
                let column = self.expr(expr)?;
                let reader = ColumnReader {
                    name: None,
                    position: 0,
                    kind: ValueKind::from_ty(&expr.ty()),
                };

                Ok(Projection {
                    columns: vec![column],
                    reader: ItemReader::Scalar(reader),
                })
            }
        }
    }

    fn projection_record(&mut self, new: &ExprNew) -> Result<Projection> {
        if new.members.is_empty() {
            return Err(Error::invalid_statement("projection has no members"));
        }

        let mut columns = Vec::with_capacity(new.members.len());
        let mut readers = Vec::with_capacity(new.members.len());

        for (position, (name, member)) in new.members.iter().enumerate() {
            let ty = member.ty();

            if ty.is_record() {
                return Err(Error::invalid_record_usage(format!(
                    "member `{name}` of the projection is a whole record"
                )));
            }

            columns.push(self.expr(member)?);
            readers.push(ColumnReader {
                name: Some(name.clone()),
                position,
                kind: ValueKind::from_ty(&ty),
            });
        }

        Ok(Projection {
            columns,
            reader: ItemReader::Record(readers),
        })
    }
}
