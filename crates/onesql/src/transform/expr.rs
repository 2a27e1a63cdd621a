//! Value expressions.

use super::{unsupported, Constants, ParseContext, Transform};
use crate::expr::{
    BinaryOp, Expr, ExprBinary, ExprCall, ExprConditional, ExprConvert, ExprMember, MemberRef,
    Method, Type, UnaryOp,
};
use crate::schema::MappingProvider;

use onesql_core::{
    stmt::{self, CaseBranch, Func},
    Error, Result,
};

/// Translates a scalar expression. Constants are rendered inline.
pub fn transform(
    expr: &Expr,
    mapping: &dyn MappingProvider,
    cx: &mut ParseContext,
) -> Result<stmt::Expr> {
    let expr = expr.clone().fold()?;
    Transform::new(mapping, cx, Constants::Literals).expr(&expr)
}

impl Transform<'_> {
    pub(super) fn expr(&mut self, expr: &Expr) -> Result<stmt::Expr> {
        match expr {
            Expr::Binary(e) => self.expr_binary(e, expr),
            Expr::Call(e) => self.expr_call(e, expr),
            Expr::Conditional(e) => self.expr_conditional(e),
            Expr::Constant(e) => self.constant(&e.value),
            Expr::Convert(e) => self.expr_convert(e),
            Expr::Input(_) => Err(Error::invalid_record_usage(
                "the query input is a whole record",
            )),
            Expr::Member(e) => self.expr_member(e),
            Expr::New(_) => Err(Error::invalid_record_usage(
                "a constructed record cannot be used as a value",
            )),
            Expr::NewArray(_) => Err(unsupported(
                "an array is only accepted as the value list of an IN test",
                expr,
            )),
            Expr::TypeIs(_) => Err(unsupported("type test used as a value", expr)),
            Expr::Unary(e) => match e.op {
                UnaryOp::Negate => Ok(stmt::Expr::negate(self.expr(&e.expr)?)),
                UnaryOp::Not => Err(unsupported("logical NOT used as a value", expr)),
            },
        }
    }

    /// Translates the table part of a member access: the input record,
    /// another record-typed member, or a conversion to a record type.
    pub(super) fn table(&mut self, expr: &Expr) -> Result<stmt::Expr> {
        match expr {
            Expr::Input(input) if input.ty.is_record() => Ok(stmt::Expr::DefaultTable),
            Expr::Member(member) if member.ty.is_record() => self.expr_member(member),
            Expr::Convert(convert) if convert.ty.as_record().is_some() => {
                self.expr_convert(convert)
            }
            Expr::Call(ExprCall {
                method: Method::ToRecord(_),
                ..
            }) => self.expr(expr),
            _ => Err(unsupported("members can only be read from records", expr)),
        }
    }

    fn expr_binary(&mut self, e: &ExprBinary, expr: &Expr) -> Result<stmt::Expr> {
        let op = match e.op {
            BinaryOp::Add => stmt::BinaryOp::Add,
            BinaryOp::Sub => stmt::BinaryOp::Sub,
            BinaryOp::Mul => stmt::BinaryOp::Mul,
            BinaryOp::Div => stmt::BinaryOp::Div,
            BinaryOp::Coalesce => {
                let lhs = self.expr(&e.lhs)?;
                let rhs = self.expr(&e.rhs)?;
                return Ok(stmt::Expr::func(Func::IsNull, vec![lhs, rhs]));
            }
            _ => return Err(unsupported("condition used as a value", expr)),
        };

        let lhs = self.expr(&e.lhs)?;
        let rhs = self.expr(&e.rhs)?;
        Ok(stmt::Expr::binary_op(lhs, op, rhs))
    }

    fn expr_call(&mut self, e: &ExprCall, expr: &Expr) -> Result<stmt::Expr> {
        match (e.method, &e.args[..]) {
            (Method::GetValue(_), [record, name]) => {
                let table = self.table(record)?;
                let Some(name) = name.as_constant().and_then(|c| c.value.as_str()) else {
                    return Err(unsupported("field name must be a constant string", expr));
                };
                Ok(stmt::Expr::field_of(table, name))
            }
            (Method::ToNumber, [x, length]) => {
                let ty = stmt::Type::integer(self.size(length)?);
                Ok(stmt::Expr::cast(self.expr(x)?, ty))
            }
            (Method::ToDecimal, [x, length, precision]) => {
                let ty = stmt::Type::decimal(self.size(length)?, self.size(precision)?);
                Ok(stmt::Expr::cast(self.expr(x)?, ty))
            }
            (Method::ToString, [x, length]) => {
                let ty = stmt::Type::string_sized(self.size(length)?);
                Ok(stmt::Expr::cast(self.expr(x)?, ty))
            }
            (Method::ToRecord(id), [x]) => {
                let ty = stmt::Type::table(self.table_name(id)?);
                Ok(stmt::Expr::cast(self.expr(x)?, ty))
            }
            (Method::Substring, [source, start, length]) => {
                let source = self.expr(source)?;
                let start = self.expr(start)?;
                let length = self.expr(length)?;
                Ok(stmt::Expr::substring(source, start, length))
            }
            (Method::DatePart(part), [date]) => {
                Ok(stmt::Expr::func(part.func(), vec![self.expr(date)?]))
            }
            (Method::BeginOfPeriod(kind), [date]) => {
                Ok(stmt::Expr::begin_of_period(self.expr(date)?, kind))
            }
            (Method::EndOfPeriod(kind), [date]) => {
                Ok(stmt::Expr::end_of_period(self.expr(date)?, kind))
            }
            (method, _) if method.is_predicate() => {
                Err(unsupported("predicate used as a value", expr))
            }
            _ => Err(unsupported("wrong number of arguments", expr)),
        }
    }

    /// `c1 ? v1 : c2 ? v2 : d` becomes one `CASE` with a branch per test.
    fn expr_conditional(&mut self, e: &ExprConditional) -> Result<stmt::Expr> {
        let mut branches = vec![];
        let mut next = e;

        let default = loop {
            let when = self.condition(&next.test)?;
            let then = self.expr(&next.then)?;
            branches.push(CaseBranch::new(when, then));

            match &*next.otherwise {
                Expr::Conditional(e) => next = e,
                otherwise => break self.expr(otherwise)?,
            }
        };

        stmt::Expr::case(branches, default)
    }

    fn expr_convert(&mut self, e: &ExprConvert) -> Result<stmt::Expr> {
        let source = e.expr.ty();

        if e.ty.is_object() || source == e.ty {
            return self.expr(&e.expr);
        }

        if source.is_object() {
            let ty = self.cast_type(&e.ty)?;
            return Ok(stmt::Expr::cast(self.expr(&e.expr)?, ty));
        }

        // Widening between numeric types
        if source.is_numeric() && e.ty.is_numeric() {
            return self.expr(&e.expr);
        }

        Err(Error::type_cast_not_supported(self.type_name(&e.ty)))
    }

    /// Query type corresponding to the target of a conversion.
    fn cast_type(&self, ty: &Type) -> Result<stmt::Type> {
        Ok(match ty {
            Type::Bool => stmt::Type::Boolean,
            Type::DateTime => stmt::Type::Date,
            Type::String => stmt::Type::string(),
            ty if ty.is_numeric() => stmt::Type::number(),
            Type::Record(id) => stmt::Type::table(self.table_name(*id)?),
            ty => return Err(Error::type_cast_not_supported(self.type_name(ty))),
        })
    }

    fn expr_member(&mut self, e: &ExprMember) -> Result<stmt::Expr> {
        match e.member {
            MemberRef::Field(id) => {
                let table = self.table(&e.base)?;
                let name = self.field_name(id)?;
                Ok(stmt::Expr::field_of(table, name))
            }
            MemberRef::DatePart(part) => {
                Ok(stmt::Expr::func(part.func(), vec![self.expr(&e.base)?]))
            }
        }
    }

    /// Length or precision argument of a conversion.
    fn size(&self, expr: &Expr) -> Result<u32> {
        match expr.as_constant() {
            Some(constant) => constant.value.to_u32(),
            None => Err(unsupported("size argument must be a constant", expr)),
        }
    }
}
