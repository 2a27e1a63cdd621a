use super::{DatePart, Expr, Type};
use crate::schema::{Member, MemberId};

#[derive(Debug, Clone, PartialEq)]
pub struct ExprMember {
    pub base: Box<Expr>,
    pub member: MemberRef,
    pub ty: Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberRef {
    /// Member of a mapped record
    Field(MemberId),

    /// Part of a date value, `date.year`, `date.month`, ...
    DatePart(DatePart),
}

impl Expr {
    /// Access `member` of `base`. `base` is the input, another record-typed
    /// member, or a conversion to the member's record type.
    pub fn member(base: impl Into<Self>, member: &Member) -> Self {
        ExprMember {
            base: Box::new(base.into()),
            member: MemberRef::Field(member.id),
            ty: member.ty.clone(),
        }
        .into()
    }

    pub fn date_part(date: impl Into<Self>, part: DatePart) -> Self {
        ExprMember {
            base: Box::new(date.into()),
            member: MemberRef::DatePart(part),
            ty: Type::I32,
        }
        .into()
    }
}

impl From<ExprMember> for Expr {
    fn from(value: ExprMember) -> Self {
        Self::Member(value)
    }
}
