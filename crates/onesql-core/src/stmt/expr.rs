use super::*;

/// A value expression of the query language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// `SUM`, `AVG`, `MIN`, `MAX`
    Aggregate(ExprAggregate),

    /// `*`, every column of the source
    AllColumns,

    /// Arithmetic
    BinaryOp(ExprBinaryOp),

    /// `CASE WHEN .. END`
    Case(ExprCase),

    /// `CAST(expr AS type)`
    Cast(ExprCast),

    /// Parenthesized list of fields of one table
    ColumnGroup(ExprColumnGroup),

    /// `COUNT`
    Count(ExprCount),

    /// The implicit table of a single-source query. Fields of this table
    /// render without a prefix.
    DefaultTable,

    /// Field of a table expression
    Field(ExprField),

    /// Built-in function call
    Func(ExprFunc),

    /// Constant embedded in the text
    Literal(Literal),

    /// Unary minus
    Negate(ExprNegate),

    /// Named parameter reference
    Param(ExprParam),
}

impl Expr {
    pub fn all_columns() -> Self {
        Self::AllColumns
    }

    pub fn is_all_columns(&self) -> bool {
        matches!(self, Self::AllColumns)
    }

    pub fn is_default_table(&self) -> bool {
        matches!(self, Self::DefaultTable)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns `true` when the rendered expression contains top-level
    /// whitespace and must be parenthesized when embedded in a larger
    /// expression.
    ///
    /// Function-call shaped nodes (`CAST(..)`, `COUNT(..)`), `CASE .. END` and
    /// quoted literals are self-delimiting.
    pub fn has_spaces(&self) -> bool {
        match self {
            Self::BinaryOp(_) => true,
            Self::Aggregate(_)
            | Self::AllColumns
            | Self::Case(_)
            | Self::Cast(_)
            | Self::ColumnGroup(_)
            | Self::Count(_)
            | Self::DefaultTable
            | Self::Field(_)
            | Self::Func(_)
            | Self::Literal(_)
            | Self::Negate(_)
            | Self::Param(_) => false,
        }
    }
}
