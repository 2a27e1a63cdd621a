use super::{Expr, Literal};

/// A call to a function built into the query language.
///
/// # Examples
///
/// ```text
/// SUBSTRING(Description, 1, 10)
/// YEAR(Date)
/// BEGINOFPERIOD(Date, MONTH)
/// ISNULL(Comment, "")
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExprFunc {
    pub func: Func,

    /// Positional arguments, in call order.
    pub args: Vec<Expr>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Func {
    Substring,
    Year,
    Quarter,
    Month,
    DayOfYear,
    Day,
    Week,
    WeekDay,
    Hour,
    Minute,
    Second,
    BeginOfPeriod,
    EndOfPeriod,
    IsNull,
}

/// Period granularity accepted by `BEGINOFPERIOD` and `ENDOFPERIOD`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PeriodKind {
    Minute,
    Hour,
    Day,
    Week,
    TenDays,
    Month,
    Quarter,
    HalfYear,
    Year,
}

impl Func {
    pub fn name(self) -> &'static str {
        match self {
            Self::Substring => "SUBSTRING",
            Self::Year => "YEAR",
            Self::Quarter => "QUARTER",
            Self::Month => "MONTH",
            Self::DayOfYear => "DAYOFYEAR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::WeekDay => "WEEKDAY",
            Self::Hour => "HOUR",
            Self::Minute => "MINUTE",
            Self::Second => "SECOND",
            Self::BeginOfPeriod => "BEGINOFPERIOD",
            Self::EndOfPeriod => "ENDOFPERIOD",
            Self::IsNull => "ISNULL",
        }
    }

    /// Number of arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Substring => 3,
            Self::BeginOfPeriod | Self::EndOfPeriod | Self::IsNull => 2,
            _ => 1,
        }
    }
}

impl PeriodKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Minute => "MINUTE",
            Self::Hour => "HOUR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::TenDays => "TENDAYS",
            Self::Month => "MONTH",
            Self::Quarter => "QUARTER",
            Self::HalfYear => "HALFYEAR",
            Self::Year => "YEAR",
        }
    }
}

impl Expr {
    #[track_caller]
    pub fn func(func: Func, args: Vec<Expr>) -> Self {
        assert_eq!(
            func.arity(),
            args.len(),
            "wrong number of arguments for {}",
            func.name()
        );
        ExprFunc { func, args }.into()
    }

    pub fn substring(source: impl Into<Self>, start: impl Into<Self>, len: impl Into<Self>) -> Self {
        Self::func(Func::Substring, vec![source.into(), start.into(), len.into()])
    }

    pub fn begin_of_period(date: impl Into<Self>, kind: PeriodKind) -> Self {
        Self::func(
            Func::BeginOfPeriod,
            vec![date.into(), Literal::period(kind).into()],
        )
    }

    pub fn end_of_period(date: impl Into<Self>, kind: PeriodKind) -> Self {
        Self::func(
            Func::EndOfPeriod,
            vec![date.into(), Literal::period(kind).into()],
        )
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
