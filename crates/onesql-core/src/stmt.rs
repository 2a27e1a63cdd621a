mod cond_between;
pub use cond_between::CondBetween;

mod cond_in_list;
pub use cond_in_list::CondInList;

mod cond_is_null;
pub use cond_is_null::CondIsNull;

mod cond_like;
pub use cond_like::CondLike;

mod cond_logic;
pub use cond_logic::CondLogic;

mod cond_not;
pub use cond_not::CondNot;

mod cond_refs;
pub use cond_refs::CondRefs;

mod cond_relation;
pub use cond_relation::CondRelation;

mod condition;
pub use condition::Condition;

mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_aggregate;
pub use expr_aggregate::{AggregateFunc, ExprAggregate};

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_case;
pub use expr_case::{CaseBranch, ExprCase};

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_column_group;
pub use expr_column_group::ExprColumnGroup;

mod expr_count;
pub use expr_count::ExprCount;

mod expr_field;
pub use expr_field::ExprField;

mod expr_func;
pub use expr_func::{ExprFunc, Func, PeriodKind};

mod expr_negate;
pub use expr_negate::ExprNegate;

mod expr_param;
pub use expr_param::ExprParam;

mod filter;
pub use filter::Filter;

mod ident;
pub use ident::Ident;

mod literal;
pub use literal::Literal;

mod op_binary;
pub use op_binary::BinaryOp;

mod op_logic;
pub use op_logic::LogicOp;

mod op_relation;
pub use op_relation::RelationOp;

mod order_by;
pub use order_by::OrderBy;

mod order_by_expr;
pub use order_by_expr::OrderByExpr;

mod query;
pub use query::Query;

mod select;
pub use select::Select;

mod source;
pub use source::Source;

mod ty;
pub use ty::{NumberSize, Type};

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;

pub mod visit;
pub use visit::Visit;
