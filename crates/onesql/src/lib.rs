//! Compiles typed expression trees into queries of the 1C query language.
//!
//! ```
//! use onesql::{expr::Expr, query::Query, schema::Schema, Compiler};
//!
//! let compiler = Compiler::new(Schema::default());
//!
//! let r = Expr::data_record();
//! let query = Query::from_table("Catalog.Goods")
//!     .filter(Expr::eq(Expr::get_string(r, "Code"), "A-1"));
//!
//! let compiled = compiler.compile(&query).unwrap();
//! assert_eq!(compiled.command.text, "SELECT * FROM Catalog.Goods WHERE Code = &p1");
//! ```

mod command;
pub use command::{Command, CompiledQuery, Param};

pub mod compiler;
pub use compiler::Compiler;

mod eval;

pub mod expr;

pub mod query;

pub mod reader;
pub use reader::ItemReader;

pub mod schema;

pub mod transform;

pub use onesql_core::{stmt, Error, Result};
