use crate::reader::ItemReader;

use onesql_core::stmt::Value;

/// Query text plus the values of the parameters it references.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Query text. Parameters are referenced as `&name`.
    pub text: String,

    /// Parameters, in the order they were registered
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub value: Value,
}

/// The result of compiling a query description.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub command: Command,

    /// How to read each result row. `None` for aggregate queries, which
    /// return a single scalar.
    pub reader: Option<ItemReader>,
}

impl Command {
    /// Looks up a parameter value by name.
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|param| param.name == name)
            .map(|param| &param.value)
    }
}

impl CompiledQuery {
    pub fn is_scalar(&self) -> bool {
        self.reader.is_none()
    }
}
