use crate::Param;

use onesql_core::stmt::Value;

/// Parameters registered while translating one query.
///
/// Every registered value gets its own parameter, named with the prefix and
/// a 1-based counter: `p1`, `p2`, ... A context belongs to a single
/// compilation.
#[derive(Debug, Clone)]
pub struct ParseContext {
    prefix: String,
    params: Vec<Param>,
}

impl ParseContext {
    pub const DEFAULT_PREFIX: &'static str = "p";

    pub fn new() -> Self {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            params: vec![],
        }
    }

    /// Registers `value` and returns the name of its parameter.
    pub fn add(&mut self, value: Value) -> String {
        let name = format!("{}{}", self.prefix, self.params.len() + 1);

        self.params.push(Param {
            name: name.clone(),
            value,
        });

        name
    }

    pub fn parameters(&self) -> &[Param] {
        &self.params
    }

    pub fn into_parameters(self) -> Vec<Param> {
        self.params
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new()
    }
}
