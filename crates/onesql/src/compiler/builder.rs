use super::Compiler;
use crate::schema::MappingProvider;
use crate::transform::ParseContext;

use onesql_text::Serializer;
use std::sync::Arc;

#[derive(Debug)]
pub struct Builder {
    /// Prefix of generated parameter names
    parameter_prefix: String,
}

impl Builder {
    /// Sets the prefix of generated parameter names. Defaults to `p`, giving
    /// `p1`, `p2`, ...
    pub fn parameter_prefix(&mut self, prefix: &str) -> &mut Self {
        self.parameter_prefix = prefix.to_string();
        self
    }

    pub fn build(&self, mapping: impl MappingProvider + 'static) -> Compiler {
        Compiler {
            mapping: Arc::new(mapping),
            parameter_prefix: self.parameter_prefix.clone(),
            serializer: Serializer::new(),
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            parameter_prefix: ParseContext::DEFAULT_PREFIX.to_string(),
        }
    }
}
