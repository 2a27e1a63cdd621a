mod builder;
pub use builder::Builder;

use crate::expr::Expr;
use crate::query::Query;
use crate::schema::MappingProvider;
use crate::transform::{self, ParseContext};
use crate::{Command, CompiledQuery, Param};

use onesql_core::{stmt::Ident, Result};
use onesql_text::Serializer;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Compiles query descriptions into commands.
///
/// A compiler holds no per-query state and can be shared between threads.
/// Each call gets a fresh [`ParseContext`], so compiling the same
/// description twice yields the same text and parameter names.
#[derive(Clone)]
pub struct Compiler {
    mapping: Arc<dyn MappingProvider>,
    parameter_prefix: String,
    serializer: Serializer,
}

impl Compiler {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A compiler with default options.
    pub fn new(mapping: impl MappingProvider + 'static) -> Self {
        Self::builder().build(mapping)
    }

    pub fn mapping(&self) -> &dyn MappingProvider {
        &*self.mapping
    }

    #[instrument(level = "trace", skip_all)]
    pub fn compile(&self, query: &Query) -> Result<CompiledQuery> {
        let mut cx = self.parse_context();
        let (stmt, reader) = transform::query::transform(query, self.mapping(), &mut cx)?;
        let text = self.serializer.serialize(&stmt);

        debug!(%text, params = cx.parameters().len(), "compiled query");
        debug_assert!(
            params_match(&stmt.param_refs(), cx.parameters()),
            "text={text}; params={:?}",
            cx.parameters()
        );

        Ok(CompiledQuery {
            command: Command {
                text,
                params: cx.into_parameters(),
            },
            reader,
        })
    }

    /// Compiles a predicate on its own, yielding the text of a `WHERE`
    /// condition.
    #[instrument(level = "trace", skip_all)]
    pub fn compile_condition(&self, predicate: &Expr) -> Result<Command> {
        let mut cx = self.parse_context();
        let cond = transform::condition::transform(predicate, self.mapping(), &mut cx)?;
        let text = self.serializer.serialize_condition(&cond);

        debug!(%text, params = cx.parameters().len(), "compiled condition");
        debug_assert!(
            params_match(&cond.param_refs(), cx.parameters()),
            "text={text}; params={:?}",
            cx.parameters()
        );

        Ok(Command {
            text,
            params: cx.into_parameters(),
        })
    }

    fn parse_context(&self) -> ParseContext {
        ParseContext::with_prefix(&self.parameter_prefix)
    }
}

/// Each registered parameter is referenced exactly once, and the text
/// references them in registration order.
fn params_match(refs: &[Ident], params: &[Param]) -> bool {
    refs.len() == params.len()
        && refs
            .iter()
            .zip(params)
            .all(|(name, param)| *name == Ident::new(&param.name))
}

impl std::fmt::Debug for Compiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compiler")
            .field("parameter_prefix", &self.parameter_prefix)
            .finish_non_exhaustive()
    }
}
