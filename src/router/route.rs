use crate::handler::{HandlerBinding, Operation};
use crate::pattern::{CompileOptions, CompiledPattern, PatternResult, compile_with};
use crate::types::RouteId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    id: RouteId,
    pattern: CompiledPattern,
    binding: HandlerBinding,
}

impl Route {
    /// Compiles `path` against the signature of `operation` and binds the two.
    pub fn compile<R, O>(
        id: RouteId,
        path: &str,
        operation: &Operation<R, O>,
        options: &CompileOptions,
    ) -> PatternResult<Self> {
        let pattern = compile_with(path, operation.signature(), options)?;
        let binding = HandlerBinding::new(operation.name(), pattern.parameter_types().to_vec());
        Ok(Self {
            id,
            pattern,
            binding,
        })
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    pub fn binding(&self) -> &HandlerBinding {
        &self.binding
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteMatch {
    pub id: RouteId,
    pub score: u32,
}
