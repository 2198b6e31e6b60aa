use crate::convert::ParamType;

/// The operation a compiled pattern dispatches to, with the signature the
/// pattern was compiled against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerBinding {
    operation_name: Box<str>,
    parameter_types: Vec<ParamType>,
}

impl HandlerBinding {
    pub fn new(operation_name: impl Into<String>, parameter_types: Vec<ParamType>) -> Self {
        Self {
            operation_name: operation_name.into().into_boxed_str(),
            parameter_types,
        }
    }

    pub fn operation_name(&self) -> &str {
        &self.operation_name
    }

    pub fn parameter_types(&self) -> &[ParamType] {
        &self.parameter_types
    }
}
