use crate::convert::{ConversionError, ParamType, TypeName, format_types};
use crate::types::BoxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("could not convert path segment")]
    Conversion(#[from] ConversionError),
    #[error("request path has no segment at position {index} for a {type_name} parameter")]
    MissingSegment { index: usize, type_name: TypeName },
    #[error("operation '{name}' is not registered")]
    UnknownOperation { name: String },
    #[error(
        "operation '{operation}' takes [{}] but the binding supplies [{}]",
        format_types(.expected),
        format_types(.found)
    )]
    SignatureMismatch {
        operation: String,
        expected: Vec<ParamType>,
        found: Vec<ParamType>,
    },
    #[error("operation '{operation}' takes {expected} arguments, got {found}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        found: usize,
    },
    #[error("argument {position} of type {expected} is missing")]
    MissingArgument { position: usize, expected: ParamType },
    #[error("argument {position} expected {expected}, found {found}")]
    ArgumentType {
        position: usize,
        expected: ParamType,
        found: ParamType,
    },
    #[error("operation '{operation}' failed")]
    Failed {
        operation: String,
        #[source]
        source: BoxError,
    },
}

impl InvocationError {
    pub(crate) fn failed(operation: &str, source: impl Into<BoxError>) -> Self {
        Self::Failed {
            operation: operation.to_string(),
            source: source.into(),
        }
    }
}

pub type InvocationResult<T> = Result<T, InvocationError>;
