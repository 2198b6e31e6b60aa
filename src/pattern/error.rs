use crate::convert::{ParamType, format_types};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unknown parameter type '{type_name}' in segment '{segment}'")]
    UnknownParameterType { segment: String, type_name: String },
    #[error("array must be last: segment '{segment}' is at position {index} in '{path}'")]
    ArrayNotLast {
        path: String,
        segment: String,
        index: usize,
    },
    #[error(
        "parameter count/order mismatch in '{path}': pattern declares [{}], operation expects [{}]",
        format_types(.found),
        format_types(.expected)
    )]
    ParameterMismatch {
        path: String,
        expected: Vec<ParamType>,
        found: Vec<ParamType>,
    },
    #[error("path '{path}' has {count} segments, more than the limit of {max}")]
    TooManySegments {
        path: String,
        count: usize,
        max: usize,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
