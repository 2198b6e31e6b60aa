use crate::convert::TypeName;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot convert '{value}' to {type_name}: {reason}")]
pub struct ConversionError {
    pub type_name: TypeName,
    pub value: String,
    pub reason: String,
}

impl ConversionError {
    pub fn new(type_name: TypeName, value: &str, reason: impl Into<String>) -> Self {
        Self {
            type_name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ConversionResult<T> = Result<T, ConversionError>;
