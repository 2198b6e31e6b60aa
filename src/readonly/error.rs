use crate::handler::InvocationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadOnlyError {
    #[error("no route matched path '{path}'")]
    RouteNotFound { path: String },
    #[error(transparent)]
    Invocation(#[from] InvocationError),
}

pub type ReadOnlyResult<T> = Result<T, ReadOnlyError>;
