mod args;
mod binding;
mod error;
mod invoker;
mod operation;
mod table;

pub use args::{Args, FromArg, ScalarArg};
pub use binding::HandlerBinding;
pub use error::{InvocationError, InvocationResult};
pub use invoker::{bind_arguments, invoke};
pub use operation::{IntoOperation, Operation};
pub use table::OperationTable;

pub(crate) use invoker::invoke_segments;
