pub mod convert;
pub mod handler;
pub mod path;
pub mod pattern;
pub mod readonly;
pub mod router;
pub mod types;

pub use convert::{ConversionError, Decimal, ParamType, TypeName, Value};
pub use handler::{
    Args, FromArg, HandlerBinding, InvocationError, InvocationResult, Operation, OperationTable,
};
pub use pattern::{CompiledPattern, PatternError, ScoringMode, Segment, compile, score};
pub use readonly::{ReadOnlyError, RouterReadOnly};
pub use router::{
    Route, RouteMatch, Router, RouterError, RouterOptions, RouterOptionsBuilder,
    RouterOptionsError, RouterResult, TieBreak,
};
pub use types::{BoxError, RouteId};
