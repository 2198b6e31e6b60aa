mod errors;
mod options;
mod route;
mod service;

pub use crate::readonly::RouterReadOnly;
pub use errors::{RouterError, RouterResult};
pub use options::{RouterOptions, RouterOptionsBuilder, RouterOptionsError, TieBreak};
pub use route::{Route, RouteMatch};
pub use service::Router;
