mod decimal;
mod error;
mod registry;
mod type_name;
mod value;

pub use decimal::Decimal;
pub use error::{ConversionError, ConversionResult};
pub use registry::{convert, is_convertible};
pub use type_name::{ParamType, TypeFlags, TypeName};
pub use value::Value;

pub(crate) use type_name::format_types;
