use crate::convert::{ParamType, TypeName};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Sole segment of the `/` pattern.
    Root,
    Literal(String),
    Typed(TypeName),
    TypedArray(TypeName),
}

impl Segment {
    pub fn is_array(&self) -> bool {
        matches!(self, Self::TypedArray(_))
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Typed(_) | Self::TypedArray(_))
    }

    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            _ => None,
        }
    }

    pub fn param_type(&self) -> Option<ParamType> {
        match self {
            Self::Typed(type_name) => Some(ParamType::Scalar(*type_name)),
            Self::TypedArray(type_name) => Some(ParamType::Array(*type_name)),
            Self::Root | Self::Literal(_) => None,
        }
    }
}
