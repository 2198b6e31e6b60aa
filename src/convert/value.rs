use crate::convert::{Decimal, ParamType, TypeName};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i32),
    Long(i64),
    Short(i16),
    Byte(i8),
    Float(f32),
    Double(f64),
    Decimal(Decimal),
    Boolean(bool),
    Character(char),
    String(String),
    Array(TypeName, Vec<Value>),
}

impl Value {
    pub fn type_name(&self) -> TypeName {
        match self {
            Self::Integer(_) => TypeName::Integer,
            Self::Long(_) => TypeName::Long,
            Self::Short(_) => TypeName::Short,
            Self::Byte(_) => TypeName::Byte,
            Self::Float(_) => TypeName::Float,
            Self::Double(_) => TypeName::Double,
            Self::Decimal(_) => TypeName::Decimal,
            Self::Boolean(_) => TypeName::Boolean,
            Self::Character(_) => TypeName::Character,
            Self::String(_) => TypeName::String,
            Self::Array(element, _) => *element,
        }
    }

    pub fn param_type(&self) -> ParamType {
        match self {
            Self::Array(element, _) => ParamType::Array(*element),
            scalar => ParamType::Scalar(scalar.type_name()),
        }
    }
}
