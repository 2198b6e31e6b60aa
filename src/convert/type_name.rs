use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u8 {
        const NUMERIC = 1 << 0;
        const SIGNED = 1 << 1;
        const FRACTIONAL = 1 << 2;
        const TEXTUAL = 1 << 3;
    }
}

/// Scalar types a path placeholder may declare.
///
/// The set is closed: every variant has a conversion in
/// [`convert`](crate::convert::convert), and declaration tokens are resolved
/// only through [`TypeName::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeName {
    Integer,
    Long,
    Short,
    Byte,
    Float,
    Double,
    Decimal,
    Boolean,
    Character,
    String,
}

impl TypeName {
    pub const ALL: [TypeName; 10] = [
        TypeName::Integer,
        TypeName::Long,
        TypeName::Short,
        TypeName::Byte,
        TypeName::Float,
        TypeName::Double,
        TypeName::Decimal,
        TypeName::Boolean,
        TypeName::Character,
        TypeName::String,
    ];

    pub fn resolve(token: &str) -> Option<Self> {
        let resolved = match token {
            "Integer" | "i32" => Self::Integer,
            "Long" | "i64" => Self::Long,
            "Short" | "i16" => Self::Short,
            "Byte" | "i8" => Self::Byte,
            "Float" | "f32" => Self::Float,
            "Double" | "f64" => Self::Double,
            "BigDecimal" | "Decimal" => Self::Decimal,
            "Boolean" | "bool" => Self::Boolean,
            "Character" | "char" => Self::Character,
            "String" => Self::String,
            _ => return None,
        };
        Some(resolved)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Short => "Short",
            Self::Byte => "Byte",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
            Self::Boolean => "Boolean",
            Self::Character => "Character",
            Self::String => "String",
        }
    }

    pub fn flags(&self) -> TypeFlags {
        match self {
            Self::Integer | Self::Long | Self::Short | Self::Byte => {
                TypeFlags::NUMERIC | TypeFlags::SIGNED
            }
            Self::Float | Self::Double | Self::Decimal => {
                TypeFlags::NUMERIC | TypeFlags::SIGNED | TypeFlags::FRACTIONAL
            }
            Self::Boolean => TypeFlags::empty(),
            Self::Character | Self::String => TypeFlags::TEXTUAL,
        }
    }

    /// Fractional types lose the tie-break bonus during scoring.
    #[inline]
    pub fn is_fractional(&self) -> bool {
        self.flags().contains(TypeFlags::FRACTIONAL)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamType {
    Scalar(TypeName),
    Array(TypeName),
}

impl ParamType {
    pub fn element(&self) -> TypeName {
        match self {
            Self::Scalar(type_name) | Self::Array(type_name) => *type_name,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(type_name) => write!(f, "{type_name}"),
            Self::Array(type_name) => write!(f, "{type_name}[]"),
        }
    }
}

pub(crate) fn format_types(types: &[ParamType]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_class_names_and_rust_aliases() {
        assert_eq!(TypeName::resolve("Integer"), Some(TypeName::Integer));
        assert_eq!(TypeName::resolve("i32"), Some(TypeName::Integer));
        assert_eq!(TypeName::resolve("BigDecimal"), Some(TypeName::Decimal));
        assert_eq!(TypeName::resolve("char"), Some(TypeName::Character));
        assert_eq!(TypeName::resolve("integer"), None);
        assert_eq!(TypeName::resolve("Object"), None);
    }

    #[test]
    fn only_float_double_and_decimal_are_fractional() {
        let fractional: Vec<_> = TypeName::ALL
            .iter()
            .filter(|type_name| type_name.is_fractional())
            .copied()
            .collect();
        assert_eq!(
            fractional,
            vec![TypeName::Float, TypeName::Double, TypeName::Decimal]
        );
    }

    #[test]
    fn display_names_resolve_back() {
        for type_name in TypeName::ALL {
            assert_eq!(TypeName::resolve(type_name.name()), Some(type_name));
        }
    }

    #[test]
    fn formats_signatures() {
        let types = [
            ParamType::Scalar(TypeName::Integer),
            ParamType::Array(TypeName::String),
        ];
        assert_eq!(format_types(&types), "Integer, String[]");
    }
}
