use crate::convert::{ConversionError, ConversionResult, Decimal, TypeName, Value};
use std::fmt::Display;
use std::str::FromStr;

/// Converts one path segment to a value of `type_name`.
///
/// This is the single conversion table for every supported type; scoring and
/// argument binding both go through it.
pub fn convert(type_name: TypeName, text: &str) -> ConversionResult<Value> {
    match type_name {
        TypeName::Integer => parse_number::<i32>(type_name, text).map(Value::Integer),
        TypeName::Long => parse_number::<i64>(type_name, text).map(Value::Long),
        TypeName::Short => parse_number::<i16>(type_name, text).map(Value::Short),
        TypeName::Byte => parse_number::<i8>(type_name, text).map(Value::Byte),
        TypeName::Float => parse_number::<f32>(type_name, text).map(Value::Float),
        TypeName::Double => parse_number::<f64>(type_name, text).map(Value::Double),
        TypeName::Decimal => text.parse::<Decimal>().map(Value::Decimal),
        TypeName::Boolean => Ok(Value::Boolean(text.eq_ignore_ascii_case("true"))),
        TypeName::Character => parse_character(text).map(Value::Character),
        TypeName::String => Ok(Value::String(text.to_string())),
    }
}

#[inline]
pub fn is_convertible(type_name: TypeName, text: &str) -> bool {
    match type_name {
        // both accept any text
        TypeName::Boolean | TypeName::String => true,
        TypeName::Character => parse_character(text).is_ok(),
        _ => convert(type_name, text).is_ok(),
    }
}

fn parse_number<T>(type_name: TypeName, text: &str) -> ConversionResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    text.parse::<T>()
        .map_err(|err| ConversionError::new(type_name, text, err.to_string()))
}

fn parse_character(text: &str) -> ConversionResult<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        (None, _) => Err(ConversionError::new(
            TypeName::Character,
            text,
            "expected one character, found none",
        )),
        _ => Err(ConversionError::new(
            TypeName::Character,
            text,
            "expected exactly one character",
        )),
    }
}
