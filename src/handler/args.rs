use crate::convert::{Decimal, ParamType, TypeName, Value};
use smallvec::SmallVec;

use super::{InvocationError, InvocationResult};

/// A Rust type an operation parameter can be declared as.
///
/// The associated [`ParamType`] is what a route pattern must declare in the
/// same position for the operation to be bindable.
pub trait FromArg: Sized {
    fn param_type() -> ParamType;

    fn from_value(value: Value) -> Option<Self>;
}

/// Scalar parameter types; `Vec<T>` of these is an array parameter.
pub trait ScalarArg: FromArg {
    const TYPE_NAME: TypeName;
}

macro_rules! scalar_arg {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromArg for $ty {
                fn param_type() -> ParamType {
                    ParamType::Scalar(TypeName::$variant)
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl ScalarArg for $ty {
                const TYPE_NAME: TypeName = TypeName::$variant;
            }
        )*
    };
}

scalar_arg! {
    i32 => Integer,
    i64 => Long,
    i16 => Short,
    i8 => Byte,
    f32 => Float,
    f64 => Double,
    Decimal => Decimal,
    bool => Boolean,
    char => Character,
    String => String,
}

impl<T: ScalarArg> FromArg for Vec<T> {
    fn param_type() -> ParamType {
        ParamType::Array(T::TYPE_NAME)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Array(element, items) if element == T::TYPE_NAME => {
                items.into_iter().map(T::from_value).collect()
            }
            _ => None,
        }
    }
}

/// Converted arguments in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: SmallVec<[Value; 4]>,
    taken: usize,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Number of arguments not yet taken.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values.into_vec()
    }

    pub fn next<T: FromArg>(&mut self) -> InvocationResult<T> {
        let position = self.taken;
        let expected = T::param_type();

        if self.values.is_empty() {
            return Err(InvocationError::MissingArgument { position, expected });
        }

        let value = self.values.remove(0);
        let found = value.param_type();
        self.taken += 1;

        T::from_value(value).ok_or(InvocationError::ArgumentType {
            position,
            expected,
            found,
        })
    }
}

impl FromIterator<Value> for Args {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
            taken: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_values_in_order() {
        let mut args: Args = [Value::Integer(3), Value::String("x".to_string())]
            .into_iter()
            .collect();
        assert_eq!(args.next::<i32>().unwrap(), 3);
        assert_eq!(args.next::<String>().unwrap(), "x");
        assert!(args.is_empty());
    }

    #[test]
    fn reports_type_mismatch_with_position() {
        let mut args: Args = [Value::Integer(3), Value::Long(4)].into_iter().collect();
        args.next::<i32>().unwrap();
        match args.next::<i32>() {
            Err(InvocationError::ArgumentType {
                position,
                expected,
                found,
            }) => {
                assert_eq!(position, 1);
                assert_eq!(expected, ParamType::Scalar(TypeName::Integer));
                assert_eq!(found, ParamType::Scalar(TypeName::Long));
            }
            other => panic!("expected ArgumentType, got {other:?}"),
        }
    }

    #[test]
    fn reports_missing_argument() {
        let mut args = Args::new();
        assert!(matches!(
            args.next::<bool>(),
            Err(InvocationError::MissingArgument { position: 0, .. })
        ));
    }

    #[test]
    fn extracts_homogeneous_arrays() {
        let mut args: Args = [Value::Array(
            TypeName::Integer,
            vec![Value::Integer(1), Value::Integer(2)],
        )]
        .into_iter()
        .collect();
        assert_eq!(args.next::<Vec<i32>>().unwrap(), vec![1, 2]);
    }

    #[test]
    fn array_element_type_must_match() {
        let mut args: Args = [Value::Array(TypeName::Long, vec![Value::Long(1)])]
            .into_iter()
            .collect();
        assert!(args.next::<Vec<i32>>().is_err());
    }

    #[test]
    fn rust_types_map_to_param_types() {
        assert_eq!(<i64 as FromArg>::param_type(), ParamType::Scalar(TypeName::Long));
        assert_eq!(
            <Vec<Decimal> as FromArg>::param_type(),
            ParamType::Array(TypeName::Decimal)
        );
    }
}
