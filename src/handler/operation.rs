use crate::convert::ParamType;
use crate::types::BoxError;
use std::fmt;
use std::sync::Arc;

use super::{Args, FromArg, InvocationError, InvocationResult};

type OperationFn<R, O> = dyn Fn(&R, Args) -> InvocationResult<O> + Send + Sync;

/// A named callable with a fixed parameter signature, invoked on a receiver
/// of type `R`.
pub struct Operation<R, O> {
    name: Box<str>,
    signature: Vec<ParamType>,
    call: Arc<OperationFn<R, O>>,
}

impl<R, O> Operation<R, O> {
    pub fn new<F, M>(name: impl Into<String>, handler: F) -> Self
    where
        F: IntoOperation<R, O, M>,
    {
        handler.into_operation(name.into())
    }

    /// An operation whose signature is supplied at runtime; `handler` receives
    /// the converted arguments unchecked beyond arity.
    pub fn dynamic<F, E>(name: impl Into<String>, signature: Vec<ParamType>, handler: F) -> Self
    where
        F: Fn(&R, Args) -> Result<O, E> + Send + Sync + 'static,
        E: Into<BoxError>,
        R: 'static,
        O: 'static,
    {
        let name: String = name.into();
        let operation: Arc<str> = Arc::from(name.as_str());
        let call = move |receiver: &R, args: Args| {
            handler(receiver, args).map_err(|source| InvocationError::failed(&operation, source))
        };
        Self::from_parts(name, signature, Arc::new(call))
    }

    fn from_parts(name: String, signature: Vec<ParamType>, call: Arc<OperationFn<R, O>>) -> Self {
        Self {
            name: name.into_boxed_str(),
            signature,
            call,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &[ParamType] {
        &self.signature
    }

    pub fn call(&self, receiver: &R, args: Args) -> InvocationResult<O> {
        if args.len() != self.signature.len() {
            return Err(InvocationError::ArityMismatch {
                operation: self.name.to_string(),
                expected: self.signature.len(),
                found: args.len(),
            });
        }
        (self.call)(receiver, args)
    }
}

impl<R, O> Clone for Operation<R, O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            signature: self.signature.clone(),
            call: Arc::clone(&self.call),
        }
    }
}

impl<R, O> fmt::Debug for Operation<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Closures that can become an [`Operation`]; `M` is the parameter tuple and
/// only disambiguates arities.
pub trait IntoOperation<R, O, M> {
    fn into_operation(self, name: String) -> Operation<R, O>;
}

macro_rules! impl_into_operation {
    ($($arg:ident),*) => {
        impl<R, O, E, F, $($arg,)*> IntoOperation<R, O, ($($arg,)*)> for F
        where
            F: Fn(&R, $($arg),*) -> Result<O, E> + Send + Sync + 'static,
            E: Into<BoxError> + 'static,
            R: 'static,
            O: 'static,
            $($arg: FromArg + 'static,)*
        {
            #[allow(non_snake_case, unused_mut, unused_variables)]
            fn into_operation(self, name: String) -> Operation<R, O> {
                let signature = vec![$(<$arg as FromArg>::param_type()),*];
                let operation: Arc<str> = Arc::from(name.as_str());
                let call = move |receiver: &R, mut args: Args| -> InvocationResult<O> {
                    $(let $arg = args.next::<$arg>()?;)*
                    (self)(receiver, $($arg),*)
                        .map_err(|source| InvocationError::failed(&operation, source))
                };
                Operation::from_parts(name, signature, Arc::new(call))
            }
        }
    };
}

impl_into_operation!();
impl_into_operation!(A1);
impl_into_operation!(A1, A2);
impl_into_operation!(A1, A2, A3);
impl_into_operation!(A1, A2, A3, A4);
impl_into_operation!(A1, A2, A3, A4, A5);
impl_into_operation!(A1, A2, A3, A4, A5, A6);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{TypeName, Value};
    use std::convert::Infallible;

    struct Calculator {
        offset: i64,
    }

    #[test]
    fn derives_signature_from_closure_parameters() {
        let op = Operation::new("sum", |_: &Calculator, a: i32, b: i32| {
            Ok::<_, Infallible>(a + b)
        });
        assert_eq!(
            op.signature(),
            &[
                ParamType::Scalar(TypeName::Integer),
                ParamType::Scalar(TypeName::Integer)
            ]
        );
    }

    #[test]
    fn calls_with_receiver_and_converted_args() {
        let op = Operation::new("shift", |calc: &Calculator, values: Vec<i64>| {
            Ok::<_, Infallible>(values.iter().sum::<i64>() + calc.offset)
        });
        let args: Args = [Value::Array(
            TypeName::Long,
            vec![Value::Long(1), Value::Long(2)],
        )]
        .into_iter()
        .collect();
        let result = op.call(&Calculator { offset: 10 }, args).unwrap();
        assert_eq!(result, 13);
    }

    #[test]
    fn zero_arity_operation_takes_no_args() {
        let op = Operation::new("ping", |_: &Calculator| Ok::<_, Infallible>("pong"));
        assert!(op.signature().is_empty());
        assert_eq!(op.call(&Calculator { offset: 0 }, Args::new()).unwrap(), "pong");
    }

    #[test]
    fn rejects_wrong_arity_before_calling() {
        let op = Operation::new("ping", |_: &Calculator| Ok::<_, Infallible>(()));
        let args: Args = [Value::Integer(1)].into_iter().collect();
        assert!(matches!(
            op.call(&Calculator { offset: 0 }, args),
            Err(InvocationError::ArityMismatch {
                expected: 0,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn wraps_handler_failures_with_source() {
        let op = Operation::new("fail", |_: &Calculator, _: String| {
            Err::<(), _>("boom".to_string())
        });
        let args: Args = [Value::String("x".to_string())].into_iter().collect();
        let err = op.call(&Calculator { offset: 0 }, args).unwrap_err();
        match &err {
            InvocationError::Failed { operation, source } => {
                assert_eq!(operation, "fail");
                assert_eq!(source.to_string(), "boom");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn dynamic_operations_use_declared_signature() {
        let op: Operation<Calculator, usize> = Operation::dynamic(
            "count",
            vec![ParamType::Array(TypeName::String)],
            |_: &Calculator, args: Args| Ok::<_, Infallible>(args.values().len()),
        );
        let args: Args = [Value::Array(TypeName::String, Vec::new())]
            .into_iter()
            .collect();
        assert_eq!(op.call(&Calculator { offset: 0 }, args).unwrap(), 1);
    }
}
