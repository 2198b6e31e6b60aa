use crate::convert::{ConversionResult, Value, convert};
use crate::path::segments;
use crate::pattern::{CompiledPattern, Segment};

use super::{Args, HandlerBinding, InvocationError, InvocationResult, OperationTable};

/// Converts the request segments bound to placeholders into arguments.
///
/// Scoring is not trusted here; every conversion is redone and failures are
/// reported as [`InvocationError::Conversion`].
#[tracing::instrument(level = "trace", skip(pattern), fields(pattern=%pattern, path=%request_path))]
pub fn bind_arguments(pattern: &CompiledPattern, request_path: &str) -> InvocationResult<Args> {
    let request = segments(request_path);
    bind_segments(pattern, &request)
}

fn bind_segments(pattern: &CompiledPattern, request: &[&str]) -> InvocationResult<Args> {
    let mut args = Args::new();

    for (index, segment) in pattern.segments().iter().enumerate() {
        match segment {
            Segment::Typed(type_name) => {
                let text = request
                    .get(index)
                    .ok_or(InvocationError::MissingSegment {
                        index,
                        type_name: *type_name,
                    })?;
                args.push(convert(*type_name, text)?);
            }
            Segment::TypedArray(type_name) => {
                let items = request
                    .get(index..)
                    .unwrap_or_default()
                    .iter()
                    .map(|text| convert(*type_name, text))
                    .collect::<ConversionResult<Vec<_>>>()?;
                args.push(Value::Array(*type_name, items));
                break;
            }
            Segment::Root | Segment::Literal(_) => {}
        }
    }

    Ok(args)
}

pub fn invoke<R, O>(
    pattern: &CompiledPattern,
    binding: &HandlerBinding,
    operations: &OperationTable<R, O>,
    receiver: &R,
    request_path: &str,
) -> InvocationResult<O> {
    let request = segments(request_path);
    invoke_segments(pattern, binding, operations, receiver, &request)
}

pub(crate) fn invoke_segments<R, O>(
    pattern: &CompiledPattern,
    binding: &HandlerBinding,
    operations: &OperationTable<R, O>,
    receiver: &R,
    request: &[&str],
) -> InvocationResult<O> {
    let operation = operations.get(binding.operation_name()).ok_or_else(|| {
        InvocationError::UnknownOperation {
            name: binding.operation_name().to_string(),
        }
    })?;

    if operation.signature() != binding.parameter_types() {
        return Err(InvocationError::SignatureMismatch {
            operation: operation.name().to_string(),
            expected: operation.signature().to_vec(),
            found: binding.parameter_types().to_vec(),
        });
    }

    let args = bind_segments(pattern, request)?;
    tracing::trace!(operation = operation.name(), args = args.len(), "invoking operation");
    operation.call(receiver, args)
}
