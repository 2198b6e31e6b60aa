use crate::convert::{ParamType, TypeName};
use crate::path::segments;
use std::fmt;

use super::lexer::parse_segment;
use super::{PatternError, PatternResult, Segment};

pub const DEFAULT_MAX_SEGMENTS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub max_segments: usize,
    pub case_sensitive: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_segments: DEFAULT_MAX_SEGMENTS,
            case_sensitive: false,
        }
    }
}

/// A normalized route declaration.
///
/// `raw_path` always has exactly one leading slash and no trailing slash
/// (except the root pattern, which is `/`). Literal segments are lower-cased
/// unless compiled case-sensitively; placeholder text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompiledPattern {
    raw_path: String,
    segments: Vec<Segment>,
    parameter_types: Vec<ParamType>,
    labels: Vec<Option<String>>,
}

impl CompiledPattern {
    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn parameter_types(&self) -> &[ParamType] {
        &self.parameter_types
    }

    /// Placeholder labels in parameter order; purely descriptive.
    pub fn labels(&self) -> &[Option<String>] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Root])
    }

    pub fn has_array(&self) -> bool {
        self.segments.last().is_some_and(Segment::is_array)
    }

    /// Segments compared against a request; empty for the root pattern.
    pub(crate) fn matchable(&self) -> &[Segment] {
        if self.is_root() {
            &[]
        } else {
            &self.segments
        }
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_path)
    }
}

pub fn compile(declared_path: &str, expected: &[ParamType]) -> PatternResult<CompiledPattern> {
    compile_with(declared_path, expected, &CompileOptions::default())
}

#[tracing::instrument(level = "trace", skip(expected, options), fields(path=%declared_path, expected=expected.len() as u64))]
pub fn compile_with(
    declared_path: &str,
    expected: &[ParamType],
    options: &CompileOptions,
) -> PatternResult<CompiledPattern> {
    let parts = segments(declared_path);

    if parts.len() > options.max_segments {
        return Err(PatternError::TooManySegments {
            path: declared_path.to_string(),
            count: parts.len(),
            max: options.max_segments,
        });
    }

    let last = parts.len().saturating_sub(1);
    let mut raw_path = String::with_capacity(declared_path.len() + 1);
    let mut compiled = Vec::with_capacity(parts.len().max(1));
    let mut parameter_types = Vec::new();
    let mut labels = Vec::new();

    for (index, part) in parts.iter().enumerate() {
        raw_path.push('/');

        let Some(dynamic) = parse_segment(part) else {
            let literal = if options.case_sensitive {
                part.to_string()
            } else {
                part.to_lowercase()
            };
            raw_path.push_str(&literal);
            compiled.push(Segment::Literal(literal));
            continue;
        };

        if dynamic.array && index != last {
            return Err(PatternError::ArrayNotLast {
                path: declared_path.to_string(),
                segment: part.to_string(),
                index,
            });
        }

        let type_name = TypeName::resolve(dynamic.type_token).ok_or_else(|| {
            PatternError::UnknownParameterType {
                segment: part.to_string(),
                type_name: dynamic.type_token.to_string(),
            }
        })?;

        let segment = if dynamic.array {
            Segment::TypedArray(type_name)
        } else {
            Segment::Typed(type_name)
        };

        parameter_types.extend(segment.param_type());
        labels.push(dynamic.label.map(str::to_string));
        raw_path.push_str(part);
        compiled.push(segment);
    }

    if compiled.is_empty() {
        raw_path.push('/');
        compiled.push(Segment::Root);
    }

    if parameter_types != expected {
        return Err(PatternError::ParameterMismatch {
            path: declared_path.to_string(),
            expected: expected.to_vec(),
            found: parameter_types,
        });
    }

    Ok(CompiledPattern {
        raw_path,
        segments: compiled,
        parameter_types,
        labels,
    })
}
