use crate::convert::is_convertible;
use crate::path::segments;
use serde::{Deserialize, Serialize};

use super::{CompiledPattern, Segment};

pub const BASE_SCORE: u32 = 1;
pub const LITERAL_SCORE: u32 = 3;
pub const CONVERTIBLE_SCORE: u32 = 1;
pub const NON_FRACTIONAL_BONUS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScoringMode {
    /// Mismatched literals and unconvertible typed segments add nothing but
    /// do not disqualify the pattern.
    #[default]
    Lenient,
    /// Any mismatched literal, unconvertible typed segment, or missing
    /// non-array segment scores the pattern 0.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreOptions {
    pub mode: ScoringMode,
    pub case_sensitive: bool,
}

/// Correctness score of `pattern` for `request_path`; 0 means no match.
pub fn score(pattern: &CompiledPattern, request_path: &str) -> u32 {
    score_with(pattern, request_path, &ScoreOptions::default())
}

#[tracing::instrument(level = "trace", skip(pattern, options), fields(pattern=%pattern, path=%request_path))]
pub fn score_with(pattern: &CompiledPattern, request_path: &str, options: &ScoreOptions) -> u32 {
    let request = segments(request_path);
    score_segments(pattern, &request, options)
}

/// Scores every candidate, in candidate order, against one request path.
pub fn score_all<'a, I>(
    request_path: &str,
    candidates: I,
    options: &ScoreOptions,
) -> Vec<(&'a CompiledPattern, u32)>
where
    I: IntoIterator<Item = &'a CompiledPattern>,
{
    let request = segments(request_path);
    candidates
        .into_iter()
        .map(|pattern| (pattern, score_segments(pattern, &request, options)))
        .collect()
}

pub(crate) fn score_segments(
    pattern: &CompiledPattern,
    request: &[&str],
    options: &ScoreOptions,
) -> u32 {
    let pattern_segments = pattern.matchable();
    let has_array = pattern.has_array();

    if request.len() != pattern_segments.len() && !has_array {
        return 0;
    }

    let strict = options.mode == ScoringMode::Strict;
    if strict && request.len() < pattern_segments.len() - usize::from(has_array) {
        return 0;
    }

    let mut score = BASE_SCORE;

    for (index, (value, segment)) in request.iter().zip(pattern_segments).enumerate() {
        match segment {
            Segment::Literal(literal) => {
                if literal_matches(literal, value, options.case_sensitive) {
                    score += LITERAL_SCORE;
                } else if strict {
                    return 0;
                }
            }
            Segment::Typed(type_name) => {
                if is_convertible(*type_name, value) {
                    score += CONVERTIBLE_SCORE;
                    if !type_name.is_fractional() {
                        score += NON_FRACTIONAL_BONUS;
                    }
                } else if strict {
                    return 0;
                }
            }
            Segment::TypedArray(type_name) => {
                if !type_name.is_fractional() {
                    score += NON_FRACTIONAL_BONUS;
                }
                for value in &request[index..] {
                    if !is_convertible(*type_name, value) {
                        return 0;
                    }
                    score += CONVERTIBLE_SCORE;
                }
                break;
            }
            Segment::Root => {}
        }
    }

    score
}

// `literal` is already normalized, so only the request side is folded
fn literal_matches(literal: &str, value: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        return literal == value;
    }
    if value.is_ascii() {
        return literal.len() == value.len()
            && literal
                .bytes()
                .zip(value.bytes())
                .all(|(l, v)| l == v.to_ascii_lowercase());
    }
    value.to_lowercase() == literal
}
