mod compiled;
mod error;
mod lexer;
mod scoring;
mod segment;

pub use compiled::{CompileOptions, CompiledPattern, DEFAULT_MAX_SEGMENTS, compile, compile_with};
pub use error::{PatternError, PatternResult};
pub use lexer::{DynamicSegment, parse_segment};
pub use scoring::{
    BASE_SCORE, CONVERTIBLE_SCORE, LITERAL_SCORE, NON_FRACTIONAL_BONUS, ScoreOptions, ScoringMode,
    score, score_all, score_with,
};
pub use segment::Segment;

pub(crate) use scoring::score_segments;
