use crate::pattern::{CompileOptions, DEFAULT_MAX_SEGMENTS, ScoreOptions, ScoringMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which route wins when several share the highest score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TieBreak {
    #[default]
    FirstRegistered,
    LastRegistered,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    pub scoring_mode: ScoringMode,
    pub tie_break: TieBreak,
    pub case_sensitive: bool,
    pub max_segments: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            scoring_mode: ScoringMode::default(),
            tie_break: TieBreak::default(),
            case_sensitive: false,
            max_segments: DEFAULT_MAX_SEGMENTS,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_segments == 0 {
            return Err(RouterOptionsError::MaxSegmentsInvalid { provided: 0 });
        }
        Ok(())
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            max_segments: self.max_segments,
            case_sensitive: self.case_sensitive,
        }
    }

    pub fn score_options(&self) -> ScoreOptions {
        ScoreOptions {
            mode: self.scoring_mode,
            case_sensitive: self.case_sensitive,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn scoring_mode(mut self, value: ScoringMode) -> Self {
        self.options.scoring_mode = value;
        self
    }

    pub fn tie_break(mut self, value: TieBreak) -> Self {
        self.options.tie_break = value;
        self
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn max_segments(mut self, value: usize) -> Self {
        self.options.max_segments = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_segments must be at least 1 (got {provided})")]
    MaxSegmentsInvalid { provided: usize },
}
