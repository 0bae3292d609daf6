use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Pipeline stage at which a failure was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Load,
    Validate,
    Process,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Validate => "validate",
            Stage::Process => "process",
        };
        f.write_str(name)
    }
}

/// The byte source could not be opened or read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration Read Error: Could not open file '{identifier}'")]
pub struct ReadFailure {
    pub identifier: String,
}

impl ReadFailure {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

/// Content was retrieved but is not structurally acceptable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration Parse Error: Malformed content at line {line} (Context: '{fragment}')")]
pub struct ParseFailure {
    pub fragment: String,
    /// 1-based line number
    pub line: usize,
}

impl ParseFailure {
    pub fn new(fragment: impl Into<String>, line: usize) -> Self {
        Self {
            fragment: fragment.into(),
            line,
        }
    }
}

/// Content is structurally fine but semantically rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Data Validation Error: Field '{field}' has invalid value '{description}'")]
pub struct ValidationFailure {
    pub field: String,
    pub description: String,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            description: description.into(),
        }
    }
}

/// Validated content could not be turned into a final result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Data Processing Error: Task '{task}' failed. Details: {detail}")]
pub struct ProcessingFailure {
    pub task: String,
    pub detail: String,
}

impl ProcessingFailure {
    pub fn new(task: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            detail: detail.into(),
        }
    }
}

/// Closed set of pipeline failures
///
/// Exactly one kind is held at a time. The enum is exhaustive:
/// every `match` over it has to name all four variants, so adding a kind
/// breaks every dispatcher until it is handled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Read(#[from] ReadFailure),

    #[error(transparent)]
    Parse(#[from] ParseFailure),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error(transparent)]
    Processing(#[from] ProcessingFailure),
}

impl PipelineError {
    /// Stage boundary where the failure was detected
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Read(_) | PipelineError::Parse(_) => Stage::Load,
            PipelineError::Validation(_) => Stage::Validate,
            PipelineError::Processing(_) => Stage::Process,
        }
    }

    /// Short stable label, used in summaries
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Read(_) => "read",
            PipelineError::Parse(_) => "parse",
            PipelineError::Validation(_) => "validation",
            PipelineError::Processing(_) => "processing",
        }
    }
}

/// Outcome of a single stage
pub type StageResult<T> = std::result::Result<T, PipelineError>;

/// Inspection and mapping helpers for [`StageResult`]
///
/// Chaining uses [`Result::and_then`] directly: once a stage fails the
/// closure is never called and the failure passes through untouched.
pub trait StageResultExt<T> {
    /// Transform the success value with an infallible function
    fn map_success<U, F>(self, f: F) -> StageResult<U>
    where
        F: FnOnce(T) -> U;

    fn is_success(&self) -> bool;

    fn is_failure(&self) -> bool;

    /// Stage of the held failure, `None` on success
    fn failed_stage(&self) -> Option<Stage>;
}

impl<T> StageResultExt<T> for StageResult<T> {
    fn map_success<U, F>(self, f: F) -> StageResult<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }

    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn is_failure(&self) -> bool {
        self.is_err()
    }

    fn failed_stage(&self) -> Option<Stage> {
        self.as_ref().err().map(PipelineError::stage)
    }
}

/// Errors raised by the driver while writing reports
/// These are output faults, not pipeline failures
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, DriverError>;
