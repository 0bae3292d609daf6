use serde::Serialize;

/// Raw configuration text produced by the load stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigPayload {
    pub content: String,
}

impl ConfigPayload {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Content that passed validation
/// Built by the validate stage, or directly to drive the process stage alone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedPayload {
    pub content: String,
}

impl ValidatedPayload {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Final outcome of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultPayload {
    pub code: usize,
}
