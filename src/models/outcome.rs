use serde::{Serialize, Serializer};

use crate::error::{PipelineError, Stage, StageResult};
use crate::models::ResultPayload;

/// Summary of one pipeline run, one row in the batch report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub source: String,
    pub result: StageResult<ResultPayload>,
}

impl RunOutcome {
    pub fn new(source: impl Into<String>, result: StageResult<ResultPayload>) -> Self {
        Self {
            source: source.into(),
            result,
        }
    }
}

// Flattened row layout for CSV output
#[derive(Serialize)]
struct OutcomeRow<'a> {
    source: &'a str,
    status: &'static str,
    stage: Option<Stage>,
    kind: Option<&'static str>,
    code: Option<usize>,
    detail: String,
}

impl Serialize for RunOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let row = match &self.result {
            Ok(payload) => OutcomeRow {
                source: &self.source,
                status: "ok",
                stage: None,
                kind: None,
                code: Some(payload.code),
                detail: String::new(),
            },
            Err(err) => OutcomeRow {
                source: &self.source,
                status: "failed",
                stage: Some(err.stage()),
                kind: Some(err.kind()),
                code: None,
                detail: detail_of(err),
            },
        };
        row.serialize(serializer)
    }
}

fn detail_of(err: &PipelineError) -> String {
    match err {
        PipelineError::Read(e) => e.identifier.clone(),
        PipelineError::Parse(e) => format!("line {}: {}", e.line, e.fragment),
        PipelineError::Validation(e) => format!("{}: {}", e.field, e.description),
        PipelineError::Processing(e) => format!("{}: {}", e.task, e.detail),
    }
}
