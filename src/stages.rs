use tracing::{debug, warn};

use crate::error::{
    ParseFailure, ProcessingFailure, ReadFailure, StageResult, ValidationFailure,
};
use crate::models::{ConfigPayload, ResultPayload, ValidatedPayload};
use crate::source::{ByteSource, FileSource};

/// Content containing this marker is rejected as malformed
pub const PARSE_MARKER: &str = "malformed";

/// Field name whose presence fails validation
pub const FORBIDDEN_FIELD: &str = "invalid_field";

/// Prefix the validate stage puts in front of accepted content
pub const VALIDATED_PREFIX: &str = "Validated: ";

/// Shortest validated content (in bytes) the process stage accepts
pub const MIN_PROCESS_LEN: usize = 10;

pub const PROCESS_TASK: &str = "Data Processing";

/// Load stage: read the whole source and reject unusable content
///
/// Empty content and content containing [`PARSE_MARKER`] are the only parse
/// rejections; no grammar is applied.
pub fn load<S>(source: &S, identifier: &str) -> StageResult<ConfigPayload>
where
    S: ByteSource + ?Sized,
{
    let content = match source.fetch(identifier) {
        Ok(content) => content,
        Err(err) => {
            warn!(identifier, error = %err, "failed to open config source");
            return Err(ReadFailure::new(identifier).into());
        }
    };

    if content.is_empty() || content.contains(PARSE_MARKER) {
        warn!(identifier, "detected malformed config");
        return Err(ParseFailure::new(PARSE_MARKER, 1).into());
    }

    debug!(identifier, bytes = content.len(), "config loaded");
    Ok(ConfigPayload::new(content))
}

/// [`load`] from the filesystem
pub fn load_file(path: &str) -> StageResult<ConfigPayload> {
    load(&FileSource::new(), path)
}

/// Validate stage: reject forbidden fields, tag accepted content
pub fn validate(config: &ConfigPayload) -> StageResult<ValidatedPayload> {
    if config.content.contains(FORBIDDEN_FIELD) {
        warn!(field = FORBIDDEN_FIELD, "detected invalid field");
        return Err(ValidationFailure::new(FORBIDDEN_FIELD, "contains disallowed value").into());
    }

    debug!("data validated");
    Ok(ValidatedPayload::new(format!(
        "{}{}",
        VALIDATED_PREFIX, config.content
    )))
}

/// Process stage: the result code is the validated content length
///
/// Content that went through [`validate`] always carries the prefix, so the
/// length check only trips for payloads built directly.
pub fn process(data: &ValidatedPayload) -> StageResult<ResultPayload> {
    let len = data.content.len();
    if len < MIN_PROCESS_LEN {
        warn!(len, min = MIN_PROCESS_LEN, "data too short");
        return Err(ProcessingFailure::new(PROCESS_TASK, "Input data too short for task").into());
    }

    debug!(code = len, "data processed");
    Ok(ResultPayload { code: len })
}
