use crate::error::{
    ParseFailure, PipelineError, ProcessingFailure, ReadFailure, ValidationFailure,
};

/// Visitor over the failure kinds, one method per kind
///
/// Implementors must handle all four kinds; there is no default method.
pub trait FailureHandler {
    type Output;

    fn on_read(&mut self, failure: &ReadFailure) -> Self::Output;

    fn on_parse(&mut self, failure: &ParseFailure) -> Self::Output;

    fn on_validation(&mut self, failure: &ValidationFailure) -> Self::Output;

    fn on_processing(&mut self, failure: &ProcessingFailure) -> Self::Output;
}

/// Route a failure to the handler method for the kind it holds
pub fn dispatch<H>(error: &PipelineError, handler: &mut H) -> H::Output
where
    H: FailureHandler + ?Sized,
{
    match error {
        PipelineError::Read(e) => handler.on_read(e),
        PipelineError::Parse(e) => handler.on_parse(e),
        PipelineError::Validation(e) => handler.on_validation(e),
        PipelineError::Processing(e) => handler.on_processing(e),
    }
}

/// Renders the user-facing message for each failure kind
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageRenderer;

impl FailureHandler for MessageRenderer {
    type Output = String;

    fn on_read(&mut self, failure: &ReadFailure) -> String {
        format!(
            "Configuration Read Error: Could not open file '{}'",
            failure.identifier
        )
    }

    fn on_parse(&mut self, failure: &ParseFailure) -> String {
        format!(
            "Configuration Parse Error: Malformed content at line {} (Context: '{}')",
            failure.line, failure.fragment
        )
    }

    fn on_validation(&mut self, failure: &ValidationFailure) -> String {
        format!(
            "Data Validation Error: Field '{}' has invalid value '{}'",
            failure.field, failure.description
        )
    }

    fn on_processing(&mut self, failure: &ProcessingFailure) -> String {
        format!(
            "Data Processing Error: Task '{}' failed. Details: {}",
            failure.task, failure.detail
        )
    }
}
