pub mod outcome;
pub mod payload;

pub use outcome::RunOutcome;
pub use payload::{ConfigPayload, ResultPayload, ValidatedPayload};
