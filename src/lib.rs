pub mod dispatch;
pub mod error;
pub mod models;
pub mod source;
pub mod stages;

use std::io::Write;

use dispatch::{dispatch, MessageRenderer};
use error::{Result, StageResult};
use models::{ResultPayload, RunOutcome};
use source::ByteSource;

/// Run load, validate and process for one identifier
///
/// The first failing stage ends the run; its failure is returned unchanged.
pub fn run_pipeline<S>(source: &S, identifier: &str) -> StageResult<ResultPayload>
where
    S: ByteSource + ?Sized,
{
    stages::load(source, identifier)
        .and_then(|config| stages::validate(&config))
        .and_then(|validated| stages::process(&validated))
}

/// Write a human-readable report of a finished run
pub fn report_result<W: Write>(result: &StageResult<ResultPayload>, writer: &mut W) -> Result<()> {
    match result {
        Ok(payload) => {
            writeln!(writer, "Pipeline Succeeded! Final Result Code: {}", payload.code)?;
        }
        Err(err) => {
            let message = dispatch(err, &mut MessageRenderer);
            writeln!(writer, "Pipeline Failed! Error details: {}", message)?;
        }
    }
    Ok(())
}

/// Run the pipeline for every identifier and write a CSV summary
///
/// Rows follow input order. Pipeline failures become rows, only output
/// faults are returned as errors.
pub fn process_sources<S, I, W>(source: &S, identifiers: I, writer: W) -> Result<Vec<RunOutcome>>
where
    S: ByteSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
    W: Write,
{
    let outcomes: Vec<RunOutcome> = identifiers
        .into_iter()
        .map(|id| {
            let id = id.as_ref();
            RunOutcome::new(id, run_pipeline(source, id))
        })
        .collect();

    write_outcomes(&outcomes, writer)?;

    Ok(outcomes)
}

/// Write run outcomes to CSV
fn write_outcomes<W: Write>(outcomes: &[RunOutcome], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for outcome in outcomes {
        csv_writer.serialize(outcome)?;
    }

    csv_writer.flush()?;
    Ok(())
}
