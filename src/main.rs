use std::env;
use std::io::{self, Write};

use anyhow::{Context, Result};
use config_pipeline::source::FileSource;
use config_pipeline::{process_sources, report_result, run_pipeline};
use tracing_subscriber::EnvFilter;

/// Parsed command line
#[derive(Debug, PartialEq)]
struct CliArgs {
    csv_mode: bool,
    paths: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or("config-pipeline");

    let mut csv_mode = false;
    let mut paths = Vec::new();
    for arg in args.iter().skip(1) {
        if arg == "--csv" {
            csv_mode = true;
            continue;
        }
        anyhow::ensure!(
            !arg.starts_with("--"),
            "Unknown option '{}'\nUsage: {} [--csv] <config>...",
            arg,
            program
        );
        paths.push(arg.clone());
    }

    anyhow::ensure!(!paths.is_empty(), "Usage: {} [--csv] <config>...", program);

    Ok(CliArgs { csv_mode, paths })
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout only carries reports
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    let CliArgs { csv_mode, paths } = parse_args(&args)?;

    let source = FileSource::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if csv_mode {
        process_sources(&source, &paths, &mut out)
            .context("Failed to write pipeline summary")?;
    } else {
        for path in &paths {
            let result = run_pipeline(&source, path.as_str());
            report_result(&result, &mut out)
                .with_context(|| format!("Failed to write report for '{}'", path))?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_paths_and_csv_flag() {
        let parsed = parse_args(&args(&["config-pipeline", "a.conf", "--csv", "b.conf"])).unwrap();

        assert_eq!(
            parsed,
            CliArgs {
                csv_mode: true,
                paths: vec!["a.conf".to_string(), "b.conf".to_string()],
            }
        );
    }

    #[test]
    fn test_unknown_option_rejected() {
        let err = parse_args(&args(&["config-pipeline", "--help", "a.conf"])).unwrap_err();
        assert!(err.to_string().contains("Unknown option '--help'"));

        // Typo of --csv is not treated as a path
        assert!(parse_args(&args(&["config-pipeline", "--cvs", "a.conf"])).is_err());
    }

    #[test]
    fn test_missing_paths_rejected() {
        let err = parse_args(&args(&["config-pipeline", "--csv"])).unwrap_err();
        assert!(err.to_string().starts_with("Usage:"));
    }
}
