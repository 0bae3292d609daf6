// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use config_pipeline::error::StageResult;
use config_pipeline::models::ResultPayload;
use config_pipeline::report_result;
use config_pipeline::source::MemorySource;

/// Build an in-memory source from (identifier, content) pairs
pub fn memory_source(entries: &[(&str, &str)]) -> MemorySource {
    let mut source = MemorySource::new();
    for (identifier, content) in entries {
        source.insert(*identifier, *content);
    }
    source
}

/// Render a run through the reporter and return the text
pub fn report_string(result: &StageResult<ResultPayload>) -> String {
    let mut output = Vec::new();
    report_result(result, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

/// Write a config file into `dir` and return its path
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use config_pipeline::source::ByteSource;

    #[test]
    fn test_memory_source_helper() {
        let source = memory_source(&[("a.conf", "alpha"), ("b.conf", "beta")]);
        assert_eq!(source.fetch("a.conf").unwrap(), "alpha");
        assert_eq!(source.fetch("b.conf").unwrap(), "beta");
        assert!(source.fetch("c.conf").is_err());
    }

    #[test]
    fn test_write_config_helper() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "app.conf", "key=value");
        assert_eq!(fs::read_to_string(path).unwrap(), "key=value");
    }

    #[test]
    fn test_report_string_success() {
        let output = report_string(&Ok(ResultPayload { code: 42 }));
        assert_eq!(output, "Pipeline Succeeded! Final Result Code: 42\n");
    }
}
