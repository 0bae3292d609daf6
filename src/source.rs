use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Where the load stage gets its bytes from
///
/// Any error returned by [`ByteSource::fetch`] is treated the same way by the
/// pipeline: the source is unavailable and the run fails with a read failure.
/// The underlying error is only logged.
///
/// # Example
///
/// ```
/// use config_pipeline::source::{ByteSource, MemorySource};
///
/// let source = MemorySource::new().with_entry("app.conf", "key=value");
///
/// assert_eq!(source.fetch("app.conf").unwrap(), "key=value");
/// assert!(source.fetch("missing.conf").is_err());
/// ```
pub trait ByteSource: Send + Sync {
    /// Fetch the full content behind `identifier`
    fn fetch(&self, identifier: &str) -> io::Result<String>;
}

/// Filesystem-backed source
///
/// Identifiers are paths, resolved against `root` when one is set.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    root: Option<PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Resolve relative identifiers against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, identifier: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(identifier),
            None => PathBuf::from(identifier),
        }
    }
}

impl ByteSource for FileSource {
    fn fetch(&self, identifier: &str) -> io::Result<String> {
        // Handle is dropped on every return path
        let mut file = File::open(self.resolve(identifier))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        // Invalid UTF-8 sequences become U+FFFD rather than failing the read
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// In-memory source keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, identifier: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(identifier.into(), content.into());
    }

    /// Builder-style [`MemorySource::insert`]
    pub fn with_entry(mut self, identifier: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(identifier, content);
        self
    }
}

impl ByteSource for MemorySource {
    fn fetch(&self, identifier: &str) -> io::Result<String> {
        self.entries.get(identifier).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no entry for '{}'", identifier),
            )
        })
    }
}
