//! Reader/Writer traits and format dispatch
//!
//! Readers turn a graph document into a [`Graph`]; writers turn a finished
//! [`LayoutResult`] into an output file. The [`FormatRegistry`] picks one by
//! file extension or format id.

use std::path::Path;

use thiserror::Error;

use crate::graph::{Graph, GraphError};
use crate::graph_reader::{JsonGraphReader, YamlGraphReader};
use crate::json_writer::JsonWriter;
use crate::layout::LayoutResult;
use crate::svg_writer::SvgWriter;

/// Errors that can occur during reading or writing
#[derive(Error, Debug)]
pub enum IoError {
    /// The file format is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The file extension could not be determined
    #[error("could not determine file format from path: {0}")]
    UnknownExtension(String),

    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A parsing error occurred
    #[error("parse error: {0}")]
    Parse(String),

    /// The document parsed but does not describe a valid graph
    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),

    /// A rendering/writing error occurred
    #[error("write error: {0}")]
    Write(String),
}

/// Result type for reader/writer operations
pub type IoResult<T> = Result<T, IoError>;

/// A reader parses an input document into a [`Graph`]
pub trait Reader {
    fn read(&self, input: &Path) -> IoResult<Graph>;

    /// File extensions this reader can handle (e.g., ["yaml", "yml"])
    fn supported_extensions(&self) -> &[&str];

    /// Check if this reader can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// A writer outputs a finished layout in a specific format
pub trait Writer {
    fn write(&self, layout: &LayoutResult, output: &Path) -> IoResult<()>;

    /// Identifier for this output format (e.g., "json", "svg")
    fn format_id(&self) -> &str;
}

/// Registry of available readers and writers
pub struct FormatRegistry {
    readers: Vec<Box<dyn Reader>>,
    writers: Vec<Box<dyn Writer>>,
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            readers: Vec::new(),
            writers: Vec::new(),
        }
    }

    /// Create a registry with all default readers and writers registered
    ///
    /// Currently registers:
    /// - Readers: `YamlGraphReader` (yaml, yml), `JsonGraphReader` (json)
    /// - Writers: `JsonWriter` (json), `SvgWriter` (svg)
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_reader(Box::new(YamlGraphReader::new()));
        registry.register_reader(Box::new(JsonGraphReader::new()));
        registry.register_writer(Box::new(JsonWriter::new()));
        registry.register_writer(Box::new(SvgWriter::new()));
        registry
    }

    pub fn register_reader(&mut self, reader: Box<dyn Reader>) {
        self.readers.push(reader);
    }

    pub fn register_writer(&mut self, writer: Box<dyn Writer>) {
        self.writers.push(writer);
    }

    /// Find a reader for the given file extension
    pub fn reader_for_extension(&self, ext: &str) -> Option<&dyn Reader> {
        self.readers
            .iter()
            .find(|r| r.supports_extension(ext))
            .map(|r| r.as_ref())
    }

    /// Find a writer by format ID
    pub fn writer_for_format(&self, format_id: &str) -> Option<&dyn Writer> {
        self.writers
            .iter()
            .find(|w| w.format_id().eq_ignore_ascii_case(format_id))
            .map(|w| w.as_ref())
    }

    /// Get file extension from a path
    pub fn extension_from_path(path: &Path) -> Option<&str> {
        path.extension().and_then(|e| e.to_str())
    }

    /// Find a reader for the given path based on its extension
    pub fn reader_for_path(&self, path: &Path) -> IoResult<&dyn Reader> {
        let ext = Self::extension_from_path(path)
            .ok_or_else(|| IoError::UnknownExtension(path.display().to_string()))?;

        self.reader_for_extension(ext)
            .ok_or_else(|| IoError::UnsupportedFormat(ext.to_string()))
    }

    /// Find a writer for the given path, treating its extension as the format ID
    pub fn writer_for_path(&self, path: &Path) -> IoResult<&dyn Writer> {
        let ext = Self::extension_from_path(path)
            .ok_or_else(|| IoError::UnknownExtension(path.display().to_string()))?;

        self.writer_for_format(ext)
            .ok_or_else(|| IoError::UnsupportedFormat(ext.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct MockReader {
        extensions: Vec<&'static str>,
    }

    impl Reader for MockReader {
        fn read(&self, _input: &Path) -> IoResult<Graph> {
            Ok(Graph::new(1))
        }

        fn supported_extensions(&self) -> &[&str] {
            &self.extensions
        }
    }

    struct MockWriter {
        format: &'static str,
    }

    impl Writer for MockWriter {
        fn write(&self, _layout: &LayoutResult, _output: &Path) -> IoResult<()> {
            Ok(())
        }

        fn format_id(&self) -> &str {
            self.format
        }
    }

    #[test]
    fn reader_supports_extension_case_insensitive() {
        let reader = MockReader {
            extensions: vec!["yaml", "yml"],
        };
        assert!(reader.supports_extension("yaml"));
        assert!(reader.supports_extension("YML"));
        assert!(!reader.supports_extension("json"));
    }

    #[test]
    fn registry_finds_reader_by_extension() {
        let mut registry = FormatRegistry::new();
        registry.register_reader(Box::new(MockReader {
            extensions: vec!["gr"],
        }));

        assert!(registry.reader_for_extension("gr").is_some());
        assert!(registry.reader_for_extension("yaml").is_none());
    }

    #[test]
    fn registry_finds_writer_by_format() {
        let mut registry = FormatRegistry::new();
        registry.register_writer(Box::new(MockWriter { format: "png" }));

        assert!(registry.writer_for_format("png").is_some());
        assert!(registry.writer_for_format("PNG").is_some());
        assert!(registry.writer_for_format("svg").is_none());
    }

    #[test]
    fn registry_reader_for_path_extracts_extension() {
        let registry = FormatRegistry::with_defaults();

        assert!(registry.reader_for_path(&PathBuf::from("/tmp/graph.yaml")).is_ok());
        assert!(registry.reader_for_path(&PathBuf::from("/tmp/graph.JSON")).is_ok());
        assert!(matches!(
            registry.reader_for_path(&PathBuf::from("/tmp/graph.xyz")),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            registry.reader_for_path(&PathBuf::from("/tmp/graph")),
            Err(IoError::UnknownExtension(_))
        ));
    }

    #[test]
    fn with_defaults_registers_writers() {
        let registry = FormatRegistry::with_defaults();

        assert!(registry.writer_for_format("json").is_some());
        assert!(registry.writer_for_format("SVG").is_some());
        assert!(registry.writer_for_format("html").is_none());
        assert!(registry.writer_for_path(Path::new("out/layout.svg")).is_ok());
    }

    #[test]
    fn mock_reader_returns_graph() {
        let reader = MockReader {
            extensions: vec!["gr"],
        };
        let graph = reader.read(Path::new("test.gr")).unwrap();
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn io_error_display() {
        let err = IoError::UnsupportedFormat("xyz".to_string());
        assert_eq!(err.to_string(), "unsupported format: xyz");

        let err = IoError::from(GraphError::DuplicateLabel("A".to_string()));
        assert_eq!(err.to_string(), "invalid graph: duplicate vertex label: A");
    }
}
