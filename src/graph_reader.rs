//! Graph document readers
//!
//! A graph document lists vertex labels in index order followed by edges:
//!
//! ```yaml
//! vertices: [A, B, C]
//! edges:
//!   - { from: A, to: B, weight: 2 }
//!   - { from: B, to: C }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::graph::Graph;
use crate::io::{IoError, IoResult, Reader};

/// On-disk description of a graph
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphDocument {
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EdgeDocument {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl GraphDocument {
    /// Build a graph with one vertex per listed label
    pub fn into_graph(self) -> IoResult<Graph> {
        let mut graph = Graph::new(self.vertices.len());
        graph.add_vertices(self.vertices)?;
        for edge in &self.edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = self.edges.len(),
            "built graph from document"
        );
        Ok(graph)
    }
}

/// Reader for YAML graph documents
pub struct YamlGraphReader;

impl YamlGraphReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlGraphReader {
    fn default() -> Self {
        Self::new()
    }
}

impl Reader for YamlGraphReader {
    fn read(&self, input: &Path) -> IoResult<Graph> {
        let content = fs::read_to_string(input)?;
        let document: GraphDocument =
            serde_yaml::from_str(&content).map_err(|e| IoError::Parse(e.to_string()))?;
        document.into_graph()
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Reader for JSON graph documents
pub struct JsonGraphReader;

impl JsonGraphReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonGraphReader {
    fn default() -> Self {
        Self::new()
    }
}

impl Reader for JsonGraphReader {
    fn read(&self, input: &Path) -> IoResult<Graph> {
        let content = fs::read_to_string(input)?;
        let document: GraphDocument =
            serde_json::from_str(&content).map_err(|e| IoError::Parse(e.to_string()))?;
        document.into_graph()
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}
