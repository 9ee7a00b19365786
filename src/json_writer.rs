//! Layout JSON writer
//!
//! Writes final vertex positions plus the edge list, so a renderer can draw
//! the layout without re-running the simulation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Bounds;
use crate::io::{IoError, IoResult, Writer};
use crate::layout::LayoutResult;

/// A vertex and where it ended up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexPosition {
    pub index: usize,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// An edge between two vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRef {
    pub source: usize,
    pub target: usize,
}

/// Complete layout document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub bounds: Bounds,
    pub steps: usize,
    pub vertices: Vec<VertexPosition>,
    pub edges: Vec<EdgeRef>,
}

impl From<&LayoutResult> for LayoutDocument {
    fn from(layout: &LayoutResult) -> Self {
        let vertices = layout
            .positions
            .iter()
            .enumerate()
            .map(|(index, p)| VertexPosition {
                index,
                label: layout.label(index),
                x: p.x,
                y: p.y,
            })
            .collect();

        let edges = layout
            .edges
            .iter()
            .map(|&(source, target)| EdgeRef { source, target })
            .collect();

        Self {
            bounds: layout.bounds,
            steps: layout.steps,
            vertices,
            edges,
        }
    }
}

/// Writer for layout JSON
pub struct JsonWriter;

impl JsonWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render the layout to a pretty-printed JSON string
    pub fn to_json(layout: &LayoutResult) -> IoResult<String> {
        serde_json::to_string_pretty(&LayoutDocument::from(layout))
            .map_err(|e| IoError::Write(e.to_string()))
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for JsonWriter {
    fn write(&self, layout: &LayoutResult, output: &Path) -> IoResult<()> {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = Self::to_json(layout)?;
        fs::write(output, json)?;
        Ok(())
    }

    fn format_id(&self) -> &str {
        "json"
    }
}
