//! eades - Spring-embedding layout for small labeled graphs.
//!
//! This crate implements Eades' force-directed model: logarithmic springs
//! along edges and inverse-square repulsion between every pair of vertices.
//! Readers load graph documents and writers emit the finished layout.

pub mod cli;
pub mod config;
pub mod force;
pub mod graph;
pub mod graph_reader;
pub mod io;
pub mod json_writer;
pub mod layout;
pub mod svg_writer;

pub use config::{Bounds, ForceConstants, LayoutConfig};
pub use force::Vec2;
pub use graph::{AdjacencyMatrix, CostMatrix, Graph, GraphError};
pub use layout::{ForceLayout, LayoutResult};
