//! Eades spring-embedder
//!
//! `ForceLayout` owns one position per vertex and advances all of them by a
//! single step per call. Iteration policy (how many steps, when to stop) is
//! left to the caller; [`run`] is a fixed-count driver built on top.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{Bounds, ForceConstants, LayoutConfig};
use crate::force::{self, Separation, Vec2};
use crate::graph::{AdjacencyMatrix, Graph};

/// Fraction of the bounds left empty on each side when seeding positions
const INSET: f64 = 0.2;

/// Force-directed layout engine
#[derive(Debug, Clone)]
pub struct ForceLayout {
    positions: Vec<Vec2>,
}

impl ForceLayout {
    /// Seed `vertex_count` positions uniformly inside the inset rectangle
    /// `[0.2w, 0.8w] x [0.2h, 0.8h]`, using OS entropy.
    pub fn new(vertex_count: usize, width: f64, height: f64) -> Self {
        let mut rng = ChaCha8Rng::from_entropy();
        Self::with_rng(vertex_count, width, height, &mut rng)
    }

    /// Same as [`ForceLayout::new`] but reproducible for a given seed
    pub fn with_seed(vertex_count: usize, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(vertex_count, width, height, &mut rng)
    }

    /// Seed positions from `rng`.
    ///
    /// # Panics
    ///
    /// Panics when `width` or `height` is negative or not finite, since the
    /// inset rectangle is then empty. [`LayoutConfig::validate`] rejects such
    /// bounds before they reach the engine.
    pub fn with_rng<R: Rng>(vertex_count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let (x_min, x_max) = (width * INSET, width * (1.0 - INSET));
        let (y_min, y_max) = (height * INSET, height * (1.0 - INSET));

        let positions = (0..vertex_count)
            .map(|_| Vec2::new(rng.gen_range(x_min..=x_max), rng.gen_range(y_min..=y_max)))
            .collect();

        Self { positions }
    }

    /// Number of vertices, one per stored position
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Replace every position.
    ///
    /// The caller is responsible for passing exactly one position per vertex.
    pub fn set_positions(&mut self, positions: Vec<Vec2>) {
        if positions.len() != self.positions.len() {
            tracing::warn!(
                expected = self.positions.len(),
                got = positions.len(),
                "position count does not match vertex count"
            );
        }
        self.positions = positions;
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Advance every vertex by one step and return the new positions.
    ///
    /// A pair `v < w` is connected when either `adjacency[v][w]` or
    /// `adjacency[w][v]` is set. Connected pairs pull on each other with the
    /// logarithmic spring force; every pair repels. Each vertex then moves by
    /// `c4` times its net force.
    pub fn step(
        &mut self,
        adjacency: &AdjacencyMatrix,
        c1: f64,
        c2: f64,
        c3: f64,
        c4: f64,
    ) -> &[Vec2] {
        let n = self.positions.len();
        let mut attraction = vec![Vec2::ZERO; n];
        let mut repulsion = vec![Vec2::ZERO; n];

        for v in 0..n {
            for w in (v + 1)..n {
                let (pv, pw) = (self.positions[v], self.positions[w]);
                let v_to_w = Separation::resolve(pv, pw, force::fallback_direction(v, w));
                let w_to_v = Separation::resolve(pw, pv, force::fallback_direction(w, v));

                if is_connected(adjacency, v, w) {
                    attraction[v] += force::attractive(c1, c2, &v_to_w);
                    attraction[w] += force::attractive(c1, c2, &w_to_v);
                }

                repulsion[v] += force::repulsive(c3, &v_to_w);
                repulsion[w] += force::repulsive(c3, &w_to_v);
            }
        }

        for ((position, pull), push) in self.positions.iter_mut().zip(attraction).zip(repulsion) {
            *position += (pull + push) * c4;
        }

        &self.positions
    }

    /// [`ForceLayout::step`] with the constants taken from `constants`
    pub fn step_with(&mut self, adjacency: &AdjacencyMatrix, constants: &ForceConstants) -> &[Vec2] {
        let ForceConstants { c1, c2, c3, c4 } = *constants;
        self.step(adjacency, c1, c2, c3, c4)
    }
}

fn is_connected(adjacency: &AdjacencyMatrix, v: usize, w: usize) -> bool {
    if v >= adjacency.size() || w >= adjacency.size() {
        return false;
    }
    adjacency.get(v, w) == 1 || adjacency.get(w, v) == 1
}

/// Final layout of a graph, ready for the writers
#[derive(Debug, Clone)]
pub struct LayoutResult {
    pub labels: Vec<String>,
    pub positions: Vec<Vec2>,
    /// Stored edges as `(source, target)` index pairs
    pub edges: Vec<(usize, usize)>,
    pub bounds: Bounds,
    pub steps: usize,
}

impl LayoutResult {
    /// Label for vertex `index`, falling back to the index itself
    pub fn label(&self, index: usize) -> String {
        self.labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| index.to_string())
    }
}

/// Lay out `graph` by running `config.steps` steps from a fresh placement
pub fn run(graph: &Graph, config: &LayoutConfig) -> LayoutResult {
    let Bounds { width, height } = config.bounds;
    let n = graph.vertex_count();

    let mut layout = match config.seed {
        Some(seed) => ForceLayout::with_seed(n, width, height, seed),
        None => ForceLayout::new(n, width, height),
    };

    tracing::info!(
        vertices = n,
        edges = graph.edges().count(),
        steps = config.steps,
        seed = ?config.seed,
        "running layout"
    );

    let adjacency = graph.adjacency_matrix();
    let report_every = (config.steps / 10).max(1);
    for i in 0..config.steps {
        layout.step_with(adjacency, &config.constants);
        if (i + 1) % report_every == 0 {
            tracing::debug!(step = i + 1, "layout progress");
        }
    }

    if let Some(v) = layout.positions().iter().position(|p| !p.is_finite()) {
        tracing::warn!(vertex = v, "layout produced a non-finite position");
    }

    LayoutResult {
        labels: graph.vertex_labels().to_vec(),
        positions: layout.positions().to_vec(),
        edges: graph.edges().collect(),
        bounds: config.bounds,
        steps: config.steps,
    }
}
