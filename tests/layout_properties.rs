use approx::assert_relative_eq;

use eades::force::{attractive_force, repulsive_force};
use eades::{ForceConstants, ForceLayout, Graph, LayoutConfig, Vec2, layout};

fn sample_graph() -> Graph {
    let mut graph = Graph::new(6);
    graph
        .add_vertices(["A", "B", "C", "D", "E", "F"])
        .expect("labels are unique");
    for (v, w) in [("A", "B"), ("B", "C"), ("C", "D"), ("C", "E"), ("B", "F")] {
        graph.add_edge(v, w, 1.0).expect("labels exist");
    }
    graph
}

#[test]
fn position_count_matches_vertex_count() {
    for n in [0, 1, 2, 7, 20] {
        let graph = Graph::new(n);
        let mut engine = ForceLayout::with_seed(n, 700.0, 700.0, 1);
        assert_eq!(engine.positions().len(), n);

        for _ in 0..3 {
            let positions = engine.step_with(graph.adjacency_matrix(), &ForceConstants::default());
            assert_eq!(positions.len(), n);
        }
    }
}

#[test]
fn two_vertices_at_rest_length_stay_put() {
    let mut graph = Graph::new(2);
    graph.add_vertices(["A", "B"]).unwrap();
    graph.add_edge("A", "B", 1.0).unwrap();

    let mut engine = ForceLayout::with_seed(2, 700.0, 700.0, 2024);
    let start = engine.positions().to_vec();
    let c2 = start[0].to(start[1]).length();

    let after = engine.step(graph.adjacency_matrix(), 1.0, c2, 0.0, 1.0).to_vec();

    for (before, after) in start.iter().zip(&after) {
        assert_relative_eq!(before.x, after.x, epsilon = 1e-9);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-9);
    }
}

#[test]
fn sample_graph_stays_finite_for_a_thousand_steps() {
    let graph = sample_graph();
    let mut engine = ForceLayout::with_seed(6, 700.0, 700.0, 0x5EED);
    let constants = ForceConstants::default();

    for _ in 0..1000 {
        engine.step_with(graph.adjacency_matrix(), &constants);
    }

    assert_eq!(engine.positions().len(), 6);
    for p in engine.positions() {
        assert!(p.is_finite(), "non-finite position {p:?}");
    }
}

#[test]
fn driver_matches_manual_stepping() {
    let graph = sample_graph();
    let config = LayoutConfig {
        steps: 25,
        seed: Some(17),
        ..LayoutConfig::default()
    };

    let result = layout::run(&graph, &config);

    let mut engine = ForceLayout::with_seed(6, 700.0, 700.0, 17);
    for _ in 0..25 {
        engine.step_with(graph.adjacency_matrix(), &config.constants);
    }
    assert_eq!(result.positions, engine.positions());
}

#[test]
fn forces_are_equal_and_opposite_for_any_pair() {
    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(3.0, 4.0),
        Vec2::new(-120.0, 35.5),
        Vec2::new(640.0, 12.25),
    ];

    for &a in &points {
        for &b in &points {
            if a == b {
                continue;
            }
            let (pull_a, pull_b) = (attractive_force(1.0, 16.0, a, b), attractive_force(1.0, 16.0, b, a));
            assert_relative_eq!(pull_a.x, -pull_b.x, epsilon = 1e-12);
            assert_relative_eq!(pull_a.y, -pull_b.y, epsilon = 1e-12);

            let (push_a, push_b) = (repulsive_force(30000.0, a, b), repulsive_force(30000.0, b, a));
            assert_relative_eq!(push_a.x, -push_b.x, epsilon = 1e-12);
            assert_relative_eq!(push_a.y, -push_b.y, epsilon = 1e-12);
        }
    }
}
