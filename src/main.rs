use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use eades::cli::{Cli, Commands, OutputArgs};
use eades::graph::Graph;
use eades::io::FormatRegistry;
use eades::layout;

/// The six-vertex sample graph: A-B, B-C, C-D, C-E, B-F
fn demo_graph() -> anyhow::Result<Graph> {
    let mut graph = Graph::new(6);
    graph.add_vertices(["A", "B", "C", "D", "E", "F"])?;
    graph.add_edge("A", "B", 2.0)?;
    graph.add_edge("B", "C", 1.0)?;
    graph.add_edge("C", "D", 1.0)?;
    graph.add_edge("C", "E", 1.0)?;
    graph.add_edge("B", "F", 1.0)?;
    Ok(graph)
}

fn read_graph(registry: &FormatRegistry, input: &Path) -> anyhow::Result<Graph> {
    let reader = registry.reader_for_path(input)?;
    let graph = reader
        .read(input)
        .with_context(|| format!("failed to read graph {}", input.display()))?;
    Ok(graph)
}

fn write_layout(
    registry: &FormatRegistry,
    result: &layout::LayoutResult,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let writer = match &output.format {
        Some(format) => registry
            .writer_for_format(format)
            .ok_or_else(|| anyhow::anyhow!("unsupported output format: {format}"))?,
        None => registry.writer_for_path(&output.output)?,
    };

    writer
        .write(result, &output.output)
        .with_context(|| format!("failed to write {}", output.output.display()))?;

    tracing::info!(
        format = writer.format_id(),
        path = %output.output.display(),
        "wrote layout"
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = FormatRegistry::with_defaults();

    let (graph, output, tuning) = match cli.command {
        Commands::Layout {
            input,
            output,
            tuning,
        } => (read_graph(&registry, &input)?, output, tuning),
        Commands::Demo { output, tuning } => (demo_graph()?, output, tuning),
    };

    let config = tuning.resolve()?;
    let result = layout::run(&graph, &config);
    write_layout(&registry, &result, &output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_graph_matches_sample() {
        let graph = demo_graph().unwrap();

        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(0, 1), (1, 2), (1, 5), (2, 3), (2, 4)]
        );
    }
}
