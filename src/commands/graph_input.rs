//! Resolve `--graph`, `--graph-file` and `--isolate` into a graph

use std::fs;

use crate::cli::GraphArgs;
use frontier_core::error::{FrontierError, Result};
use frontier_core::graph::{GraphSpec, SampleGraph, WeightedGraph};

/// A graph ready to run, plus the name it is reported under
pub struct LoadedGraph {
    pub name: String,
    pub graph: WeightedGraph,
}

/// Build the requested graph, falling back to `default` when neither
/// `--graph` nor `--graph-file` is given
pub fn load_graph(args: &GraphArgs, default: SampleGraph) -> Result<LoadedGraph> {
    let (name, graph) = match &args.graph_file {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| FrontierError::io(path, e))?;
            let graph = GraphSpec::from_json(&text)?.build()?;
            (path.display().to_string(), graph)
        }
        None => {
            let sample = args.graph.unwrap_or(default);
            (sample.name().to_string(), sample.build()?)
        }
    };

    let graph = match &args.isolate {
        Some(node) => {
            tracing::debug!(node = %node, "isolating node");
            graph.isolate(node)?
        }
        None => graph,
    };

    Ok(LoadedGraph { name, graph })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args() -> GraphArgs {
        GraphArgs {
            graph: None,
            graph_file: None,
            isolate: None,
        }
    }

    #[test]
    fn test_default_sample() {
        let loaded = load_graph(&args(), SampleGraph::SpanningFigure2).unwrap();
        assert_eq!(loaded.name, "spanning-2");
        assert_eq!(loaded.graph.node_count(), 10);
    }

    #[test]
    fn test_graph_file_and_isolate() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"nodes": ["P", "Q", "R"], "edges": [["P", "Q", 1], ["Q", "R", 2]]}}"#
        )
        .unwrap();

        let mut input = args();
        input.graph_file = Some(file.path().to_path_buf());
        input.isolate = Some("R".to_string());
        let loaded = load_graph(&input, SampleGraph::ShortestPath).unwrap();
        assert_eq!(loaded.graph.node_count(), 3);
        assert_eq!(loaded.graph.edge_count(), 1);
    }

    #[test]
    fn test_isolate_unknown_node() {
        let mut input = args();
        input.isolate = Some("Z".to_string());
        let err = load_graph(&input, SampleGraph::ShortestPath).err().unwrap();
        assert!(matches!(err, FrontierError::NodeNotFound { .. }));
    }

    #[test]
    fn test_missing_graph_file_is_io_error() {
        let mut input = args();
        input.graph_file = Some("/nonexistent/graph.json".into());
        let err = load_graph(&input, SampleGraph::ShortestPath).err().unwrap();
        assert!(matches!(err, FrontierError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/graph.json"));
    }
}
