//! `frontier samples` - list bundled inputs

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use frontier_core::error::{FrontierError, Result};
use frontier_core::graph::SampleGraph;
use frontier_core::records::{escape_quotes, format_header, format_order_line};
use frontier_core::tree::{BinaryTree, TraversalOrder};

/// Execute the samples command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let mut graphs = Vec::with_capacity(SampleGraph::ALL.len());
    for sample in SampleGraph::ALL {
        let graph = sample.build()?;
        graphs.push((sample, graph.node_count(), graph.edge_count()));
    }
    let frequencies = &ctx.config.huffman.default_frequencies;
    let tree = BinaryTree::sample();
    let level_order = tree.values(TraversalOrder::Level);
    let tree_values = level_order.join(",");

    output_by_format_result!(cli.format,
        json => {
            let graphs: Vec<serde_json::Value> = graphs
                .iter()
                .map(|(sample, nodes, edges)| {
                    serde_json::json!({
                        "name": sample.name(),
                        "description": sample.description(),
                        "nodes": nodes,
                        "edges": edges,
                    })
                })
                .collect();
            let doc = serde_json::json!({
                "graphs": graphs,
                "frequencies": frequencies,
                "tree": tree_values,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok::<(), FrontierError>(())
        },
        human => {
            println!("Graphs:");
            for (sample, _, _) in &graphs {
                println!("  {:<14} {}", sample.name(), sample.description());
            }
            println!();
            println!("Huffman frequencies:");
            println!("  {}", frequencies);
            println!();
            println!("Binary tree (level order):");
            println!("  {}", tree_values);
        },
        records => {
            println!("{}", format_header("samples", &[("graphs", graphs.len().to_string())]));
            for (sample, nodes, edges) in &graphs {
                println!("G {} nodes={} edges={}", sample.name(), nodes, edges);
            }
            println!("F \"{}\"", escape_quotes(frequencies));
            println!("{}", format_order_line(TraversalOrder::Level.name(), &level_order));
        }
    )
}
