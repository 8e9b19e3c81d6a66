//! `frontier prim` - minimum spanning tree

use crate::cli::{GraphArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::graph_input::{load_graph, LoadedGraph};
use crate::commands::replay::{drive, print_steps, ReplayOptions};
use crate::output_by_format_result;
use frontier_core::error::{FrontierError, Result};
use frontier_core::graph::algos::SpanningTreeResult;
use frontier_core::graph::{SampleGraph, SpanningTreeEngine};
use frontier_core::records::{format_edge_line, format_header, format_totals_line};
use frontier_core::replay::Step;

/// Execute the prim command
pub fn execute(ctx: &CommandContext, input: &GraphArgs, start: Option<&str>) -> Result<()> {
    let cli = ctx.cli;
    let LoadedGraph { name, graph } = load_graph(input, SampleGraph::SpanningFigure1)?;
    let options = ReplayOptions::from_context(ctx);

    let engine = SpanningTreeEngine::new(&graph, start)?;
    let start = engine.start().to_string();

    match cli.format {
        OutputFormat::Human if !cli.quiet => {
            println!(
                "Prim from {} on {} ({} nodes, {} edges)",
                start,
                name,
                graph.node_count(),
                graph.edge_count()
            );
            println!();
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header("prim", &[("graph", name.clone()), ("start", start.clone())])
            );
        }
        _ => {}
    }

    let (engine, steps) = drive(ctx, &options, engine)?;
    let result = engine.result();
    let last = steps
        .last()
        .ok_or_else(|| FrontierError::Other("prim produced no steps".to_string()))?;

    print_steps(cli, &options, &steps);

    output_by_format_result!(cli.format,
        json => {
            let mut doc = serde_json::json!({
                "mode": "prim",
                "graph": name,
                "result": result,
                "message": last.message,
            });
            if options.show_steps {
                doc["steps"] = serde_json::to_value(&steps)?;
            }
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok::<(), FrontierError>(())
        },
        human => {
            if options.show_steps {
                println!();
            }
            print_human(ctx, &result, last);
        },
        records => {
            print_records(&result, &steps);
        }
    )
}

fn print_human(ctx: &CommandContext, result: &SpanningTreeResult, last: &Step) {
    let labels: Vec<String> = result
        .edges
        .iter()
        .map(|e| format!("{}-{}", e.parent, e.child))
        .collect();
    let width = labels
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max("Edge".len());

    println!("{:<width$}  {:>6}  {:>6}", "Edge", "Weight", "Total", width = width);
    for (label, edge) in labels.iter().zip(&result.edges) {
        println!(
            "{:<width$}  {:>6}  {:>6}",
            label,
            edge.weight.to_string(),
            edge.running_total.to_string(),
            width = width
        );
    }
    println!();
    println!("{}", last.message);

    if ctx.cli.verbose {
        let stats = result.frontier;
        println!(
            "Frontier: {} inserted, {} popped, {} stale discarded",
            stats.inserted, stats.popped, stats.stale_discarded
        );
    }
}

fn print_records(result: &SpanningTreeResult, steps: &[Step]) {
    for edge in &result.edges {
        println!("{}", format_edge_line(edge));
    }

    let mut totals = vec![
        ("steps", steps.len().to_string()),
        ("total", result.total_weight.to_string()),
        ("edges", result.edges.len().to_string()),
    ];
    if !result.absent.is_empty() {
        totals.push(("absent", result.absent.join(",")));
    }
    totals.push(("inserted", result.frontier.inserted.to_string()));
    totals.push(("popped", result.frontier.popped.to_string()));
    totals.push(("stale", result.frontier.stale_discarded.to_string()));
    println!("{}", format_totals_line(&totals));
}
