//! `frontier traverse` - binary tree traversals

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use frontier_core::error::{FrontierError, Result};
use frontier_core::layout::layout_tree;
use frontier_core::records::{
    format_header, format_order_line, format_position_line, format_totals_line,
};
use frontier_core::tree::{BinaryTree, TraversalOrder};

/// Execute the traverse command
pub fn execute(
    ctx: &CommandContext,
    values: Option<&str>,
    orders: Vec<TraversalOrder>,
    layout: bool,
) -> Result<()> {
    let cli = ctx.cli;
    let tree = match values {
        Some(list) => BinaryTree::parse_values(list)?,
        None => BinaryTree::sample(),
    };

    let visits: Vec<(TraversalOrder, Vec<&str>)> =
        orders.into_iter().map(|o| (o, tree.values(o))).collect();
    let layout = if layout {
        Some(layout_tree(
            &tree,
            tree.root(),
            ctx.config.layout.canvas_width,
            &ctx.config.layout.tree,
        )?)
    } else {
        None
    };

    output_by_format_result!(cli.format,
        json => {
            let mut orders = serde_json::Map::new();
            for (order, values) in &visits {
                orders.insert(order.name().to_string(), serde_json::json!(values));
            }
            let mut doc = serde_json::json!({
                "mode": "traverse",
                "nodes": tree.len(),
                "orders": orders,
            });
            if let Some(layout) = &layout {
                let positions: Vec<serde_json::Value> = layout
                    .iter()
                    .map(|(handle, point)| {
                        serde_json::json!({
                            "value": tree.value(handle),
                            "x": point.x,
                            "y": point.y,
                        })
                    })
                    .collect();
                doc["layout"] = serde_json::Value::Array(positions);
            }
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok::<(), FrontierError>(())
        },
        human => {
            if !cli.quiet {
                println!("Binary tree with {} nodes", tree.len());
                println!();
            }
            let width = visits.iter().map(|(o, _)| o.name().len() + 1).max().unwrap_or(0);
            for (order, values) in &visits {
                println!("{:<width$} {}", format!("{}:", order), values.join(" "), width = width);
            }
            if let Some(layout) = &layout {
                println!();
                println!("Layout ({} wide):", ctx.config.layout.canvas_width);
                for (handle, point) in layout.iter() {
                    println!("  {:>6}  x={} y={}", tree.value(handle), point.x, point.y);
                }
            }
        },
        records => {
            println!("{}", format_header("traverse", &[("nodes", tree.len().to_string())]));
            for (order, values) in &visits {
                println!("{}", format_order_line(order.name(), values));
            }
            if let Some(layout) = &layout {
                for (handle, point) in layout.iter() {
                    println!("{}", format_position_line(tree.value(handle), point));
                }
            }
            println!("{}", format_totals_line(&[("orders", visits.len().to_string())]));
        }
    )
}
