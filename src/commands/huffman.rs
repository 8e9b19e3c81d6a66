//! `frontier huffman` - prefix-code tree construction

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::replay::{drive, print_steps, ReplayOptions};
use crate::output_by_format_result;
use frontier_core::error::{FrontierError, Result};
use frontier_core::huffman::{FrequencyMap, NodeHandle, PrefixCodeEngine, PrefixCodeOutcome};
use frontier_core::layout::{layout_tree, TreeLayout};
use frontier_core::records::{
    format_code_line, format_header, format_position_line, format_totals_line,
};
use frontier_core::replay::Step;

/// Inputs of the huffman command
pub struct HuffmanOptions<'a> {
    pub frequencies: Option<&'a str>,
    pub text: Option<&'a str>,
    pub encode: Option<&'a str>,
    pub layout: bool,
}

/// A message encoded with the derived codes and decoded back
struct Encoding {
    input: String,
    bits: String,
    decoded: String,
}

/// Execute the huffman command
pub fn execute(ctx: &CommandContext, opts: HuffmanOptions) -> Result<()> {
    let cli = ctx.cli;
    let frequencies = resolve_frequencies(ctx, &opts)?;
    let options = ReplayOptions::from_context(ctx);

    match cli.format {
        OutputFormat::Human if !cli.quiet => {
            println!("Huffman over {} symbols ({})", frequencies.len(), frequencies);
            println!();
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "huffman",
                    &[
                        ("symbols", frequencies.len().to_string()),
                        ("baseline", ctx.config.huffman.baseline_bits.to_string()),
                    ]
                )
            );
        }
        _ => {}
    }

    let engine = PrefixCodeEngine::new(frequencies)
        .with_baseline_bits(ctx.config.huffman.baseline_bits);
    let (engine, steps) = drive(ctx, &options, engine)?;
    let outcome = engine
        .outcome()
        .ok_or_else(|| FrontierError::Other("huffman run did not finish".to_string()))?;
    let last = steps
        .last()
        .ok_or_else(|| FrontierError::Other("huffman produced no steps".to_string()))?;

    let encoding = opts
        .encode
        .map(|input| encode_round_trip(&outcome, input))
        .transpose()?;
    let layout = if opts.layout {
        Some(layout_tree(
            &outcome.tree,
            outcome.root,
            ctx.config.layout.canvas_width,
            &ctx.config.layout.tree,
        )?)
    } else {
        None
    };

    print_steps(cli, &options, &steps);

    output_by_format_result!(cli.format,
        json => {
            let mut doc = serde_json::json!({
                "mode": "huffman",
                "frequencies": outcome.frequencies,
                "codes": outcome.codes,
                "stats": outcome.stats,
                "frontier": outcome.frontier,
                "message": last.message,
            });
            if let Some(encoding) = &encoding {
                doc["encoded"] = serde_json::json!({
                    "input": encoding.input,
                    "bits": encoding.bits,
                    "decoded": encoding.decoded,
                });
            }
            if let Some(layout) = &layout {
                doc["layout"] = layout_json(&outcome, layout);
            }
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
            print_human(ctx, &outcome, last, encoding.as_ref(), layout.as_ref());
        },
        records => {
            print_records(&outcome, &steps, encoding.as_ref(), layout.as_ref());
        }
    )
}

/// Positional frequencies, then `--text`, then the configured default
fn resolve_frequencies(ctx: &CommandContext, opts: &HuffmanOptions) -> Result<FrequencyMap> {
    match (opts.frequencies, opts.text) {
        (Some(list), _) => FrequencyMap::parse(list),
        (None, Some(text)) => FrequencyMap::from_sample(text),
        (None, None) => FrequencyMap::parse(&ctx.config.huffman.default_frequencies),
    }
}

/// Split a message into symbols.
///
/// Single-character alphabets take the message as plain text. As soon as one
/// symbol is longer, the message is a comma-separated symbol list, the same
/// shape the frequency list uses.
fn split_message(frequencies: &FrequencyMap, input: &str) -> (Vec<String>, &'static str) {
    let multi = frequencies
        .entries()
        .iter()
        .any(|e| e.symbol.chars().count() > 1);
    if multi {
        let symbols = input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        (symbols, ",")
    } else {
        (input.chars().map(String::from).collect(), "")
    }
}

/// Encode `input` symbol by symbol, then decode the bits back
fn encode_round_trip(outcome: &PrefixCodeOutcome, input: &str) -> Result<Encoding> {
    let (symbols, separator) = split_message(&outcome.frequencies, input);
    let bits = outcome.codes.encode(symbols.iter().map(String::as_str))?;
    let decoded = outcome.tree.decode(outcome.root, &bits)?.join(separator);
    tracing::debug!(symbols = symbols.len(), bits = bits.len(), "encoded");
    Ok(Encoding {
        input: input.to_string(),
        bits,
        decoded,
    })
}

fn layout_json(outcome: &PrefixCodeOutcome, layout: &TreeLayout<NodeHandle>) -> serde_json::Value {
    let nodes: Vec<serde_json::Value> = layout
        .iter()
        .map(|(handle, point)| {
            serde_json::json!({
                "node": handle.index(),
                "label": outcome.tree.label(handle),
                "x": point.x,
                "y": point.y,
            })
        })
        .collect();
    serde_json::Value::Array(nodes)
}

fn print_human(
    ctx: &CommandContext,
    outcome: &PrefixCodeOutcome,
    last: &Step,
    encoding: Option<&Encoding>,
    layout: Option<&TreeLayout<NodeHandle>>,
) {
    let width = outcome
        .frequencies
        .entries()
        .iter()
        .map(|e| e.symbol.chars().count())
        .max()
        .unwrap_or(0)
        .max("Symbol".len());

    println!("{:<width$}  {:>6}  Code", "Symbol", "Freq", width = width);
    for entry in outcome.frequencies.entries() {
        println!(
            "{:<width$}  {:>6}  {}",
            entry.symbol,
            entry.frequency,
            outcome.codes.get(&entry.symbol).unwrap_or("-"),
            width = width
        );
    }
    println!();
    println!("{}", last.message);

    if let Some(encoding) = encoding {
        println!();
        println!("Encoded {:?}: {}", encoding.input, encoding.bits);
        println!("Decoded: {:?}", encoding.decoded);
    }

    if let Some(layout) = layout {
        println!();
        println!("Layout ({} wide):", ctx.config.layout.canvas_width);
        for (handle, point) in layout.iter() {
            println!("  {:>8}  x={} y={}", outcome.tree.label(handle), point.x, point.y);
        }
    }

    if ctx.cli.verbose {
        let stats = outcome.frontier;
        println!(
            "Frontier: {} inserted, {} popped, {} stale discarded",
            stats.inserted, stats.popped, stats.stale_discarded
        );
    }
}

fn print_records(
    outcome: &PrefixCodeOutcome,
    steps: &[Step],
    encoding: Option<&Encoding>,
    layout: Option<&TreeLayout<NodeHandle>>,
) {
    for entry in outcome.frequencies.entries() {
        if let Some(code) = outcome.codes.get(&entry.symbol) {
            println!("{}", format_code_line(&entry.symbol, code, entry.frequency));
        }
    }
    if let Some(layout) = layout {
        for (handle, point) in layout.iter() {
            println!("{}", format_position_line(&outcome.tree.label(handle), point));
        }
    }

    let mut totals = vec![
        ("steps", steps.len().to_string()),
        ("original_bits", outcome.stats.original_bits.to_string()),
        ("compressed_bits", outcome.stats.compressed_bits.to_string()),
        ("saved", format!("{:.1}", outcome.stats.percent_saved())),
    ];
    if let Some(encoding) = encoding {
        totals.push(("encoded", encoding.bits.clone()));
    }
    println!("{}", format_totals_line(&totals));
}
