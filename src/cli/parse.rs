use frontier_core::config::MAX_INTERVAL_MS;
use frontier_core::format::OutputFormat;
use frontier_core::graph::SampleGraph;
use frontier_core::tree::TraversalOrder;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a sample graph name
pub fn parse_sample_graph(s: &str) -> std::result::Result<SampleGraph, String> {
    s.parse::<SampleGraph>().map_err(|e| e.to_string())
}

/// Which traversal orders to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSelection {
    All,
    One(TraversalOrder),
}

impl OrderSelection {
    pub fn orders(self) -> Vec<TraversalOrder> {
        match self {
            OrderSelection::All => TraversalOrder::ALL.to_vec(),
            OrderSelection::One(order) => vec![order],
        }
    }
}

/// Parse a traversal order; `all` selects every order
pub fn parse_traversal_order(s: &str) -> std::result::Result<OrderSelection, String> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(OrderSelection::All);
    }
    s.parse::<TraversalOrder>()
        .map(OrderSelection::One)
        .map_err(|e| e.to_string())
}

/// Parse a replay delay in milliseconds
pub fn parse_delay_ms(s: &str) -> std::result::Result<u64, String> {
    let ms: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number of milliseconds", s))?;
    if ms > MAX_INTERVAL_MS {
        return Err(format!("{} exceeds the maximum of {} ms", ms, MAX_INTERVAL_MS));
    }
    Ok(ms)
}
