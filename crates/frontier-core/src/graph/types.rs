use crate::error::{FrontierError, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Opaque node identifier (a label such as `"A"`)
pub type NodeId = String;

/// A non-negative edge weight or accumulated path cost.
///
/// Sample data only uses small integers, but any finite non-negative real is
/// accepted. `Weight::INFINITY` marks an unreached distance.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    /// Create a weight, rejecting negative, NaN and infinite values
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(FrontierError::invalid_value("edge weight", value));
        }
        Ok(Weight(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Weight {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Weight(value as f64)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "∞")
        }
    }
}

// Infinite distances serialize as `null`; finite ones as plain numbers.
impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// A graph node: identifier plus optional drawing coordinates.
///
/// Coordinates are carried for presentation only; no algorithm reads them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<(f64, f64)>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Node {
            id: id.into(),
            position: None,
        }
    }

    pub fn at(id: impl Into<NodeId>, x: f64, y: f64) -> Self {
        Node {
            id: id.into(),
            position: Some((x, y)),
        }
    }
}

/// Undirected weighted edge, stored once and traversed both ways
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    /// True if this edge joins `a` and `b` in either orientation
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// True if `node` is one of the endpoints
    pub fn touches(&self, node: &str) -> bool {
        self.from == node || self.to == node
    }
}

/// Immutable node set plus undirected weighted edge list.
///
/// Node order is the construction order and is what every engine iterates in,
/// so results are reproducible. Adjacency is precomputed as node indices.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(usize, Weight)>>,
}

impl WeightedGraph {
    /// Build a graph, validating that it is non-empty, node ids are unique and
    /// every edge references known nodes.
    ///
    /// Self-loops are accepted; engines never relax through them because the
    /// endpoint is already finalized when the edge is examined.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(FrontierError::empty_input("graph has no nodes"));
        }

        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(FrontierError::already_exists("node", &node.id));
            }
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];
        for edge in &edges {
            let from = *index
                .get(&edge.from)
                .ok_or_else(|| FrontierError::node_not_found(&edge.from))?;
            let to = *index
                .get(&edge.to)
                .ok_or_else(|| FrontierError::node_not_found(&edge.to))?;
            adjacency[from].push((to, edge.weight));
            if from != to {
                adjacency[to].push((from, edge.weight));
            }
        }

        Ok(WeightedGraph {
            nodes,
            index,
            edges,
            adjacency,
        })
    }

    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Position of a node in construction order
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Resolve a node id or fail with `NodeNotFound`
    pub fn require(&self, id: &str) -> Result<usize> {
        self.index_of(id)
            .ok_or_else(|| FrontierError::node_not_found(id))
    }

    pub(crate) fn id_at(&self, index: usize) -> &str {
        &self.nodes[index].id
    }

    pub(crate) fn adjacent(&self, index: usize) -> &[(usize, Weight)] {
        &self.adjacency[index]
    }

    /// Neighbors of a node with the connecting edge weight
    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = (&'a str, Weight)> + 'a {
        let adjacent: &'a [(usize, Weight)] = match self.index.get(id) {
            Some(&i) => &self.adjacency[i],
            None => &[],
        };
        adjacent
            .iter()
            .map(move |&(j, w)| (self.nodes[j].id.as_str(), w))
    }

    /// Weight of the cheapest edge joining `a` and `b`, if any
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<Weight> {
        self.edges
            .iter()
            .filter(|e| e.connects(a, b))
            .map(|e| e.weight)
            .min_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Copy of this graph with every edge incident to `id` removed.
    ///
    /// The node itself stays, so engines report it as unreached rather than
    /// unknown.
    pub fn isolate(&self, id: &str) -> Result<WeightedGraph> {
        self.require(id)?;
        let edges = self
            .edges
            .iter()
            .filter(|e| !e.touches(id))
            .cloned()
            .collect();
        WeightedGraph::new(self.nodes.clone(), edges)
    }
}

/// Incremental constructor for [`WeightedGraph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<(NodeId, NodeId, f64)>,
}

impl GraphBuilder {
    pub fn node(mut self, id: impl Into<NodeId>) -> Self {
        self.nodes.push(Node::new(id));
        self
    }

    pub fn node_at(mut self, id: impl Into<NodeId>, x: f64, y: f64) -> Self {
        self.nodes.push(Node::at(id, x, y));
        self
    }

    pub fn nodes<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        self.nodes.extend(ids.into_iter().map(Node::new));
        self
    }

    pub fn edge(mut self, from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        self.edges.push((from.into(), to.into(), weight));
        self
    }

    pub fn build(self) -> Result<WeightedGraph> {
        let edges = self
            .edges
            .into_iter()
            .map(|(from, to, w)| {
                Ok(Edge {
                    from,
                    to,
                    weight: Weight::new(w)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        WeightedGraph::new(self.nodes, edges)
    }
}

/// Serialized graph description, e.g. the JSON accepted by `--graph-file`:
///
/// ```json
/// { "nodes": ["A", {"id": "B", "x": 300, "y": 100}], "edges": [["A", "B", 4]] }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct GraphSpec {
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<(String, String, f64)>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
    Id(String),
    Positioned { id: String, x: f64, y: f64 },
}

impl GraphSpec {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn build(self) -> Result<WeightedGraph> {
        let mut builder = WeightedGraph::builder();
        for node in self.nodes {
            builder = match node {
                NodeSpec::Id(id) => builder.node(id),
                NodeSpec::Positioned { id, x, y } => builder.node_at(id, x, y),
            };
        }
        for (from, to, weight) in self.edges {
            builder = builder.edge(from, to, weight);
        }
        builder.build()
    }
}
