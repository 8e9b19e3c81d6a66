use crate::error::{FrontierError, Result};
use crate::layout::LayoutTree;
use serde::Serialize;
use std::fmt;

/// Stable index of a node inside a [`PrefixTree`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeHandle(usize);

impl NodeHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrefixKind {
    Leaf { symbol: String },
    Internal { left: NodeHandle, right: NodeHandle },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixNode {
    pub frequency: u64,
    #[serde(flatten)]
    pub kind: PrefixKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeHandle>,
}

impl PrefixNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, PrefixKind::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<&str> {
        match &self.kind {
            PrefixKind::Leaf { symbol } => Some(symbol),
            PrefixKind::Internal { .. } => None,
        }
    }
}

/// Arena of prefix-code tree nodes.
///
/// Nodes are only ever appended. An internal node owns exactly two children,
/// and a node can become the child of at most one parent, so the arena always
/// holds a forest of strict binary trees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrefixTree {
    nodes: Vec<PrefixNode>,
}

impl PrefixTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&PrefixNode> {
        self.nodes.get(handle.0)
    }

    /// Add a standalone leaf
    pub fn leaf(&mut self, symbol: impl Into<String>, frequency: u64) -> NodeHandle {
        self.push(PrefixNode {
            frequency,
            kind: PrefixKind::Leaf {
                symbol: symbol.into(),
            },
            parent: None,
        })
    }

    /// Join two current roots under a new internal node.
    ///
    /// Fails if either handle is unknown, already has a parent, or both name
    /// the same node.
    pub fn merge(&mut self, left: NodeHandle, right: NodeHandle) -> Result<NodeHandle> {
        if left == right {
            return Err(FrontierError::invalid_value(
                "merge",
                format!("{} cannot be merged with itself", left),
            ));
        }
        for handle in [left, right] {
            match self.get(handle) {
                None => return Err(FrontierError::invalid_value("tree handle", handle)),
                Some(node) if node.parent.is_some() => {
                    return Err(FrontierError::invalid_value(
                        "merge",
                        format!("{} already has a parent", handle),
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(self.join(left, right))
    }

    /// Merge without validation; callers guarantee both handles are roots
    pub(crate) fn join(&mut self, left: NodeHandle, right: NodeHandle) -> NodeHandle {
        let frequency = self.nodes[left.0]
            .frequency
            .saturating_add(self.nodes[right.0].frequency);
        let parent = self.push(PrefixNode {
            frequency,
            kind: PrefixKind::Internal { left, right },
            parent: None,
        });
        self.nodes[left.0].parent = Some(parent);
        self.nodes[right.0].parent = Some(parent);
        parent
    }

    fn push(&mut self, node: PrefixNode) -> NodeHandle {
        self.nodes.push(node);
        NodeHandle(self.nodes.len() - 1)
    }

    /// Nodes that are not (yet) anyone's child, in creation order
    pub fn roots(&self) -> Vec<NodeHandle> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(i, _)| NodeHandle(i))
            .collect()
    }

    /// `(left, right)` of an internal node; `(None, None)` for leaves
    pub fn children(&self, handle: NodeHandle) -> (Option<NodeHandle>, Option<NodeHandle>) {
        match self.get(handle).map(|n| &n.kind) {
            Some(PrefixKind::Internal { left, right }) => (Some(*left), Some(*right)),
            _ => (None, None),
        }
    }

    /// `a:2` for leaves, the bare frequency for internal nodes
    pub fn label(&self, handle: NodeHandle) -> String {
        match self.get(handle) {
            Some(PrefixNode {
                frequency,
                kind: PrefixKind::Leaf { symbol },
                ..
            }) => format!("{}:{}", symbol, frequency),
            Some(node) => node.frequency.to_string(),
            None => handle.to_string(),
        }
    }

    /// Leaves under `root` in left-to-right order
    pub fn leaves(&self, root: NodeHandle) -> Vec<NodeHandle> {
        let mut leaves = Vec::new();
        let mut stack = vec![root];
        while let Some(handle) = stack.pop() {
            match self.children(handle) {
                (Some(left), Some(right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                _ => leaves.push(handle),
            }
        }
        leaves
    }

    /// Decode a bit string by walking from `root`: `0` goes left, `1` right.
    ///
    /// A single-leaf tree decodes each `0` as its symbol.
    pub fn decode(&self, root: NodeHandle, bits: &str) -> Result<Vec<String>> {
        let root_node = self
            .get(root)
            .ok_or_else(|| FrontierError::invalid_value("tree handle", root))?;

        let mut symbols = Vec::new();
        if let Some(symbol) = root_node.symbol() {
            for bit in bits.chars() {
                if bit != '0' {
                    return Err(FrontierError::invalid_value("encoded bit", bit));
                }
                symbols.push(symbol.to_string());
            }
            return Ok(symbols);
        }

        let mut current = root;
        for bit in bits.chars() {
            let (left, right) = self.children(current);
            current = match bit {
                '0' => left,
                '1' => right,
                other => return Err(FrontierError::invalid_value("encoded bit", other)),
            }
            .ok_or_else(|| FrontierError::invalid_value("tree handle", current))?;

            if let Some(symbol) = self.nodes[current.0].symbol() {
                symbols.push(symbol.to_string());
                current = root;
            }
        }

        if current != root {
            return Err(FrontierError::invalid_value(
                "encoded bits",
                "input ends in the middle of a code",
            ));
        }
        Ok(symbols)
    }
}

impl LayoutTree for PrefixTree {
    type Handle = NodeHandle;

    fn children(&self, node: NodeHandle) -> (Option<NodeHandle>, Option<NodeHandle>) {
        PrefixTree::children(self, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> (PrefixTree, NodeHandle) {
        let mut tree = PrefixTree::new();
        let a = tree.leaf("a", 1);
        let b = tree.leaf("b", 2);
        let c = tree.leaf("c", 4);
        let ab = tree.merge(a, b).unwrap();
        let root = tree.merge(ab, c).unwrap();
        (tree, root)
    }

    #[test]
    fn test_merge_sums_frequencies_and_links_parent() {
        let (tree, root) = small_tree();
        assert_eq!(tree.get(root).unwrap().frequency, 7);
        assert_eq!(tree.roots(), vec![root]);
        assert_eq!(tree.label(root), "7");
        assert_eq!(tree.label(NodeHandle(0)), "a:1");
    }

    #[test]
    fn test_merge_rejects_nodes_with_parent() {
        let (mut tree, _) = small_tree();
        let d = tree.leaf("d", 1);
        let err = tree.merge(NodeHandle(0), d).unwrap_err();
        assert!(matches!(err, FrontierError::InvalidValue { .. }));
    }

    #[test]
    fn test_merge_rejects_self_and_unknown() {
        let mut tree = PrefixTree::new();
        let a = tree.leaf("a", 1);
        assert!(tree.merge(a, a).is_err());
        assert!(tree.merge(a, NodeHandle(9)).is_err());
    }

    #[test]
    fn test_leaves_left_to_right() {
        let (tree, root) = small_tree();
        let symbols: Vec<_> = tree
            .leaves(root)
            .into_iter()
            .filter_map(|h| tree.get(h).and_then(|n| n.symbol()))
            .collect();
        assert_eq!(symbols, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_decode_walks_tree() {
        let (tree, root) = small_tree();
        // a=00, b=01, c=1
        let decoded = tree.decode(root, "00101").unwrap();
        assert_eq!(decoded, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_decode_rejects_truncated_input() {
        let (tree, root) = small_tree();
        assert!(tree.decode(root, "0").is_err());
        assert!(tree.decode(root, "2").is_err());
    }

    #[test]
    fn test_decode_single_leaf() {
        let mut tree = PrefixTree::new();
        let only = tree.leaf("z", 3);
        assert_eq!(tree.decode(only, "000").unwrap(), vec!["z", "z", "z"]);
        assert!(tree.decode(only, "01").is_err());
    }
}
