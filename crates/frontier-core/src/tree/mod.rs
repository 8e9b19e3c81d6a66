//! Arena binary tree and its depth-first and breadth-first traversals

use crate::error::{FrontierError, Result};
use crate::layout::LayoutTree;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Index of a node in a [`BinaryTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TreeHandle(usize);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub value: String,
    pub left: Option<TreeHandle>,
    pub right: Option<TreeHandle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryTree {
    nodes: Vec<TreeNode>,
    root: TreeHandle,
}

impl BinaryTree {
    /// Build from values in level order; `None` marks a missing node.
    ///
    /// Slot `i` has children at `2i + 1` and `2i + 2`. A value whose parent
    /// slot is missing is rejected.
    pub fn from_level_order<S: Into<String>>(values: Vec<Option<S>>) -> Result<Self> {
        let mut slots: Vec<Option<TreeHandle>> = Vec::with_capacity(values.len());
        let mut nodes: Vec<TreeNode> = Vec::new();

        for (i, value) in values.into_iter().enumerate() {
            let Some(value) = value else {
                slots.push(None);
                continue;
            };
            let handle = TreeHandle(nodes.len());
            nodes.push(TreeNode {
                value: value.into(),
                left: None,
                right: None,
            });
            slots.push(Some(handle));

            if i == 0 {
                continue;
            }
            let parent = slots[(i - 1) / 2].ok_or_else(|| {
                FrontierError::invalid_value(
                    "tree values",
                    format!("'{}' at position {} has no parent", nodes[handle.0].value, i + 1),
                )
            })?;
            if i % 2 == 1 {
                nodes[parent.0].left = Some(handle);
            } else {
                nodes[parent.0].right = Some(handle);
            }
        }

        match slots.first() {
            Some(Some(root)) => Ok(BinaryTree { root: *root, nodes }),
            _ => Err(FrontierError::empty_input("tree has no root value")),
        }
    }

    /// Parse `1,2,3,-,5`; `-` (or an empty field) is a gap
    pub fn parse_values(input: &str) -> Result<Self> {
        let values: Vec<Option<String>> = input
            .split(',')
            .map(str::trim)
            .map(|v| match v {
                "" | "-" => None,
                v => Some(v.to_string()),
            })
            .collect();
        Self::from_level_order(values)
    }

    /// The complete seven-node tree `1..=7`
    pub fn sample() -> Self {
        let nodes = (1..=7usize)
            .map(|n| TreeNode {
                value: n.to_string(),
                left: (2 * n <= 7).then(|| TreeHandle(2 * n - 1)),
                right: (2 * n < 7).then(|| TreeHandle(2 * n)),
            })
            .collect();
        BinaryTree {
            nodes,
            root: TreeHandle(0),
        }
    }

    pub fn root(&self) -> TreeHandle {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, handle: TreeHandle) -> Option<&TreeNode> {
        self.nodes.get(handle.0)
    }

    pub fn value(&self, handle: TreeHandle) -> &str {
        self.nodes.get(handle.0).map_or("", |n| n.value.as_str())
    }

    /// Node handles in the requested order
    pub fn traverse(&self, order: TraversalOrder) -> Vec<TreeHandle> {
        match order {
            TraversalOrder::Pre => self.pre_order(),
            TraversalOrder::In => self.in_order(),
            TraversalOrder::Post => self.post_order(),
            TraversalOrder::Level => self.level_order(),
        }
    }

    /// Values in the requested order
    pub fn values(&self, order: TraversalOrder) -> Vec<&str> {
        self.traverse(order)
            .into_iter()
            .map(|h| self.value(h))
            .collect()
    }

    pub fn pre_order(&self) -> Vec<TreeHandle> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = vec![self.root];
        while let Some(h) = stack.pop() {
            out.push(h);
            let node = &self.nodes[h.0];
            stack.extend(node.right);
            stack.extend(node.left);
        }
        out
    }

    pub fn in_order(&self) -> Vec<TreeHandle> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut current = Some(self.root);
        while current.is_some() || !stack.is_empty() {
            while let Some(h) = current {
                stack.push(h);
                current = self.nodes[h.0].left;
            }
            if let Some(h) = stack.pop() {
                out.push(h);
                current = self.nodes[h.0].right;
            }
        }
        out
    }

    pub fn post_order(&self) -> Vec<TreeHandle> {
        // Reverse of a root-right-left walk
        let mut out = Vec::with_capacity(self.len());
        let mut stack = vec![self.root];
        while let Some(h) = stack.pop() {
            out.push(h);
            let node = &self.nodes[h.0];
            stack.extend(node.left);
            stack.extend(node.right);
        }
        out.reverse();
        out
    }

    pub fn level_order(&self) -> Vec<TreeHandle> {
        let mut out = Vec::with_capacity(self.len());
        let mut queue = VecDeque::from([self.root]);
        while let Some(h) = queue.pop_front() {
            out.push(h);
            let node = &self.nodes[h.0];
            queue.extend(node.left);
            queue.extend(node.right);
        }
        out
    }
}

impl LayoutTree for BinaryTree {
    type Handle = TreeHandle;

    fn children(&self, node: TreeHandle) -> (Option<TreeHandle>, Option<TreeHandle>) {
        self.get(node).map_or((None, None), |n| (n.left, n.right))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    Pre,
    In,
    Post,
    Level,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::Pre,
        TraversalOrder::In,
        TraversalOrder::Post,
        TraversalOrder::Level,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TraversalOrder::Pre => "pre-order",
            TraversalOrder::In => "in-order",
            TraversalOrder::Post => "post-order",
            TraversalOrder::Level => "level-order",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TraversalOrder {
    type Err = FrontierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pre" | "preorder" | "pre-order" => Ok(TraversalOrder::Pre),
            "in" | "inorder" | "in-order" => Ok(TraversalOrder::In),
            "post" | "postorder" | "post-order" => Ok(TraversalOrder::Post),
            "level" | "levelorder" | "level-order" | "bfs" => Ok(TraversalOrder::Level),
            other => Err(FrontierError::invalid_value(
                "traversal order",
                format!("{} (expected pre, in, post or level)", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_traversals() {
        let tree = BinaryTree::sample();
        assert_eq!(tree.values(TraversalOrder::Pre), ["1", "2", "4", "5", "3", "6", "7"]);
        assert_eq!(tree.values(TraversalOrder::In), ["4", "2", "5", "1", "6", "3", "7"]);
        assert_eq!(tree.values(TraversalOrder::Post), ["4", "5", "2", "6", "7", "3", "1"]);
        assert_eq!(tree.values(TraversalOrder::Level), ["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_parse_matches_sample() {
        let parsed = BinaryTree::parse_values("1,2,3,4,5,6,7").unwrap();
        assert_eq!(parsed, BinaryTree::sample());
    }

    #[test]
    fn test_gaps_in_level_order() {
        let tree = BinaryTree::parse_values("a, b, c, -, d").unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.values(TraversalOrder::In), ["b", "d", "a", "c"]);
        assert_eq!(tree.values(TraversalOrder::Post), ["d", "b", "c", "a"]);
    }

    #[test]
    fn test_orphan_value_rejected() {
        let err = BinaryTree::parse_values("1,-,3,4,5,6").unwrap_err();
        assert!(matches!(err, FrontierError::InvalidValue { .. }));
    }

    #[test]
    fn test_missing_root_rejected() {
        assert!(matches!(
            BinaryTree::parse_values("-"),
            Err(FrontierError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_order_from_str() {
        assert_eq!("Level".parse::<TraversalOrder>().unwrap(), TraversalOrder::Level);
        assert_eq!("post-order".parse::<TraversalOrder>().unwrap(), TraversalOrder::Post);
        assert!("sideways".parse::<TraversalOrder>().is_err());
    }
}
