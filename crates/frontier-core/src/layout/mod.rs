//! Deterministic 2-D positions for binary trees and forests
//!
//! Children of a node at depth `d` sit at `x ± base / 2^(d+1)`, one
//! `vertical_step` lower. A forest splits the canvas into equal sections, one
//! per root, and each tree is placed inside its own section.

use crate::bail_invalid;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anything shaped like a binary tree whose nodes have stable handles
pub trait LayoutTree {
    type Handle: Copy + Ord;

    /// `(left, right)` children of `node`
    fn children(&self, node: Self::Handle) -> (Option<Self::Handle>, Option<Self::Handle>);
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Placement parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// y of every root
    pub top: f64,
    /// Distance between depth levels
    pub vertical_step: f64,
    /// Base horizontal spacing as a fraction of the section width
    pub spacing_ratio: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            top: 50.0,
            vertical_step: 80.0,
            spacing_ratio: 0.5,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.top.is_finite() {
            bail_invalid!("layout.top", self.top);
        }
        if !self.vertical_step.is_finite() || self.vertical_step <= 0.0 {
            bail_invalid!("layout.vertical_step", self.vertical_step);
        }
        if !self.spacing_ratio.is_finite() || self.spacing_ratio <= 0.0 {
            bail_invalid!("layout.spacing_ratio", self.spacing_ratio);
        }
        Ok(())
    }
}

/// Handle → position map produced by [`layout_forest`]
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout<H> {
    positions: BTreeMap<H, Point>,
}

impl<H: Copy + Ord> TreeLayout<H> {
    pub fn get(&self, handle: H) -> Option<Point> {
        self.positions.get(&handle).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (H, Point)> + '_ {
        self.positions.iter().map(|(h, p)| (*h, *p))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Lay out the single tree under `root`
pub fn layout_tree<T: LayoutTree>(
    tree: &T,
    root: T::Handle,
    canvas_width: f64,
    config: &LayoutConfig,
) -> Result<TreeLayout<T::Handle>> {
    layout_forest(tree, &[root], canvas_width, config)
}

/// Lay out independent trees side by side
pub fn layout_forest<T: LayoutTree>(
    tree: &T,
    roots: &[T::Handle],
    canvas_width: f64,
    config: &LayoutConfig,
) -> Result<TreeLayout<T::Handle>> {
    if !canvas_width.is_finite() || canvas_width <= 0.0 {
        bail_invalid!("canvas width", canvas_width);
    }
    config.validate()?;

    let mut positions = BTreeMap::new();
    if roots.is_empty() {
        return Ok(TreeLayout { positions });
    }

    let section = canvas_width / roots.len() as f64;
    let base = section * config.spacing_ratio;

    for (i, &root) in roots.iter().enumerate() {
        let center = section * i as f64 + section / 2.0;
        let mut stack = vec![(root, center, 0i32)];
        while let Some((handle, x, depth)) = stack.pop() {
            let y = config.top + config.vertical_step * f64::from(depth);
            // A handle reached twice is not a tree; stop descending there
            if positions.insert(handle, Point { x, y }).is_some() {
                continue;
            }
            let dx = base / 2f64.powi(depth + 1);
            let (left, right) = tree.children(handle);
            if let Some(right) = right {
                stack.push((right, x + dx, depth + 1));
            }
            if let Some(left) = left {
                stack.push((left, x - dx, depth + 1));
            }
        }
    }

    Ok(TreeLayout { positions })
}
