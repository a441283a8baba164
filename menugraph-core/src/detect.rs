//! Cyclical reference detection.
//!
//! Every menu is treated as a root and walked depth-first over its declared
//! `child_ids`. The walk records each menu it enters in a `visited` sequence.
//! When a child is already in `visited` it is recorded a second time and the
//! walk does not descend into it. A root is invalid when its `visited`
//! sequence holds any repeated id.
//!
//! # Convergent branches
//!
//! The rule fires on any revisit, not only on a path leading back to the root.
//! A diamond `A -> {B, C}, B -> D, C -> D` marks `A` invalid because `D` is
//! reached twice, although `A` has no cycle. Downstream consumers rely on this
//! exact classification; a strict back-edge check would report different sets.

use crate::graph::MenuGraph;
use menugraph_fetcher::Menu;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Validity::Valid => "valid",
            Validity::Invalid => "invalid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub root_id: i64,
    /// The root's own `child_ids`, as declared.
    pub children: Vec<i64>,
    pub validity: Validity,
}

impl ClassificationResult {
    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }
}

/// Walk everything reachable from `root` and return the ids in the order they
/// were recorded, repeats included.
///
/// An explicit frame stack replaces recursion: each frame is a menu plus the
/// position of the next child to look at, so children are handled in declared
/// order and a sibling sees everything recorded by the subtrees before it.
pub fn walk(graph: &MenuGraph, root: &Menu) -> Vec<i64> {
    let mut visited = vec![root.id];
    let mut seen: HashSet<i64> = HashSet::from([root.id]);
    let mut stack: Vec<(&Menu, usize)> = vec![(root, 0)];

    while let Some(frame) = stack.last_mut() {
        let (menu, next) = frame;

        let Some(&child_id) = menu.child_ids.get(*next) else {
            stack.pop();
            continue;
        };
        *next += 1;

        let Some(child) = graph.get(child_id) else {
            trace!("Menu {} references unknown child {}", menu.id, child_id);
            continue;
        };

        visited.push(child.id);
        if seen.insert(child.id) {
            stack.push((child, 0));
        }
    }

    visited
}

fn has_repeat(visited: &[i64]) -> bool {
    let mut seen = HashSet::with_capacity(visited.len());
    visited.iter().any(|id| !seen.insert(*id))
}

/// Classify a single root.
pub fn classify_menu(graph: &MenuGraph, root: &Menu) -> ClassificationResult {
    let visited = walk(graph, root);
    let validity = if has_repeat(&visited) {
        Validity::Invalid
    } else {
        Validity::Valid
    };
    debug!("Menu {} is {}: {:?}", root.id, validity.as_str(), visited);

    ClassificationResult {
        root_id: root.id,
        children: root.child_ids.clone(),
        validity,
    }
}

/// Classify every menu in graph order. Each root gets an independent walk over
/// the unmodified graph.
pub fn classify(graph: &MenuGraph) -> Vec<ClassificationResult> {
    graph.menus().map(|menu| classify_menu(graph, menu)).collect()
}
