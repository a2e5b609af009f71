//! PR graph building
//!
//! Turns a flat list of pull requests into a branch graph and infers which
//! PRs are stacked on top of which.

mod builder;
mod stacking;

pub use builder::build_pr_graph;
pub use stacking::{StackLink, stacking_links};

use crate::types::PullRequest;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A branch referenced by the default branch or by any PR's base/head
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BranchNode {
    /// Branch name
    pub name: String,
}

/// A PR as a directed edge from its head branch to its base branch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrEdge {
    /// Head (source) branch
    pub from: String,
    /// Base (target) branch
    pub to: String,
    /// The PR this edge was built from
    pub pr: PullRequest,
}

/// Branch graph for one repository snapshot
///
/// Built once by [`build_pr_graph`] and only read afterwards. Nodes are kept
/// in a `BTreeMap` so every renderer walks them in the same order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrGraph {
    /// Every known branch by name
    pub nodes: BTreeMap<String, BranchNode>,
    /// One edge per PR, in input order
    pub edges: Vec<PrEdge>,
    /// Name of the repository's default branch
    pub default_branch: String,
}

impl PrGraph {
    /// Edges whose base is the default branch
    pub fn direct_edges(&self) -> impl Iterator<Item = &PrEdge> {
        self.edges.iter().filter(|e| e.to == self.default_branch)
    }

    /// Whether a branch is known to the graph
    pub fn contains_branch(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }
}
