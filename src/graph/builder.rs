//! Graph construction - pure function from PR list to `PrGraph`

use super::{BranchNode, PrEdge, PrGraph};
use crate::types::PullRequest;
use std::collections::BTreeMap;
use tracing::debug;

/// Build the branch graph for a default branch and its open PRs
///
/// The default branch is always present as a node, even with no PRs. Every
/// PR becomes exactly one edge `head -> base`, in input order; neither nodes
/// nor edges are deduplicated beyond branch-name identity.
///
/// Callers guarantee `default_branch` is non-empty.
pub fn build_pr_graph(default_branch: &str, pull_requests: Vec<PullRequest>) -> PrGraph {
    let mut nodes = BTreeMap::new();
    insert_branch(&mut nodes, default_branch);

    let mut edges = Vec::with_capacity(pull_requests.len());
    for pr in pull_requests {
        insert_branch(&mut nodes, &pr.base_ref_name);
        insert_branch(&mut nodes, &pr.head_ref_name);
        edges.push(PrEdge {
            from: pr.head_ref_name.clone(),
            to: pr.base_ref_name.clone(),
            pr,
        });
    }

    debug!(
        default_branch,
        nodes = nodes.len(),
        edges = edges.len(),
        "built PR graph"
    );

    PrGraph {
        nodes,
        edges,
        default_branch: default_branch.to_string(),
    }
}

fn insert_branch(nodes: &mut BTreeMap<String, BranchNode>, name: &str) {
    if !nodes.contains_key(name) {
        nodes.insert(
            name.to_string(),
            BranchNode {
                name: name.to_string(),
            },
        );
    }
}
