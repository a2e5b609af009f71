//! Stacking detection - which PR feeds into which
//!
//! PR B is stacked on PR A when B's base branch is A's head branch. The
//! scan is a plain pairwise pass over the edges; open-PR counts are small.

use super::{PrEdge, PrGraph};

/// A derived PR-to-PR dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackLink<'a> {
    /// The PR stacked on top (B), drawn as the arrow's source
    pub stacked: &'a PrEdge,
    /// The PR whose head branch is `stacked`'s base (A)
    pub parent: &'a PrEdge,
}

/// Infer stacking links for every ordered pair of edges
///
/// For each edge A (outer, in edge order) and each edge B (inner, in edge
/// order) a link `B -> A` is emitted when `B.to == A.from`. Pairs are skipped
/// when they are the same PR, or when A and B point at each other
/// (`A.from == B.to && A.to == B.from`). Links are not deduplicated.
pub fn stacking_links(graph: &PrGraph) -> Vec<StackLink<'_>> {
    let mut links = Vec::new();

    for a in &graph.edges {
        for b in &graph.edges {
            if a.pr.id == b.pr.id {
                continue;
            }
            if a.from == b.to && a.to == b.from {
                continue;
            }
            if b.to == a.from {
                links.push(StackLink {
                    stacked: b,
                    parent: a,
                });
            }
        }
    }

    links
}
