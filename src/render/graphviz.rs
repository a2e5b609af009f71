//! DOT format generator for Graphviz.
//!
//! Unlike the Mermaid output, nodes here are branches and each PR is the
//! edge from its head branch to its base branch, so stacks show up as chains
//! without any derived edges.

use std::fmt::Write;

use super::{Palette, Renderer};
use crate::error::Result;
use crate::graph::PrGraph;

/// Escapes a PR title for use inside a quoted DOT label.
///
/// Only `"` and newlines are handled.
fn escape_title(title: &str) -> String {
    title.replace('"', "\\\"").replace('\n', "\\n")
}

/// Renders a `digraph` with branch nodes and one labelled edge per PR
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphvizRenderer {
    palette: Palette,
}

impl GraphvizRenderer {
    /// Create a renderer using `palette` for node and edge colours
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn write_branch_nodes(&self, output: &mut String, graph: &PrGraph) {
        let branch = self.palette.branch;
        let _ = writeln!(
            output,
            "    \"{}\" [fillcolor=\"{}\", color=\"{}\", penwidth=2];",
            graph.default_branch, branch.fill, branch.stroke
        );

        for (name, node) in &graph.nodes {
            if *name != graph.default_branch {
                let _ = writeln!(
                    output,
                    "    \"{}\" [fillcolor=\"{}\"];",
                    node.name, self.palette.pr.fill
                );
            }
        }
        output.push('\n');
    }

    fn write_pr_edges(&self, output: &mut String, graph: &PrGraph) {
        for edge in &graph.edges {
            let pair = self.palette.for_pr(edge.pr.is_approved);

            if edge.from != graph.default_branch {
                let _ = writeln!(
                    output,
                    "    \"{}\" [fillcolor=\"{}\", color=\"{}\", URL=\"{}\"];",
                    edge.from, pair.fill, pair.stroke, edge.pr.url
                );
            }

            let label = format!(
                "PR: {}\\nAuthor: {}",
                escape_title(&edge.pr.title),
                edge.pr.author.login
            );
            let _ = writeln!(
                output,
                "    \"{}\" -> \"{}\" [label=\"{label}\", URL=\"{}\", color=\"{}\", fillcolor=\"{}\"];",
                edge.from, edge.to, edge.pr.url, pair.stroke, pair.fill
            );
        }
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, graph: &PrGraph) -> Result<String> {
        let mut output = String::new();
        output.push_str("digraph PRGraph {\n");
        output.push_str("    rankdir=TB;\n");
        output.push_str("    node [shape=box, style=filled];\n");
        output.push_str("    edge [fontsize=10];\n");
        output.push('\n');

        self.write_branch_nodes(&mut output, graph);
        self.write_pr_edges(&mut output, graph);

        output.push_str("}\n");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_pr_graph;
    use crate::types::{Author, PullRequest};

    fn pr(id: &str, title: &str, head: &str, base: &str, approved: bool) -> PullRequest {
        PullRequest {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("https://github.com/o/r/pull/{id}"),
            is_draft: false,
            is_approved: approved,
            base_ref_name: base.to_string(),
            head_ref_name: head.to_string(),
            author: Author {
                login: "alice".to_string(),
            },
        }
    }

    #[test]
    fn test_escape_title() {
        assert_eq!(escape_title("plain"), "plain");
        assert_eq!(escape_title("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_title("two\nlines"), "two\\nlines");
        // Backslashes are passed through untouched
        assert_eq!(escape_title("a\\b"), "a\\b");
    }

    #[test]
    fn test_full_output() {
        let graph = build_pr_graph(
            "main",
            vec![
                pr("1", "Add X", "feature-1", "main", false),
                pr("2", "Add Y", "feature-2", "feature-1", true),
            ],
        );
        let out = GraphvizRenderer::default().render(&graph).unwrap();

        let expected = "\
digraph PRGraph {
    rankdir=TB;
    node [shape=box, style=filled];
    edge [fontsize=10];

    \"main\" [fillcolor=\"#dbeafe\", color=\"#1d4ed8\", penwidth=2];
    \"feature-1\" [fillcolor=\"#f3f4f6\"];
    \"feature-2\" [fillcolor=\"#f3f4f6\"];

    \"feature-1\" [fillcolor=\"#f3f4f6\", color=\"#6b7280\", URL=\"https://github.com/o/r/pull/1\"];
    \"feature-1\" -> \"main\" [label=\"PR: Add X\\nAuthor: alice\", URL=\"https://github.com/o/r/pull/1\", color=\"#6b7280\", fillcolor=\"#f3f4f6\"];
    \"feature-2\" [fillcolor=\"#dcfce7\", color=\"#15803d\", URL=\"https://github.com/o/r/pull/2\"];
    \"feature-2\" -> \"feature-1\" [label=\"PR: Add Y\\nAuthor: alice\", URL=\"https://github.com/o/r/pull/2\", color=\"#15803d\", fillcolor=\"#dcfce7\"];
}
";
        assert_eq!(out, expected);
    }

    fn main_declarations(out: &str) -> usize {
        out.lines()
            .filter(|l| l.starts_with("    \"main\" ["))
            .count()
    }

    #[test]
    fn test_default_branch_declared_once() {
        let graph = build_pr_graph("main", vec![pr("1", "t", "a", "main", false)]);
        let out = GraphvizRenderer::default().render(&graph).unwrap();
        assert_eq!(main_declarations(&out), 1);
        assert!(out.contains("    \"a\" -> \"main\" [label="));
    }

    #[test]
    fn test_pr_from_default_branch_keeps_highlight() {
        let graph = build_pr_graph("main", vec![pr("1", "t", "main", "release", false)]);
        let out = GraphvizRenderer::default().render(&graph).unwrap();
        assert_eq!(main_declarations(&out), 1);
        assert!(out.contains("    \"main\" [fillcolor=\"#dbeafe\", color=\"#1d4ed8\", penwidth=2];"));
        assert!(out.contains("\"main\" -> \"release\""));
    }
}
