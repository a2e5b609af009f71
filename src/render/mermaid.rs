//! Mermaid flowchart generator.
//!
//! Titles are written verbatim inside `["..."]` labels. A title containing
//! `"` or `]` will break the diagram; callers that care must sanitize first.

use std::fmt::Write;

use super::{Palette, Renderer};
use crate::error::Result;
use crate::graph::{PrGraph, stacking_links};

const BRANCH_CLASS: &str = "branchNode";
const PR_CLASS: &str = "prNode";
const APPROVED_CLASS: &str = "approvedNode";

/// Renders a top-down Mermaid flowchart with one node per PR
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidRenderer {
    palette: Palette,
}

impl MermaidRenderer {
    /// Create a renderer using `palette` for the class definitions
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn write_class_defs(&self, output: &mut String) {
        for (class, pair) in [
            (BRANCH_CLASS, self.palette.branch),
            (PR_CLASS, self.palette.pr),
            (APPROVED_CLASS, self.palette.approved),
        ] {
            let _ = writeln!(
                output,
                "    classDef {class} fill:{},stroke:{}",
                pair.fill, pair.stroke
            );
        }
    }
}

impl Renderer for MermaidRenderer {
    fn render(&self, graph: &PrGraph) -> Result<String> {
        let mut output = String::new();
        output.push_str("graph TD\n");

        let default_branch = &graph.default_branch;
        let _ = writeln!(
            output,
            "    {default_branch}[\"{default_branch}\"]:::{BRANCH_CLASS}"
        );
        for edge in &graph.edges {
            let class = if edge.pr.is_approved {
                APPROVED_CLASS
            } else {
                PR_CLASS
            };
            let _ = writeln!(output, "    {}[\"{}\"]:::{class}", edge.pr.id, edge.pr.title);
        }
        output.push('\n');

        for edge in graph.direct_edges() {
            let _ = writeln!(output, "    {} --> {default_branch}", edge.pr.id);
        }
        for link in stacking_links(graph) {
            let _ = writeln!(
                output,
                "    {} --> {}",
                link.stacked.pr.id, link.parent.pr.id
            );
        }
        output.push('\n');

        for edge in &graph.edges {
            let _ = writeln!(output, "    click {} \"{}\"", edge.pr.id, edge.pr.url);
        }
        output.push('\n');

        self.write_class_defs(&mut output);
        Ok(output)
    }
}
