//! Graph rendering
//!
//! Three serializers share one [`Renderer`] trait and are selected by
//! [`Format`]. Rendering is pure: the graph is only read, and the colours
//! come from an explicit [`Palette`] value.

mod graphviz;
mod json;
mod mermaid;

pub use graphviz::GraphvizRenderer;
pub use json::JsonRenderer;
pub use mermaid::MermaidRenderer;

use crate::error::Result;
use crate::graph::PrGraph;
use std::convert::Infallible;
use std::io::Write;
use std::str::FromStr;
use tracing::{debug, warn};

/// Fill/stroke pair for one visual class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    /// Fill colour
    pub fill: &'static str,
    /// Stroke (border/edge) colour
    pub stroke: &'static str,
}

/// Colours used by the Mermaid and Graphviz renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Default-branch node
    pub branch: ColorPair,
    /// PR node awaiting review
    pub pr: ColorPair,
    /// Approved PR node
    pub approved: ColorPair,
}

impl Palette {
    /// Pair for a PR node given its approval state
    pub const fn for_pr(&self, is_approved: bool) -> ColorPair {
        if is_approved { self.approved } else { self.pr }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            branch: ColorPair {
                fill: "#dbeafe",
                stroke: "#1d4ed8",
            },
            pr: ColorPair {
                fill: "#f3f4f6",
                stroke: "#6b7280",
            },
            approved: ColorPair {
                fill: "#dcfce7",
                stroke: "#15803d",
            },
        }
    }
}

/// Something that turns a graph into text
pub trait Renderer {
    /// Render the whole graph
    fn render(&self, graph: &PrGraph) -> Result<String>;
}

/// Output format selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// JSON dump of the graph model
    Json,
    /// Mermaid flowchart
    #[default]
    Mermaid,
    /// Graphviz digraph
    Graphviz,
}

impl Format {
    /// Parse a selector, falling back to Mermaid for anything unrecognized
    ///
    /// Matching is exact: `"JSON"` is not `"json"`. An empty selector also
    /// means Mermaid.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "json" => Self::Json,
            "mermaid" => Self::Mermaid,
            "graphviz" => Self::Graphviz,
            "" => Self::Mermaid,
            other => {
                warn!(format = other, "unknown output format, using mermaid");
                Self::Mermaid
            }
        }
    }

    /// Canonical selector string
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Mermaid => "mermaid",
            Self::Graphviz => "graphviz",
        }
    }
}

impl FromStr for Format {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a graph with the default palette
pub fn render(graph: &PrGraph, format: Format) -> Result<String> {
    render_with_palette(graph, format, &Palette::default())
}

/// Render a graph with an explicit palette
pub fn render_with_palette(
    graph: &PrGraph,
    format: Format,
    palette: &Palette,
) -> Result<String> {
    debug!(%format, edges = graph.edges.len(), "rendering graph");
    match format {
        Format::Json => JsonRenderer.render(graph),
        Format::Mermaid => MermaidRenderer::new(*palette).render(graph),
        Format::Graphviz => GraphvizRenderer::new(*palette).render(graph),
    }
}

/// Render a graph and write it to `out`
pub fn write_graph<W: Write>(out: &mut W, graph: &PrGraph, format: Format) -> Result<()> {
    let rendered = render(graph, format)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
