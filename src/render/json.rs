//! JSON dump of the graph model.

use super::Renderer;
use crate::error::Result;
use crate::graph::PrGraph;

/// Serializes the graph as-is with `serde_json`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, graph: &PrGraph) -> Result<String> {
        Ok(serde_json::to_string(graph)?)
    }
}
