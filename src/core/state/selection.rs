//! Selection snapshots
//!
//! A selection is a flat list of elements picked in one layer. It is a
//! snapshot: indices in it are only meaningful against the layer they were
//! taken from, at the time they were taken.

use crate::core::state::font_data::NodeRef;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// One selected element of a layer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectedElement {
    Node(NodeRef),
    Anchor(String),
    Component(usize),
    Hint(usize),
}

impl FromStr for SelectedElement {
    type Err = anyhow::Error;

    /// Parse `node:P:N`, `anchor:NAME`, `component:I` or `hint:I`
    fn from_str(s: &str) -> Result<Self> {
        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("Selection '{s}' must look like kind:value"))?;

        let index = |value: &str| -> Result<usize> {
            value
                .trim()
                .parse::<usize>()
                .map_err(|_| anyhow!("Invalid index '{value}' in selection '{s}'"))
        };

        match kind.trim().to_lowercase().as_str() {
            "node" | "n" => {
                let (path, node) = rest
                    .split_once(':')
                    .ok_or_else(|| anyhow!("Node selection '{s}' must look like node:PATH:NODE"))?;
                Ok(SelectedElement::Node(NodeRef::new(index(path)?, index(node)?)))
            }
            "anchor" | "a" => {
                let name = rest.trim();
                if name.is_empty() {
                    return Err(anyhow!("Anchor selection '{s}' has no name"));
                }
                Ok(SelectedElement::Anchor(name.to_string()))
            }
            "component" | "c" => Ok(SelectedElement::Component(index(rest)?)),
            "hint" | "h" => Ok(SelectedElement::Hint(index(rest)?)),
            other => Err(anyhow!(
                "Unknown selection kind '{other}' (expected node, anchor, component or hint)"
            )),
        }
    }
}

/// Everything currently selected in the reference layer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub elements: Vec<SelectedElement>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn with_node(mut self, path: usize, node: usize) -> Self {
        self.elements
            .push(SelectedElement::Node(NodeRef::new(path, node)));
        self
    }

    pub fn with_anchor(mut self, name: impl Into<String>) -> Self {
        self.elements.push(SelectedElement::Anchor(name.into()));
        self
    }

    pub fn with_component(mut self, index: usize) -> Self {
        self.elements.push(SelectedElement::Component(index));
        self
    }

    pub fn with_hint(mut self, index: usize) -> Self {
        self.elements.push(SelectedElement::Hint(index));
        self
    }

    /// Build a selection from command line tokens
    pub fn parse_all<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let elements = tokens
            .iter()
            .map(|token| token.as_ref().parse())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { elements })
    }
}
