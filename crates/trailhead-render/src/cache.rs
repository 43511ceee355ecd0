//! Opt-in layout memoization.
//!
//! The reference behavior recomputes layout on every display; toggling view
//! modes does not change the graph, so callers that keep a cache around get
//! the (levels, positions) pair back without recomputation. The key covers
//! the node/edge identifier lists and the layout options, so a changed graph
//! or canvas invalidates by construction.

use crate::model::GraphLayout;
use crate::{CycleHandling, LayoutOptions, Result};
use rustc_hash::{FxHashMap, FxHasher};
use std::collections::hash_map::Entry;
use std::hash::{Hash, Hasher};
use trailhead_core::PrereqGraph;

#[derive(Debug, Default)]
pub struct LayoutCache {
    entries: FxHashMap<u64, GraphLayout>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached layout for this graph + options, computing it on a
    /// miss.
    pub fn layout(&mut self, graph: &PrereqGraph, options: &LayoutOptions) -> Result<&GraphLayout> {
        let key = fingerprint(graph, options);
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let layout = crate::layout_graph(graph, options)?;
                Ok(entry.insert(layout))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn fingerprint(graph: &PrereqGraph, options: &LayoutOptions) -> u64 {
    let mut hasher = FxHasher::default();

    graph.len().hash(&mut hasher);
    for topic in graph.topics() {
        topic.id.as_str().hash(&mut hasher);
    }
    graph.edges().len().hash(&mut hasher);
    for edge in graph.edges() {
        edge.from.as_str().hash(&mut hasher);
        edge.to.as_str().hash(&mut hasher);
    }

    options.canvas.width.to_bits().hash(&mut hasher);
    options.canvas.height.to_bits().hash(&mut hasher);
    let handling: u8 = match options.cycle_handling {
        CycleHandling::RootLeftovers => 0,
        CycleHandling::Reject => 1,
    };
    handling.hash(&mut hasher);

    hasher.finish()
}
