//! Topological leveling (Kahn-style longest path).

use crate::model::LevelAssignment;
use crate::{Error, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use trailhead_core::{PrereqGraph, TopicId};

/// What to do with topics a prerequisite cycle keeps off the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleHandling {
    /// Reference behavior: unprocessed topics keep any tentative level set
    /// through a processed predecessor, otherwise level 0. The rendered
    /// result is visually misleading for non-DAG input, but every topic
    /// still gets a position downstream.
    #[default]
    RootLeftovers,
    /// Fail with [`Error::CyclicGraph`] naming the unprocessed topics.
    Reject,
}

/// Assigns each topic a level equal to the length of the longest path from
/// any in-degree-0 topic, so every edge points from a strictly lower level
/// to a strictly higher one (DAG input). Terminates for arbitrary input.
///
/// Ties within a level keep original topic order, which makes the result a
/// pure function of the input lists.
pub fn assign_levels(graph: &PrereqGraph, handling: CycleHandling) -> Result<LevelAssignment> {
    let mut in_degree: FxHashMap<&str, usize> = FxHashMap::default();
    for topic in graph.topics() {
        in_degree.insert(topic.id.as_str(), 0);
    }
    for edge in graph.edges() {
        if let Some(remaining) = in_degree.get_mut(edge.to.as_str()) {
            *remaining += 1;
        }
    }

    let mut levels: FxHashMap<TopicId, u32> = FxHashMap::default();
    let mut enqueued: FxHashSet<&str> = FxHashSet::default();
    let mut frontier: VecDeque<&TopicId> = VecDeque::new();
    for topic in graph.topics() {
        if in_degree.get(topic.id.as_str()).copied() == Some(0) {
            levels.insert(topic.id.clone(), 0);
            enqueued.insert(topic.id.as_str());
            frontier.push_back(&topic.id);
        }
    }

    while let Some(current) = frontier.pop_front() {
        let current_level = levels.get(current).copied().unwrap_or(0);
        for edge in graph.outgoing(current) {
            let Some(remaining) = in_degree.get_mut(edge.to.as_str()) else {
                continue;
            };
            *remaining = remaining.saturating_sub(1);

            let level = levels.entry(edge.to.clone()).or_insert(0);
            *level = (*level).max(current_level + 1);

            if *remaining == 0 && enqueued.insert(edge.to.as_str()) {
                frontier.push_back(&edge.to);
            }
        }
    }

    let leftovers: Vec<TopicId> = graph
        .topics()
        .filter(|topic| !enqueued.contains(topic.id.as_str()))
        .map(|topic| topic.id.clone())
        .collect();

    if handling == CycleHandling::Reject && !leftovers.is_empty() {
        return Err(Error::CyclicGraph {
            ids: leftovers.iter().map(ToString::to_string).collect(),
        });
    }

    // Leftovers without a tentative level default to 0 so every topic gets a
    // position downstream.
    for topic in graph.topics() {
        levels.entry(topic.id.clone()).or_insert(0);
    }

    let mut depth: usize = 0;
    for topic in graph.topics() {
        let level = levels.get(&topic.id).copied().unwrap_or(0);
        depth = depth.max(level as usize + 1);
    }

    let mut grouped: Vec<Vec<TopicId>> = vec![Vec::new(); depth];
    for topic in graph.topics() {
        let level = levels.get(&topic.id).copied().unwrap_or(0);
        grouped[level as usize].push(topic.id.clone());
    }

    Ok(LevelAssignment {
        levels,
        grouped,
        leftovers,
    })
}
