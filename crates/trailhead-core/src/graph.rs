use crate::{Error, Result};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Topic identifier.
///
/// The roadmap API emits node ids as JSON strings or integers, and edge
/// endpoints must compare equal to node ids regardless of which form each
/// side used. Both decode into the same canonical string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TopicId(String);

impl TopicId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TopicId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TopicId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for TopicId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for TopicId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Str(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(value) => Self(value.to_string()),
            Raw::Str(value) => Self(value),
        })
    }
}

/// Topic difficulty as reported by the API. Anything outside the three known
/// values decodes to [`Difficulty::Unknown`] rather than failing the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    #[default]
    Unknown,
}

impl Difficulty {
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::from_wire).unwrap_or_default())
    }
}

/// A learning topic. `estimatedHours` is clamped to a finite non-negative
/// value during graph construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default, deserialize_with = "nullable_hours")]
    pub estimated_hours: f64,
}

fn nullable_hours<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Directed "prerequisite-of" relationship: `from` must be learned before `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrereqEdge {
    pub from: TopicId,
    pub to: TopicId,
}

/// Raw decode target for `GET /roadmaps/{id}/prerequisite-graph`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphPayload {
    #[serde(default)]
    pub nodes: Vec<Topic>,
    #[serde(default)]
    pub edges: Vec<PrereqEdge>,
}

/// Policy for edges whose endpoints are not in the node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DanglingEdges {
    /// Discard the edge and keep going. The graph is a display feature, not a
    /// correctness-critical store.
    #[default]
    Drop,
    /// Fail construction with [`Error::DanglingEdge`].
    Reject,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphOptions {
    pub dangling_edges: DanglingEdges,
}

/// Validated, immutable prerequisite graph.
///
/// Topics keep the payload's order; duplicate ids are last-write-wins at the
/// first occurrence's position. Adjacency indices are built once so that
/// "edges into X" / "edges out of X" are O(1) lookups.
#[derive(Debug, Clone)]
pub struct PrereqGraph {
    topics: IndexMap<TopicId, Topic>,
    edges: Vec<PrereqEdge>,
    incoming: FxHashMap<TopicId, Vec<usize>>,
    outgoing: FxHashMap<TopicId, Vec<usize>>,
}

impl PrereqGraph {
    pub fn build(payload: GraphPayload, options: GraphOptions) -> Result<Self> {
        let mut topics: IndexMap<TopicId, Topic> = IndexMap::with_capacity(payload.nodes.len());
        for mut topic in payload.nodes {
            if !topic.estimated_hours.is_finite() || topic.estimated_hours < 0.0 {
                topic.estimated_hours = 0.0;
            }
            topics.insert(topic.id.clone(), topic);
        }

        let mut edges = Vec::with_capacity(payload.edges.len());
        for edge in payload.edges {
            let missing = if !topics.contains_key(&edge.from) {
                Some(&edge.from)
            } else if !topics.contains_key(&edge.to) {
                Some(&edge.to)
            } else {
                None
            };
            if let Some(id) = missing {
                match options.dangling_edges {
                    DanglingEdges::Drop => continue,
                    DanglingEdges::Reject => {
                        return Err(Error::DanglingEdge { id: id.to_string() });
                    }
                }
            }
            edges.push(edge);
        }

        let mut incoming: FxHashMap<TopicId, Vec<usize>> = FxHashMap::default();
        let mut outgoing: FxHashMap<TopicId, Vec<usize>> = FxHashMap::default();
        for (idx, edge) in edges.iter().enumerate() {
            outgoing.entry(edge.from.clone()).or_default().push(idx);
            incoming.entry(edge.to.clone()).or_default().push(idx);
        }

        Ok(Self {
            topics,
            edges,
            incoming,
            outgoing,
        })
    }

    /// Decodes a payload value and builds with default options.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Self::from_json_with(value, GraphOptions::default())
    }

    pub fn from_json_with(value: &serde_json::Value, options: GraphOptions) -> Result<Self> {
        let payload = GraphPayload::deserialize(value)?;
        Self::build(payload, options)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.get(id)
    }

    /// Topics in original payload order.
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.topics.values()
    }

    /// Validated edges in original payload order.
    pub fn edges(&self) -> &[PrereqEdge] {
        &self.edges
    }

    /// Edges whose `to` is `id`, in original edge order.
    pub fn incoming(&self, id: &TopicId) -> impl Iterator<Item = &PrereqEdge> {
        self.incoming
            .get(id)
            .map(|idxs| idxs.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.edges[idx])
    }

    /// Edges whose `from` is `id`, in original edge order.
    pub fn outgoing(&self, id: &TopicId) -> impl Iterator<Item = &PrereqEdge> {
        self.outgoing
            .get(id)
            .map(|idxs| idxs.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.edges[idx])
    }

    /// Direct prerequisites of `id`: the distinct topics with an edge into it,
    /// in first-edge order. Duplicate edges contribute one entry.
    pub fn prerequisites_of(&self, id: &TopicId) -> Vec<&Topic> {
        let mut seen: FxHashSet<&TopicId> = FxHashSet::default();
        let mut prereqs = Vec::new();
        for edge in self.incoming(id) {
            if !seen.insert(&edge.from) {
                continue;
            }
            if let Some(topic) = self.topics.get(&edge.from) {
                prereqs.push(topic);
            }
        }
        prereqs
    }
}
