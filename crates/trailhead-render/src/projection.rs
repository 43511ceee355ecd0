//! Pure mapping from graph + positions to drawable primitives.
//!
//! Switching mode or profile never mutates the graph or recomputes layout;
//! it only changes which projection is applied.

use crate::model::{Canvas, GraphLayout, PositionMap, ViewScale};
use crate::theme::DifficultyPalette;
use serde::Serialize;
use trailhead_core::{Difficulty, PrereqGraph, TopicId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Visual,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewProfile {
    #[default]
    Compact,
    Detail,
}

/// Presentation parameters. Defaults reproduce the reference dashboard.
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    pub palette: DifficultyPalette,
    /// Title character budget in compact views; detail views show full titles.
    pub label_budget: usize,
    pub ellipsis: String,
    pub compact_radius: f64,
    pub detail_radius: f64,
    /// Multipliers applied to compact positions for the detail viewport.
    pub detail_scale: ViewScale,
    pub detail_viewport: Canvas,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            palette: DifficultyPalette::default(),
            label_budget: 15,
            ellipsis: "...".to_string(),
            compact_radius: 30.0,
            detail_radius: 40.0,
            detail_scale: ViewScale::DETAIL,
            detail_viewport: Canvas::new(1400.0, 900.0),
        }
    }
}

/// Directed line segment from a prerequisite to its dependent.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeSegment {
    pub from: TopicId,
    pub to: TopicId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeGlyph {
    pub id: TopicId,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: String,
    /// Already truncated per the active profile.
    pub title: String,
    pub title_y: f64,
    pub hours: String,
    pub hours_y: f64,
    /// Difficulty caption shown at the node center in detail views.
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisualGraph {
    pub profile: ViewProfile,
    pub viewport: Canvas,
    pub edges: Vec<EdgeSegment>,
    pub nodes: Vec<NodeGlyph>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub id: TopicId,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: Difficulty,
    pub estimated_hours: f64,
    /// Distinct prerequisite titles, first-edge order; empty when none.
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListView {
    pub entries: Vec<ListEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub enum GraphProjection {
    Visual(VisualGraph),
    List(ListView),
}

pub fn project(
    graph: &PrereqGraph,
    layout: &GraphLayout,
    mode: DisplayMode,
    profile: ViewProfile,
    config: &ProjectionConfig,
) -> GraphProjection {
    match mode {
        DisplayMode::Visual => {
            GraphProjection::Visual(project_visual(graph, layout, profile, config))
        }
        DisplayMode::List => GraphProjection::List(project_list(graph)),
    }
}

pub fn project_visual(
    graph: &PrereqGraph,
    layout: &GraphLayout,
    profile: ViewProfile,
    config: &ProjectionConfig,
) -> VisualGraph {
    let scaled;
    let (positions, radius, viewport): (&PositionMap, f64, Canvas) = match profile {
        ViewProfile::Compact => (&layout.positions, config.compact_radius, layout.canvas),
        ViewProfile::Detail => {
            scaled = layout.positions.scaled(config.detail_scale);
            (&scaled, config.detail_radius, config.detail_viewport)
        }
    };

    let mut edges = Vec::with_capacity(graph.edges().len());
    for edge in graph.edges() {
        // Endpoints without a position can only come from a graph the model
        // layer degraded; skip the segment rather than draw into nowhere.
        let (Some(from), Some(to)) = (positions.get(&edge.from), positions.get(&edge.to)) else {
            continue;
        };
        edges.push(EdgeSegment {
            from: edge.from.clone(),
            to: edge.to.clone(),
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
        });
    }

    let mut nodes = Vec::with_capacity(graph.len());
    for topic in graph.topics() {
        let Some(position) = positions.get(&topic.id) else {
            continue;
        };
        let title = match profile {
            ViewProfile::Compact => {
                truncate_label(&topic.title, config.label_budget, &config.ellipsis)
            }
            ViewProfile::Detail => topic.title.clone(),
        };
        let caption =
            (profile == ViewProfile::Detail).then(|| topic.difficulty.as_str().to_string());
        nodes.push(NodeGlyph {
            id: topic.id.clone(),
            x: position.x,
            y: position.y,
            radius,
            fill: config.palette.color_for(topic.difficulty).to_string(),
            title,
            title_y: position.y - (radius + 10.0),
            hours: fmt_hours(topic.estimated_hours),
            hours_y: position.y + (radius + 20.0),
            caption,
        });
    }

    VisualGraph {
        profile,
        viewport,
        edges,
        nodes,
    }
}

pub fn project_list(graph: &PrereqGraph) -> ListView {
    let entries = graph
        .topics()
        .map(|topic| ListEntry {
            id: topic.id.clone(),
            title: topic.title.clone(),
            description: topic.description.clone(),
            difficulty: topic.difficulty,
            estimated_hours: topic.estimated_hours,
            prerequisites: graph
                .prerequisites_of(&topic.id)
                .iter()
                .map(|prereq| prereq.title.clone())
                .collect(),
        })
        .collect();
    ListView { entries }
}

/// Truncates to `budget` characters and appends `ellipsis`; titles at or
/// under budget pass through untouched.
pub fn truncate_label(title: &str, budget: usize, ellipsis: &str) -> String {
    if title.chars().count() <= budget {
        return title.to_string();
    }
    let mut out: String = title.chars().take(budget).collect();
    out.push_str(ellipsis);
    out
}

fn fmt_hours(hours: f64) -> String {
    if !hours.is_finite() {
        return "0h".to_string();
    }
    format!("{hours}h")
}
