use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use trailhead_core::TopicId;

/// Logical canvas the compact layout is computed against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        // Reference dashboard's inline SVG viewport.
        Self::new(800.0, 500.0)
    }
}

/// Independent horizontal/vertical multipliers applied to compact positions
/// for an enlarged detail viewport. Layering is not recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewScale {
    pub x: f64,
    pub y: f64,
}

impl ViewScale {
    /// Reference detail-view spread.
    pub const DETAIL: Self = Self { x: 1.5, y: 1.4 };
}

impl Default for ViewScale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

/// Longest-path depth per topic, plus the level groups in original topic
/// order. Built by [`crate::level::assign_levels`].
#[derive(Debug, Clone)]
pub struct LevelAssignment {
    pub(crate) levels: FxHashMap<TopicId, u32>,
    pub(crate) grouped: Vec<Vec<TopicId>>,
    pub(crate) leftovers: Vec<TopicId>,
}

impl LevelAssignment {
    pub fn level_of(&self, id: &TopicId) -> Option<u32> {
        self.levels.get(id).copied()
    }

    /// Number of distinct levels present.
    pub fn depth(&self) -> usize {
        self.grouped.len()
    }

    /// Level groups indexed by level, members in original topic order.
    pub fn groups(&self) -> &[Vec<TopicId>] {
        &self.grouped
    }

    pub fn members_of(&self, level: u32) -> &[TopicId] {
        self.grouped
            .get(level as usize)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Topics the frontier never processed (cycle members), in original
    /// topic order. Empty for DAG input.
    pub fn leftovers(&self) -> &[TopicId] {
        &self.leftovers
    }
}

/// Canvas coordinates per topic. Built by [`crate::position::assign_positions`].
#[derive(Debug, Clone)]
pub struct PositionMap {
    pub(crate) positions: FxHashMap<TopicId, LayoutPoint>,
}

impl PositionMap {
    pub fn get(&self, id: &TopicId) -> Option<LayoutPoint> {
        self.positions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TopicId, LayoutPoint)> {
        self.positions.iter().map(|(id, point)| (id, *point))
    }

    /// Same layout spread over an enlarged viewport.
    pub fn scaled(&self, scale: ViewScale) -> Self {
        let positions = self
            .positions
            .iter()
            .map(|(id, point)| {
                (
                    id.clone(),
                    LayoutPoint {
                        x: point.x * scale.x,
                        y: point.y * scale.y,
                    },
                )
            })
            .collect();
        Self { positions }
    }
}

/// Output of [`crate::layout_graph`]: levels and positions, together with the
/// canvas they were computed against.
#[derive(Debug, Clone)]
pub struct GraphLayout {
    pub levels: LevelAssignment,
    pub positions: PositionMap,
    pub canvas: Canvas,
}
