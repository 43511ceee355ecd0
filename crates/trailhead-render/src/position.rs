//! Level → canvas coordinate assignment.

use crate::model::{Canvas, LayoutPoint, LevelAssignment, PositionMap};
use rustc_hash::FxHashMap;

/// Spreads each level's topics evenly across the canvas width, and the
/// levels evenly down the canvas height, with symmetric margins: level `k`
/// of `L` sits at `y = (k+1) * H/(L+1)`, topic `i` of `m` within a level at
/// `x = (i+1) * W/(m+1)`. Deterministic for identical input.
pub fn assign_positions(levels: &LevelAssignment, canvas: Canvas) -> PositionMap {
    let mut positions: FxHashMap<_, _> = FxHashMap::default();
    let depth = levels.depth();
    if depth == 0 {
        return PositionMap { positions };
    }

    let level_height = canvas.height / (depth as f64 + 1.0);
    for (level, members) in levels.groups().iter().enumerate() {
        let level_width = canvas.width / (members.len() as f64 + 1.0);
        let y = (level as f64 + 1.0) * level_height;
        for (index, id) in members.iter().enumerate() {
            positions.insert(
                id.clone(),
                LayoutPoint {
                    x: (index as f64 + 1.0) * level_width,
                    y,
                },
            );
        }
    }

    PositionMap { positions }
}
