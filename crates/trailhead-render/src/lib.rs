#![forbid(unsafe_code)]

//! Headless layout and projection for prerequisite graphs.
//!
//! The pipeline is a pure function of the input graph and view parameters:
//! [`level`] assigns a longest-path depth to every topic, [`position`] maps
//! depths to canvas coordinates, and [`projection`] turns the result into
//! drawable primitives (or a flattened list). No wall-clock, randomness, or
//! I/O anywhere; identical input always yields identical output.

pub mod cache;
pub mod level;
pub mod model;
pub mod position;
pub mod projection;
pub mod svg;
pub mod theme;

use trailhead_core::PrereqGraph;

pub use level::CycleHandling;
pub use model::{Canvas, GraphLayout, ViewScale};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph contains a prerequisite cycle through: {}", .ids.join(", "))]
    CyclicGraph { ids: Vec<String> },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutOptions {
    pub canvas: Canvas,
    pub cycle_handling: CycleHandling,
}

/// Runs leveling and positioning in one call.
pub fn layout_graph(graph: &PrereqGraph, options: &LayoutOptions) -> Result<GraphLayout> {
    let levels = level::assign_levels(graph, options.cycle_handling)?;
    let positions = position::assign_positions(&levels, options.canvas);
    Ok(GraphLayout {
        levels,
        positions,
        canvas: options.canvas,
    })
}
