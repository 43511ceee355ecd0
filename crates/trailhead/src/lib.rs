#![forbid(unsafe_code)]

//! `trailhead` is a headless implementation of a roadmap dashboard's client
//! core: prerequisite-graph layout, render projection, and the remote API
//! client around it.
//!
//! # Features
//!
//! - `render`: enable layout + projection + SVG (`trailhead::render`)
//! - `client`: enable the async roadmap API client (`trailhead::client`)

pub use trailhead_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use trailhead_render::cache::LayoutCache;
    pub use trailhead_render::level::{CycleHandling, assign_levels};
    pub use trailhead_render::model::{
        Canvas, GraphLayout, LayoutPoint, LevelAssignment, PositionMap, ViewScale,
    };
    pub use trailhead_render::position::assign_positions;
    pub use trailhead_render::projection::{
        DisplayMode, EdgeSegment, GraphProjection, ListEntry, ListView, NodeGlyph,
        ProjectionConfig, ViewProfile, VisualGraph, project, project_list, project_visual,
    };
    pub use trailhead_render::svg::{SvgRenderOptions, render_visual_svg};
    pub use trailhead_render::theme::DifficultyPalette;
    pub use trailhead_render::{LayoutOptions, layout_graph};

    #[derive(Debug, thiserror::Error)]
    pub enum PipelineError {
        #[error(transparent)]
        Model(#[from] trailhead_core::Error),
        #[error(transparent)]
        Layout(#[from] trailhead_render::Error),
    }

    pub type Result<T> = std::result::Result<T, PipelineError>;

    /// Lays out and projects in one call.
    pub fn layout_and_project(
        graph: &trailhead_core::PrereqGraph,
        mode: DisplayMode,
        profile: ViewProfile,
        layout_options: &LayoutOptions,
        config: &ProjectionConfig,
    ) -> Result<GraphProjection> {
        let layout = layout_graph(graph, layout_options)?;
        Ok(project(graph, &layout, mode, profile, config))
    }

    /// Full pipeline convenience: decoded `{nodes, edges}` JSON to SVG.
    pub fn graph_svg(
        value: &serde_json::Value,
        profile: ViewProfile,
        layout_options: &LayoutOptions,
        config: &ProjectionConfig,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let graph = trailhead_core::PrereqGraph::from_json(value)?;
        let layout = layout_graph(&graph, layout_options)?;
        let visual = project_visual(&graph, &layout, profile, config);
        Ok(render_visual_svg(&visual, svg_options))
    }
}

#[cfg(feature = "client")]
pub mod client {
    pub use trailhead_client::{
        ClientError, DEFAULT_TIMEOUT, GenerateRequest, Roadmap, RoadmapClient, Task,
    };
}
