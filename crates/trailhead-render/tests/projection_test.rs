use serde_json::json;
use trailhead_core::{PrereqGraph, TopicId};
use trailhead_render::projection::{
    DisplayMode, GraphProjection, ProjectionConfig, ViewProfile, project, project_list,
    project_visual, truncate_label,
};
use trailhead_render::{LayoutOptions, layout_graph};

fn graph(value: serde_json::Value) -> PrereqGraph {
    PrereqGraph::from_json(&value).unwrap()
}

fn scenario_a() -> PrereqGraph {
    graph(json!({
        "nodes": [
            {"id": 1, "title": "Arrays", "difficulty": "beginner", "estimatedHours": 3},
            {"id": 2, "title": "Recursion", "difficulty": "intermediate", "estimatedHours": 5},
            {"id": 3, "title": "DP", "difficulty": "advanced", "estimatedHours": 12},
        ],
        "edges": [
            {"from": 1, "to": 3},
            {"from": 2, "to": 3},
        ],
    }))
}

#[test]
fn list_mode_reports_direct_prerequisites() {
    let view = project_list(&scenario_a());

    assert_eq!(view.entries.len(), 3);
    assert!(view.entries[0].prerequisites.is_empty());
    assert!(view.entries[1].prerequisites.is_empty());
    assert_eq!(view.entries[2].prerequisites, ["Arrays", "Recursion"]);
}

#[test]
fn list_mode_dedupes_duplicate_edges() {
    let g = graph(json!({
        "nodes": [
            {"id": "a", "title": "A"},
            {"id": "b", "title": "B"},
        ],
        "edges": [
            {"from": "a", "to": "b"},
            {"from": "a", "to": "b"},
        ],
    }));

    let view = project_list(&g);
    assert_eq!(view.entries[1].prerequisites, ["A"]);
}

#[test]
fn dangling_edges_never_reach_the_projection() {
    let g = graph(json!({
        "nodes": [
            {"id": "a", "title": "A"},
            {"id": "b", "title": "B"},
        ],
        "edges": [
            {"from": "a", "to": "b"},
            {"from": "ghost", "to": "b"},
            {"from": "a", "to": "phantom"},
        ],
    }));

    let layout = layout_graph(&g, &LayoutOptions::default()).unwrap();
    let visual = project_visual(
        &g,
        &layout,
        ViewProfile::Compact,
        &ProjectionConfig::default(),
    );
    assert_eq!(visual.edges.len(), 1);

    let view = project_list(&g);
    assert_eq!(view.entries[1].prerequisites, ["A"]);
}

#[test]
fn compact_profile_truncates_and_colors_by_difficulty() {
    let g = graph(json!({
        "nodes": [
            {"id": 1, "title": "Dynamic Programming Fundamentals", "difficulty": "advanced"},
            {"id": 2, "title": "Arrays", "difficulty": "beginner"},
            {"id": 3, "title": "Something", "difficulty": "weird"},
        ],
        "edges": [],
    }));

    let layout = layout_graph(&g, &LayoutOptions::default()).unwrap();
    let visual = project_visual(
        &g,
        &layout,
        ViewProfile::Compact,
        &ProjectionConfig::default(),
    );

    assert_eq!(visual.nodes[0].title, "Dynamic Program...");
    assert_eq!(visual.nodes[0].fill, "#ef4444");
    assert_eq!(visual.nodes[1].title, "Arrays");
    assert_eq!(visual.nodes[1].fill, "#10b981");
    assert_eq!(visual.nodes[2].fill, "#6b7280");
    assert_eq!(visual.nodes[0].radius, 30.0);
    assert!(visual.nodes.iter().all(|n| n.caption.is_none()));
}

#[test]
fn detail_profile_scales_positions_and_shows_full_titles() {
    let g = scenario_a();
    let layout = layout_graph(&g, &LayoutOptions::default()).unwrap();
    let config = ProjectionConfig::default();

    let compact = project_visual(&g, &layout, ViewProfile::Compact, &config);
    let detail = project_visual(&g, &layout, ViewProfile::Detail, &config);

    assert_eq!(detail.viewport.width, 1400.0);
    assert_eq!(detail.viewport.height, 900.0);
    for (c, d) in compact.nodes.iter().zip(detail.nodes.iter()) {
        assert!((d.x - c.x * 1.5).abs() < 1e-9);
        assert!((d.y - c.y * 1.4).abs() < 1e-9);
        assert_eq!(d.radius, 40.0);
        assert!(d.caption.is_some());
    }
    assert_eq!(detail.nodes[2].caption.as_deref(), Some("advanced"));
}

#[test]
fn hours_annotation_prints_like_the_wire_value() {
    let g = graph(json!({
        "nodes": [
            {"id": 1, "title": "A", "estimatedHours": 3},
            {"id": 2, "title": "B", "estimatedHours": 1.5},
        ],
        "edges": [],
    }));

    let layout = layout_graph(&g, &LayoutOptions::default()).unwrap();
    let visual = project_visual(
        &g,
        &layout,
        ViewProfile::Compact,
        &ProjectionConfig::default(),
    );
    assert_eq!(visual.nodes[0].hours, "3h");
    assert_eq!(visual.nodes[1].hours, "1.5h");
}

#[test]
fn labels_at_the_budget_pass_through_untouched() {
    assert_eq!(truncate_label("exactly15chars!", 15, "..."), "exactly15chars!");
    assert_eq!(truncate_label("exactly16chars!!", 15, "..."), "exactly16chars!...");
    assert_eq!(truncate_label("", 15, "..."), "");
}

#[test]
fn project_dispatches_on_display_mode() {
    let g = scenario_a();
    let layout = layout_graph(&g, &LayoutOptions::default()).unwrap();
    let config = ProjectionConfig::default();

    let visual = project(&g, &layout, DisplayMode::Visual, ViewProfile::Compact, &config);
    assert!(matches!(visual, GraphProjection::Visual(_)));

    let list = project(&g, &layout, DisplayMode::List, ViewProfile::Compact, &config);
    let GraphProjection::List(view) = list else {
        panic!("expected list projection");
    };
    assert_eq!(view.entries[2].id, TopicId::from(3));
}

#[test]
fn edge_segments_connect_the_endpoint_positions() {
    let g = scenario_a();
    let layout = layout_graph(&g, &LayoutOptions::default()).unwrap();
    let visual = project_visual(
        &g,
        &layout,
        ViewProfile::Compact,
        &ProjectionConfig::default(),
    );

    for segment in &visual.edges {
        let from = layout.positions.get(&segment.from).unwrap();
        let to = layout.positions.get(&segment.to).unwrap();
        assert_eq!((segment.x1, segment.y1), (from.x, from.y));
        assert_eq!((segment.x2, segment.y2), (to.x, to.y));
    }
}
