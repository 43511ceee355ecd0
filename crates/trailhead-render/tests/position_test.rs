use serde_json::json;
use trailhead_core::{PrereqGraph, TopicId};
use trailhead_render::model::{Canvas, ViewScale};
use trailhead_render::{LayoutOptions, layout_graph};

fn graph(value: serde_json::Value) -> PrereqGraph {
    PrereqGraph::from_json(&value).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn single_topic_lands_at_the_canvas_midpoint() {
    let g = graph(json!({
        "nodes": [{"id": "only", "title": "Only"}],
        "edges": [],
    }));

    let layout = layout_graph(&g, &LayoutOptions::default()).unwrap();
    let point = layout.positions.get(&TopicId::from("only")).unwrap();
    assert!(close(point.x, 400.0));
    assert!(close(point.y, 250.0));
}

#[test]
fn levels_and_rows_are_evenly_spaced() {
    let g = graph(json!({
        "nodes": [
            {"id": 1, "title": "Arrays"},
            {"id": 2, "title": "Recursion"},
            {"id": 3, "title": "DP"},
        ],
        "edges": [
            {"from": 1, "to": 3},
            {"from": 2, "to": 3},
        ],
    }));

    let layout = layout_graph(&g, &LayoutOptions::default()).unwrap();
    let p1 = layout.positions.get(&TopicId::from(1)).unwrap();
    let p2 = layout.positions.get(&TopicId::from(2)).unwrap();
    let p3 = layout.positions.get(&TopicId::from(3)).unwrap();

    // Two levels over a 500-high canvas: rows at 500/3 and 1000/3.
    assert!(close(p1.y, 500.0 / 3.0));
    assert!(close(p2.y, 500.0 / 3.0));
    assert!(close(p3.y, 1000.0 / 3.0));

    // Two topics in the first row over an 800-wide canvas.
    assert!(close(p1.x, 800.0 / 3.0));
    assert!(close(p2.x, 1600.0 / 3.0));
    assert!(close(p3.x, 400.0));
}

#[test]
fn rows_are_increasing_and_symmetric_about_the_center() {
    let g = graph(json!({
        "nodes": [
            {"id": 1, "title": "a"}, {"id": 2, "title": "b"},
            {"id": 3, "title": "c"}, {"id": 4, "title": "d"},
            {"id": 5, "title": "e"},
        ],
        "edges": [],
    }));

    let options = LayoutOptions::default();
    let layout = layout_graph(&g, &options).unwrap();
    let xs: Vec<f64> = layout.levels.members_of(0)
        .iter()
        .map(|id| layout.positions.get(id).unwrap().x)
        .collect();

    for pair in xs.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    let width = options.canvas.width;
    for (left, right) in xs.iter().zip(xs.iter().rev()) {
        assert!(close(left + right, width));
    }
}

#[test]
fn layout_is_deterministic_across_runs() {
    let value = json!({
        "nodes": [
            {"id": 1, "title": "a"}, {"id": 2, "title": "b"},
            {"id": 3, "title": "c"}, {"id": 4, "title": "d"},
        ],
        "edges": [
            {"from": 1, "to": 2},
            {"from": 1, "to": 3},
            {"from": 2, "to": 4},
            {"from": 3, "to": 4},
        ],
    });

    let first = layout_graph(&graph(value.clone()), &LayoutOptions::default()).unwrap();
    let second = layout_graph(&graph(value), &LayoutOptions::default()).unwrap();

    assert_eq!(first.positions.len(), second.positions.len());
    for (id, point) in first.positions.iter() {
        let other = second.positions.get(id).unwrap();
        assert_eq!(point.x, other.x);
        assert_eq!(point.y, other.y);
    }
}

#[test]
fn scaled_positions_multiply_each_axis_independently() {
    let g = graph(json!({
        "nodes": [
            {"id": "a", "title": "a"},
            {"id": "b", "title": "b"},
        ],
        "edges": [{"from": "a", "to": "b"}],
    }));

    let layout = layout_graph(&g, &LayoutOptions::default()).unwrap();
    let scaled = layout.positions.scaled(ViewScale::DETAIL);
    for (id, point) in layout.positions.iter() {
        let enlarged = scaled.get(id).unwrap();
        assert!(close(enlarged.x, point.x * 1.5));
        assert!(close(enlarged.y, point.y * 1.4));
    }
}

#[test]
fn custom_canvas_drives_the_spacing() {
    let g = graph(json!({
        "nodes": [{"id": "a", "title": "a"}],
        "edges": [],
    }));

    let options = LayoutOptions {
        canvas: Canvas::new(1000.0, 600.0),
        ..LayoutOptions::default()
    };
    let layout = layout_graph(&g, &options).unwrap();
    let point = layout.positions.get(&TopicId::from("a")).unwrap();
    assert!(close(point.x, 500.0));
    assert!(close(point.y, 300.0));
}
