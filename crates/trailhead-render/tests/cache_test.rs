use serde_json::json;
use trailhead_core::PrereqGraph;
use trailhead_render::cache::LayoutCache;
use trailhead_render::model::Canvas;
use trailhead_render::{LayoutOptions, layout_graph};

fn graph(value: serde_json::Value) -> PrereqGraph {
    PrereqGraph::from_json(&value).unwrap()
}

fn sample() -> PrereqGraph {
    graph(json!({
        "nodes": [
            {"id": 1, "title": "Arrays"},
            {"id": 2, "title": "DP"},
        ],
        "edges": [{"from": 1, "to": 2}],
    }))
}

#[test]
fn repeated_layouts_hit_the_same_entry() {
    let g = sample();
    let mut cache = LayoutCache::new();
    let options = LayoutOptions::default();

    let depth = cache.layout(&g, &options).unwrap().levels.depth();
    assert_eq!(depth, 2);
    cache.layout(&g, &options).unwrap();
    cache.layout(&g, &options).unwrap();

    assert_eq!(cache.len(), 1);
}

#[test]
fn cached_layout_matches_a_direct_computation() {
    let g = sample();
    let mut cache = LayoutCache::new();
    let options = LayoutOptions::default();

    let direct = layout_graph(&g, &options).unwrap();
    let cached = cache.layout(&g, &options).unwrap();

    assert_eq!(cached.positions.len(), direct.positions.len());
    for (id, point) in direct.positions.iter() {
        let hit = cached.positions.get(id).unwrap();
        assert_eq!((hit.x, hit.y), (point.x, point.y));
    }
}

#[test]
fn different_options_or_graph_miss() {
    let g = sample();
    let mut cache = LayoutCache::new();

    cache.layout(&g, &LayoutOptions::default()).unwrap();

    let wide = LayoutOptions {
        canvas: Canvas::new(1600.0, 1000.0),
        ..LayoutOptions::default()
    };
    cache.layout(&g, &wide).unwrap();
    assert_eq!(cache.len(), 2);

    let other = graph(json!({
        "nodes": [{"id": 9, "title": "Other"}],
        "edges": [],
    }));
    cache.layout(&other, &LayoutOptions::default()).unwrap();
    assert_eq!(cache.len(), 3);
}

#[test]
fn clear_empties_the_cache() {
    let g = sample();
    let mut cache = LayoutCache::new();
    cache.layout(&g, &LayoutOptions::default()).unwrap();
    assert!(!cache.is_empty());

    cache.clear();
    assert!(cache.is_empty());
}
