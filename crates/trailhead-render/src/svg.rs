//! SVG emitter for the visual projection.

use crate::projection::{ViewProfile, VisualGraph};
use std::fmt::Write as _;

const EDGE_STROKE: &str = "#6b7280";
const NODE_STROKE: &str = "#ffffff";
const TITLE_FILL: &str = "#ffffff";
const HOURS_FILL: &str = "#9ca3af";
const CAPTION_SIZE: f64 = 10.0;
// Text baseline nudge so the caption sits optically centered in the circle.
const CAPTION_BASELINE_NUDGE: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Optional background fill behind the whole diagram.
    pub background: Option<String>,
    pub font_family: String,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            background: None,
            font_family: "sans-serif".to_string(),
        }
    }
}

pub fn render_visual_svg(visual: &VisualGraph, options: &SvgRenderOptions) -> String {
    let (title_size, hours_size) = match visual.profile {
        ViewProfile::Compact => (12.0, 10.0),
        ViewProfile::Detail => (14.0, 12.0),
    };
    let width = visual.viewport.width;
    let height = visual.viewport.height;
    let font = xml_escape(&options.font_family);

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        &mut out,
        r#"<defs><marker id="arrowhead" markerWidth="10" markerHeight="7" refX="9" refY="3.5" orient="auto"><polygon points="0 0, 10 3.5, 0 7" fill="{EDGE_STROKE}"/></marker></defs>"#
    );
    if let Some(background) = &options.background {
        let _ = writeln!(
            &mut out,
            r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
            xml_escape(background)
        );
    }

    for edge in &visual.edges {
        let _ = writeln!(
            &mut out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{EDGE_STROKE}" stroke-width="2" marker-end="url(#arrowhead)"/>"#,
            edge.x1, edge.y1, edge.x2, edge.y2
        );
    }

    for node in &visual.nodes {
        let _ = writeln!(
            &mut out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{NODE_STROKE}" stroke-width="2"/>"#,
            node.x,
            node.y,
            node.radius,
            xml_escape(&node.fill)
        );
        let _ = writeln!(
            &mut out,
            r#"<text x="{}" y="{}" text-anchor="middle" fill="{TITLE_FILL}" font-family="{font}" font-size="{title_size}" font-weight="bold">{}</text>"#,
            node.x,
            node.title_y,
            xml_escape(&node.title)
        );
        let _ = writeln!(
            &mut out,
            r#"<text x="{}" y="{}" text-anchor="middle" fill="{HOURS_FILL}" font-family="{font}" font-size="{hours_size}">{}</text>"#,
            node.x,
            node.hours_y,
            xml_escape(&node.hours)
        );
        if let Some(caption) = &node.caption {
            let _ = writeln!(
                &mut out,
                r#"<text x="{}" y="{}" text-anchor="middle" fill="{TITLE_FILL}" font-family="{font}" font-size="{CAPTION_SIZE}">{}</text>"#,
                node.x,
                node.y + CAPTION_BASELINE_NUDGE,
                xml_escape(caption)
            );
        }
    }

    out.push_str("</svg>\n");
    out
}

fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
