use serde::Serialize;
use std::fmt::Write as _;
use std::io::Read;
use trailhead::{DanglingEdges, GraphOptions, PrereqGraph};
use trailhead_client::RoadmapClient;
use trailhead_render::level::CycleHandling;
use trailhead_render::model::{Canvas, GraphLayout};
use trailhead_render::projection::{
    DisplayMode, ListView, ProjectionConfig, ViewProfile, project_list, project_visual,
};
use trailhead_render::svg::{SvgRenderOptions, render_visual_svg};
use trailhead_render::{LayoutOptions, layout_graph};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(trailhead::Error),
    Layout(trailhead_render::Error),
    Client(trailhead_client::ClientError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Layout(err) => write!(f, "{err}"),
            CliError::Client(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<trailhead::Error> for CliError {
    fn from(value: trailhead::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<trailhead_render::Error> for CliError {
    fn from(value: trailhead_render::Error) -> Self {
        Self::Layout(value)
    }
}

impl From<trailhead_client::ClientError> for CliError {
    fn from(value: trailhead_client::ClientError) -> Self {
        Self::Client(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Render,
    List,
    Fetch,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    /// Graph JSON path for layout/render/list; roadmap id for fetch.
    input: Option<String>,
    pretty: bool,
    detail: bool,
    mode: DisplayMode,
    background: Option<String>,
    canvas_width: f64,
    canvas_height: f64,
    reject_cycles: bool,
    reject_dangling: bool,
    base_url: Option<String>,
    token: Option<String>,
}

fn usage() -> &'static str {
    "trailhead-cli\n\
\n\
USAGE:\n\
  trailhead-cli [layout] [--pretty] [--canvas-width <w>] [--canvas-height <h>] [--reject-cycles] [--reject-dangling] [<path>|-]\n\
  trailhead-cli render [--detail] [--background <css-color>] [--canvas-width <w>] [--canvas-height <h>] [--reject-cycles] [--reject-dangling] [<path>|-]\n\
  trailhead-cli list [<path>|-]\n\
  trailhead-cli fetch <roadmap-id> --base-url <url> [--token <token>] [--mode visual|list] [--detail]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the graph JSON is read from stdin.\n\
  - layout prints levels and positions as JSON; render prints SVG to stdout.\n\
  - fetch reads the bearer token from --token or $TRAILHEAD_TOKEN.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        command: Command::Layout,
        canvas_width: 800.0,
        canvas_height: 500.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "list" => args.command = Command::List,
            "fetch" => args.command = Command::Fetch,
            "--pretty" => args.pretty = true,
            "--detail" => args.detail = true,
            "--reject-cycles" => args.reject_cycles = true,
            "--reject-dangling" => args.reject_dangling = true,
            "--mode" => {
                let Some(mode) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.mode = match mode.trim().to_ascii_lowercase().as_str() {
                    "visual" => DisplayMode::Visual,
                    "list" => DisplayMode::List,
                    _ => return Err(CliError::Usage(usage())),
                };
            }
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--canvas-width" => {
                let Some(w) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.canvas_width = parse_dimension(w)?;
            }
            "--canvas-height" => {
                let Some(h) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.canvas_height = parse_dimension(h)?;
            }
            "--base-url" => {
                let Some(base) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.base_url = Some(base.clone());
            }
            "--token" => {
                let Some(token) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.token = Some(token.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn parse_dimension(raw: &str) -> Result<f64, CliError> {
    let value = raw.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
    if !(value.is_finite() && value > 0.0) {
        return Err(CliError::Usage(usage()));
    }
    Ok(value)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn graph_options(args: &Args) -> GraphOptions {
    GraphOptions {
        dangling_edges: if args.reject_dangling {
            DanglingEdges::Reject
        } else {
            DanglingEdges::Drop
        },
    }
}

fn layout_options(args: &Args) -> LayoutOptions {
    LayoutOptions {
        canvas: Canvas::new(args.canvas_width, args.canvas_height),
        cycle_handling: if args.reject_cycles {
            CycleHandling::Reject
        } else {
            CycleHandling::RootLeftovers
        },
    }
}

fn load_graph(args: &Args) -> Result<PrereqGraph, CliError> {
    let text = read_input(args.input.as_deref())?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    Ok(PrereqGraph::from_json_with(&value, graph_options(args))?)
}

#[derive(Serialize)]
struct LayoutRow<'a> {
    id: &'a str,
    title: &'a str,
    level: u32,
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct LayoutReport<'a> {
    depth: usize,
    canvas: Canvas,
    topics: Vec<LayoutRow<'a>>,
}

fn layout_report<'a>(graph: &'a PrereqGraph, layout: &GraphLayout) -> LayoutReport<'a> {
    let mut topics = Vec::with_capacity(graph.len());
    for topic in graph.topics() {
        let Some(level) = layout.levels.level_of(&topic.id) else {
            continue;
        };
        let Some(point) = layout.positions.get(&topic.id) else {
            continue;
        };
        topics.push(LayoutRow {
            id: topic.id.as_str(),
            title: &topic.title,
            level,
            x: point.x,
            y: point.y,
        });
    }
    LayoutReport {
        depth: layout.levels.depth(),
        canvas: layout.canvas,
        topics,
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn format_list(view: &ListView) -> String {
    let mut out = String::new();
    for entry in &view.entries {
        let _ = writeln!(
            &mut out,
            "{} ({}, {}h)",
            entry.title, entry.difficulty, entry.estimated_hours
        );
        if let Some(description) = &entry.description {
            let _ = writeln!(&mut out, "  {description}");
        }
        if !entry.prerequisites.is_empty() {
            let _ = writeln!(&mut out, "  prerequisites: {}", entry.prerequisites.join(", "));
        }
    }
    out
}

fn render_svg(args: &Args, graph: &PrereqGraph) -> Result<String, CliError> {
    let layout = layout_graph(graph, &layout_options(args))?;
    let profile = if args.detail {
        ViewProfile::Detail
    } else {
        ViewProfile::Compact
    };
    let visual = project_visual(graph, &layout, profile, &ProjectionConfig::default());
    let svg_options = SvgRenderOptions {
        background: args.background.clone(),
        ..SvgRenderOptions::default()
    };
    Ok(render_visual_svg(&visual, &svg_options))
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Layout => {
            let graph = load_graph(&args)?;
            let layout = layout_graph(&graph, &layout_options(&args))?;
            write_json(&layout_report(&graph, &layout), args.pretty)
        }
        Command::Render => {
            let graph = load_graph(&args)?;
            let svg = render_svg(&args, &graph)?;
            print!("{svg}");
            Ok(())
        }
        Command::List => {
            let graph = load_graph(&args)?;
            print!("{}", format_list(&project_list(&graph)));
            Ok(())
        }
        Command::Fetch => {
            let Some(roadmap_id) = args.input.clone() else {
                return Err(CliError::Usage(usage()));
            };
            let Some(base_url) = args.base_url.clone() else {
                return Err(CliError::Usage(usage()));
            };
            let token = match args.token.clone() {
                Some(token) => token,
                None => std::env::var("TRAILHEAD_TOKEN").unwrap_or_default(),
            };

            let client = RoadmapClient::new(&base_url, token)?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let payload = runtime.block_on(client.prerequisite_graph(&roadmap_id))?;
            let graph = PrereqGraph::build(payload, graph_options(&args))?;

            match args.mode {
                DisplayMode::Visual => {
                    let svg = render_svg(&args, &graph)?;
                    print!("{svg}");
                }
                DisplayMode::List => {
                    print!("{}", format_list(&project_list(&graph)));
                }
            }
            Ok(())
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
