use flowcanvas::CanvasConfig;
use flowcanvas::canvas::Canvas;
use flowcanvas::document::FlowsDocument;
use flowcanvas::layout::PrecomputedLayout;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Canvas(flowcanvas::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Canvas(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<flowcanvas::Error> for CliError {
    fn from(value: flowcanvas::Error) -> Self {
        Self::Canvas(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Build,
    Align,
    Route,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    bounds: Option<String>,
    pretty: bool,
    verbose: bool,
}

fn usage() -> &'static str {
    "flowcanvas-cli\n\
\n\
USAGE:\n\
  flowcanvas-cli [build] [--pretty] [--verbose] [<path>|-]\n\
  flowcanvas-cli align --bounds <path> [--pretty] [--verbose] [<path>|-]\n\
  flowcanvas-cli route --bounds <path> [--pretty] [--verbose] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', a JSON flows document is read from stdin.\n\
  - Paths ending in .yaml or .yml are read as YAML.\n\
  - build prints the merged canvas model of all visible flows.\n\
  - align lays the canvas out with the precomputed bounds, straightens it and prints the\n\
    position of every node.\n\
  - route does the same and prints the routed edges instead.\n\
  - Logs go to stderr; RUST_LOG filters them, --verbose enables debug output.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "build" => args.command = Command::Build,
            "align" => args.command = Command::Align,
            "route" => args.command = Command::Route,
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--bounds" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.bounds = Some(path.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
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

    if args.command != Command::Build && args.bounds.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
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

fn is_yaml_path(input: Option<&str>) -> bool {
    input
        .and_then(|p| Path::new(p).extension())
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

fn read_canvas(input: Option<&str>) -> Result<Canvas, CliError> {
    let text = read_input(input)?;
    let doc = if is_yaml_path(input) {
        FlowsDocument::from_yaml_str(&text)?
    } else {
        FlowsDocument::from_json_str(&text)?
    };
    debug!(flows = doc.flows.len(), "read flows document");
    Ok(doc.to_canvas(&CanvasConfig::default())?)
}

fn read_bounds(path: &str) -> Result<PrecomputedLayout, CliError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
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

/// Lays the canvas out with the bounds document and delivers the layout-end notification.
fn aligned(canvas: &mut Canvas, bounds: &str) -> Result<(), CliError> {
    let mut engine = read_bounds(bounds)?;
    let end = canvas.layout(&mut engine)?;
    let moved = canvas.handle_layout_end(end)?;
    debug!(moved = moved.len(), "alignment applied");
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let mut canvas = read_canvas(args.input.as_deref())?;

    match (args.command, args.bounds.as_deref()) {
        (Command::Build, _) => write_json(&canvas.draw(), args.pretty),
        (Command::Align, Some(bounds)) => {
            aligned(&mut canvas, bounds)?;
            let positions = canvas
                .scene()
                .map(|scene| scene.positions())
                .unwrap_or_default();
            write_json(&positions, args.pretty)
        }
        (Command::Route, Some(bounds)) => {
            aligned(&mut canvas, bounds)?;
            write_json(&canvas.edge_routes()?, args.pretty)
        }
        (_, None) => Err(CliError::Usage(usage())),
    }
}

fn main() {
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
    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
