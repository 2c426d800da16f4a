use heron::{Algorithm, MapDocument, OrthogonalOptions, TreeOptions};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Layout(heron::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Layout(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<heron::Error> for CliError {
    fn from(value: heron::Error) -> Self {
        Self::Layout(value)
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
    Layout,
    Widths,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "layout" => Some(Self::Layout),
            "widths" => Some(Self::Widths),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Engine {
    #[default]
    Orthogonal,
    Tree,
}

impl FromStr for Engine {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orthogonal" | "ortho" => Ok(Self::Orthogonal),
            "tree" => Ok(Self::Tree),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    root: Option<String>,
    engine: Engine,
    pretty: bool,
    orthogonal: OrthogonalOptions,
    tree: TreeOptions,
    out: Option<String>,
}

impl Args {
    fn algorithm(&self) -> Algorithm {
        match self.engine {
            Engine::Orthogonal => Algorithm::Orthogonal(self.orthogonal.clone()),
            Engine::Tree => Algorithm::Tree(self.tree.clone()),
        }
    }
}

fn usage() -> &'static str {
    "heron-cli\n\
\n\
USAGE:\n\
  heron-cli [layout] [--engine orthogonal|tree] [--root <id>] [--no-compact] [--max-leaf-distance <n>] [--first-slot <n>] [--pretty] [--out <path>] [<path>|-]\n\
  heron-cli widths [--root <id>] [--pretty] [--out <path>] [<path>|-]\n\
  heron-cli check [--root <id>] [<path>|-]\n\
\n\
NOTES:\n\
  - The command must come first; later words are paths (e.g. `heron-cli --pretty check` reads a file named check).\n\
  - If <path> is omitted or '-', the map document is read from stdin.\n\
  - A map document looks like {\"root\": \"a\", \"nodes\": [{\"id\": \"a\", \"next\": [\"b\"]}, {\"id\": \"b\"}]}.\n\
  - --root overrides the document's root.\n\
  - Set HERON_LOG (e.g. HERON_LOG=debug) to log layout passes to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut rest = argv.get(1..).unwrap_or(&[]);
    if let Some(command) = rest.first().and_then(|a| Command::from_arg(a)) {
        args.command = command;
        rest = &rest[1..];
    }

    let mut it = rest.iter();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--no-compact" => args.orthogonal.compact_leaves = false,
            "--engine" => {
                let Some(engine) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.engine = engine
                    .parse::<Engine>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--root" => {
                let Some(root) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.root = Some(root.clone());
            }
            "--max-leaf-distance" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.orthogonal.max_leaf_distance =
                    n.parse::<u32>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--first-slot" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.tree.first_slot = n.parse::<u32>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
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

    Ok(args)
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

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("HERON_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // A second call (e.g. from tests embedding `run`) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let doc = MapDocument::from_json(&text)?;
    let map = doc.to_map()?;
    let root = args.root.as_deref().unwrap_or(doc.root.as_str());
    tracing::debug!(
        nodes = map.node_count(),
        edges = map.edge_count(),
        root,
        "loaded map"
    );

    match args.command {
        Command::Layout => {
            let result = heron::layout(&map, root, args.algorithm())?;
            if let Some(extent) = result.extent() {
                tracing::info!(
                    nodes = result.len(),
                    max_depth = extent.depth,
                    max_offset = extent.offset,
                    "layout finished"
                );
            }
            write_json(&result, args.pretty, args.out.as_deref())
        }
        Command::Widths => {
            let widths: BTreeMap<String, u32> = heron::width::subtree_widths(&map, root)?;
            write_json(&widths, args.pretty, args.out.as_deref())
        }
        Command::Check => {
            heron::validate::validate(&map, root)?;
            Ok(())
        }
    }
}

fn main() {
    init_logging();

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

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
