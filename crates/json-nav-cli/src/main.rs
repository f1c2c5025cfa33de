//! `jnav` CLI — typed, path-annotated lookups into JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Read an integer (stdin → stdout)
//! echo '{"server":{"port":8080}}' | jnav get server.port --as int
//!
//! # Read from a file
//! jnav get -i config.json 'servers[0].host' --as string
//!
//! # Optional lookup: prints nothing (exit 0) if absent or of another type
//! jnav get -i config.json tls.cert --as string --try
//!
//! # Inspect structure
//! jnav keys -i config.json servers[0]
//! jnav len -i config.json servers
//! jnav kind -i config.json ratio
//! ```
//!
//! Failures print the path at which the lookup went wrong, e.g.
//! `Error: type mismatch at root.server.port: expected string, found integer`.
//!
//! Set `RUST_LOG=json_nav=trace` to see every navigation failure.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use json_nav::{Document, Kind, Node};
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "jnav",
    version,
    about = "Typed, path-annotated lookups into JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a path expression
    Get {
        /// Path expression, e.g. `servers[0].port` (empty selects the root)
        #[arg(default_value = "")]
        expr: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Require the value to have this type
        #[arg(long = "as", value_enum)]
        as_type: Option<CastType>,
        /// Use the lenient lookup: print nothing instead of failing
        #[arg(long = "try")]
        lenient: bool,
    },
    /// List an object's keys in document order
    Keys {
        #[arg(default_value = "")]
        expr: String,
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the number of elements in a list or members in an object
    Len {
        #[arg(default_value = "")]
        expr: String,
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the kind of the value (object, list, integer, float, string)
    Kind {
        #[arg(default_value = "")]
        expr: String,
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// Target types for `get --as`.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CastType {
    Object,
    List,
    String,
    Int,
    Long,
    Float,
    Double,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jnav=warn,json_nav=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            expr,
            input,
            as_type,
            lenient,
        } => {
            let doc = load(input.as_deref())?;
            let root = doc.root();
            let rendered = if lenient {
                root.try_select(&expr)
                    .and_then(|node| render_lenient(&node, as_type))
            } else {
                let node = root.select(&expr).context("Lookup failed")?;
                Some(render_strict(&node, as_type).context("Conversion failed")?)
            };
            if let Some(text) = rendered {
                println!("{text}");
            }
        }
        Commands::Keys { expr, input } => {
            let doc = load(input.as_deref())?;
            let root = doc.root();
            let obj = root
                .select(&expr)
                .and_then(|node| node.as_object())
                .context("Lookup failed")?;
            for key in obj.keys() {
                println!("{key}");
            }
        }
        Commands::Len { expr, input } => {
            let doc = load(input.as_deref())?;
            let root = doc.root();
            let node = root.select(&expr).context("Lookup failed")?;
            let len = match (node.try_list(), node.try_object()) {
                (Some(list), _) => list.len(),
                (_, Some(obj)) => obj.len(),
                _ => anyhow::bail!(
                    "value at {} is {}, which has no length",
                    node.path(),
                    node.kind()
                ),
            };
            println!("{len}");
        }
        Commands::Kind { expr, input } => {
            let doc = load(input.as_deref())?;
            let root = doc.root();
            let node = root.select(&expr).context("Lookup failed")?;
            println!("{}", node.kind());
        }
    }

    Ok(())
}

/// Strict conversion, failing with the library's path-annotated error.
fn render_strict(node: &Node<'_>, as_type: Option<CastType>) -> json_nav::Result<String> {
    Ok(match as_type {
        None => describe(node),
        Some(CastType::Object) => summarize(node.as_object()?.len(), Kind::Object),
        Some(CastType::List) => summarize(node.as_list()?.len(), Kind::List),
        Some(CastType::String) => node.as_string()?,
        Some(CastType::Int) => node.as_i32()?.to_string(),
        Some(CastType::Long) => node.as_i64()?.to_string(),
        Some(CastType::Float) => node.as_f32()?.to_string(),
        Some(CastType::Double) => node.as_f64()?.to_string(),
    })
}

/// Lenient conversion: exact variant matches only, `None` otherwise.
fn render_lenient(node: &Node<'_>, as_type: Option<CastType>) -> Option<String> {
    match as_type {
        None => Some(describe(node)),
        Some(CastType::Object) => node.try_object().map(|o| summarize(o.len(), Kind::Object)),
        Some(CastType::List) => node.try_list().map(|l| summarize(l.len(), Kind::List)),
        Some(CastType::String) => node.try_string(),
        Some(CastType::Int) => node.try_i32().map(|v| v.to_string()),
        Some(CastType::Long) => node.try_i64().map(|v| v.to_string()),
        Some(CastType::Float) => node.try_f32().map(|v| v.to_string()),
        Some(CastType::Double) => node.try_f64().map(|v| v.to_string()),
    }
}

/// Scalars print as-is; containers print a one-line summary.
fn describe(node: &Node<'_>) -> String {
    if let Some(obj) = node.try_object() {
        return summarize(obj.len(), Kind::Object);
    }
    if let Some(list) = node.try_list() {
        return summarize(list.len(), Kind::List);
    }
    if let Some(s) = node.try_str() {
        return s.to_owned();
    }
    if let Some(i) = node.try_i64() {
        return i.to_string();
    }
    node.try_f64().map(|f| f.to_string()).unwrap_or_default()
}

fn summarize(len: usize, kind: Kind) -> String {
    match kind {
        Kind::Object => format!("object ({len} keys)"),
        _ => format!("list ({len} items)"),
    }
}

fn load(path: Option<&str>) -> Result<Document> {
    let text = read_input(path)?;
    tracing::debug!(source = path.unwrap_or("stdin"), bytes = text.len(), "read input");
    json_nav::parse(&text).with_context(|| match path {
        Some(path) => format!("Failed to parse JSON from {path}"),
        None => "Failed to parse JSON from stdin".to_owned(),
    })
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
