// CLI binary. Exiting on unrecoverable setup errors is fine here.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use psbridge::config::{self, BridgeConfig};
use psbridge::host::MemoryHost;
use psbridge::model::{Document, Layer, Workspace};
use psbridge::registry::{catalog, registry, ToolCategory};
use psbridge::{dispatch, Command, ToolError, ToolOutput};

// ── CLI argument parsing ─────────────────────────────────────────

#[derive(Parser)]
#[command(name = "psbridge-cli", about = "psbridge tool catalog and dry-run CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config_dir>/psbridge/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output raw JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List tools, optionally only one category
    Tools {
        #[arg(long)]
        category: Option<String>,
    },
    /// Category list, category tools, or one tool's parameters
    Help { topic: Option<String> },
    /// Every tool's input schema as JSON
    Schema,
    /// Run a tool against a recording host and print the batches it submits
    Run {
        tool: String,
        /// Tool options as a JSON object
        #[arg(long, default_value = "{}")]
        options: String,
        /// Workspace snapshot JSON (overrides the config file)
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
}

// ── Setup ────────────────────────────────────────────────────────

fn init_tracing(config: &BridgeConfig) {
    let filter = EnvFilter::try_new(config.effective_log_filter())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// One blank 1024x1024 document with a background layer.
fn blank_workspace() -> Workspace {
    Workspace::single(
        Document::new(1, "Untitled-1")
            .with_size(1024.0, 1024.0)
            .with_layer(Layer::new(1, "Background")),
    )
}

fn load_workspace(fixture: Option<&Path>) -> Workspace {
    let Some(path) = fixture else {
        return blank_workspace();
    };
    config::load_fixture(path).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(2);
    })
}

// ── Output formatting ────────────────────────────────────────────

fn print_json(value: &Value, pretty: bool) {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    println!("{}", text.unwrap_or_default());
}

fn print_output(output: &ToolOutput, batches: &Value, raw_json: bool, pretty: bool) {
    if raw_json {
        let json = json!({
            "message": output.message,
            "data": output.data,
            "batches": batches,
        });
        print_json(&json, pretty);
        return;
    }

    println!("{}", output.message);
    if !output.data.is_null() {
        print_json(&output.data, pretty);
    }
    if let Some(batches) = batches.as_array() {
        for (i, batch) in batches.iter().enumerate() {
            eprintln!("── batch {i} ──");
            print_json(batch, pretty);
        }
    }
}

fn fail(err: &ToolError, raw_json: bool) -> ! {
    if raw_json {
        print_json(&json!({ "error": err }), true);
    } else {
        eprintln!("Error: {err}");
    }
    process::exit(err.exit_code());
}

// ── Subcommands ──────────────────────────────────────────────────

fn list_tools(category: Option<&str>, raw_json: bool, pretty: bool) {
    let filter = match category {
        Some(slug) => match ToolCategory::from_slug(slug) {
            Some(c) => Some(c),
            None => {
                eprintln!("Unknown category: {slug}");
                process::exit(2);
            }
        },
        None => None,
    };
    let tools: Vec<_> = registry()
        .iter()
        .filter(|e| filter.map_or(true, |c| e.info.category == c))
        .collect();

    if raw_json {
        let list: Vec<Value> = tools
            .iter()
            .map(|e| {
                json!({
                    "name": e.info.name,
                    "category": e.info.category.slug(),
                    "description": e.info.description,
                })
            })
            .collect();
        print_json(&Value::Array(list), pretty);
        return;
    }
    for e in tools {
        println!("{:<36} {:<12} {}", e.info.name, e.info.category.slug(), e.info.description);
    }
}

fn run_tool(tool: &str, options: &str, fixture: Option<&Path>, raw_json: bool, pretty: bool) {
    let options: Value = serde_json::from_str(options).unwrap_or_else(|e| {
        eprintln!("Error: --options is not valid JSON: {e}");
        process::exit(2);
    });
    let mut host = MemoryHost::new(load_workspace(fixture));
    match dispatch(&mut host, &Command::new(tool, options)) {
        Ok(output) => print_output(&output, &host.submitted_json(), raw_json, pretty),
        Err(e) => fail(&e, raw_json),
    }
}

// ── Main ─────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let config = BridgeConfig::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(2);
    });
    init_tracing(&config);

    let raw = cli.json;
    let pretty = config.pretty;
    match &cli.command {
        Commands::Tools { category } => list_tools(category.as_deref(), raw, pretty),
        Commands::Help { topic } => println!("{}", catalog::help_text(topic.as_deref())),
        Commands::Schema => print_json(&catalog::to_json_schema(), pretty),
        Commands::Run {
            tool,
            options,
            fixture,
        } => {
            let fixture = fixture.as_deref().or(config.fixture.as_deref());
            run_tool(tool, options, fixture, raw, pretty);
        }
    }
}
