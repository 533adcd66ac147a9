use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use serde_json::{Map, Value};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use cpi_props::config::{self, OutputFormat};
use cpi_props::input::read_raw;
use cpi_props::schema::{decode, ResourceKind};
use cpi_props::utils::{display_property, render_json};
use cpi_props::validate::Validatable;

#[derive(Parser)]
#[command(
    name = "cpi-props",
    author,
    version,
    about = "Decode and validate Google CPI cloud properties",
    long_about = r#"cpi-props decodes the cloud properties a director sends for a resource and checks them the same way the CPI does.

Raw properties are read as a JSON object from --file, or from stdin when no file is given.

Examples:
  1) Check a VM's properties:
      echo '{"zone":"us-central1-a","tags":["web"]}' | cpi-props validate vm
  2) Show what a disk payload decodes to:
      cpi-props decode disk --file disk.json
  3) List the keys a network accepts:
      cpi-props schema network
"#,
    after_help = "Resource kinds: disk, network, snapshot, stemcell, vm."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode raw properties and print the fields that were set
    #[command(about = "Decode raw properties", long_about = "Decode a raw property map for the given resource kind and print the fields that differ from their defaults. Unknown keys are ignored.")]
    Decode {
        kind: ResourceKind,
        /// JSON file to read (stdin when omitted)
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
    },
    /// Decode and validate raw properties
    #[command(about = "Decode and validate raw properties", long_about = "Decode a raw property map and run the same validation the CPI runs before provisioning. Exits non-zero on the first violation.")]
    Validate {
        kind: ResourceKind,
        /// JSON file to read (stdin when omitted)
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
    },
    /// Show the field table for a resource kind
    Schema { kind: ResourceKind },
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn print_fields(kind: ResourceKind, fields: &Map<String, Value>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let json = render_json(fields).unwrap_or_else(|e| fail("Failed to render properties", &e));
            println!("{}", json);
        }
        OutputFormat::Table => {
            if fields.is_empty() {
                println!("(all {} properties at defaults)", kind);
                return;
            }
            let mut table = new_table();
            table.set_header(vec!["Field", "Value"]);
            for (k, v) in fields {
                table.add_row(vec![k.clone(), display_property(v)]);
            }
            println!("\n{table}\n");
        }
    }
}

fn print_schema(kind: ResourceKind, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let rows: Vec<Value> = kind
                .fields()
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "key": f.wire_key,
                        "type": f.kind.to_string(),
                        "default": f.kind.default_display(),
                        "description": f.description,
                    })
                })
                .collect();
            let json = render_json(&rows).unwrap_or_else(|e| fail("Failed to render schema", &e));
            println!("{}", json);
        }
        OutputFormat::Table => {
            let mut table = new_table();
            table.set_header(vec!["Key", "Type", "Default", "Description"]);
            for f in kind.fields() {
                table.add_row(vec![
                    f.wire_key.to_string(),
                    f.kind.to_string(),
                    f.kind.default_display().to_string(),
                    f.description.to_string(),
                ]);
            }
            println!("\n{table}\n");
        }
    }
}

fn fail(context: &str, err: &dyn std::fmt::Display) -> ! {
    eprintln!("{}: {}", yansi::Paint::red(context), err);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    config::load_env_file(cli.env_file.as_deref());

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(config::get_log_filter()))
        .init();

    if cli.no_color || config::get_no_color() {
        yansi::whenever(yansi::Condition::NEVER);
    }

    let format = if cli.json { OutputFormat::Json } else { config::get_output_format() };

    match cli.command {
        Commands::Decode { kind, file } => {
            let raw = read_raw(file.as_deref()).unwrap_or_else(|e| fail("Failed to read properties", &e));
            let props = decode(kind, &raw).unwrap_or_else(|e| fail("Failed to decode properties", &e));
            let fields = props.to_map().unwrap_or_else(|e| fail("Failed to encode properties", &e));
            tracing::debug!(%kind, fields = fields.len(), "decoded cloud properties");
            print_fields(kind, &fields, format);
        }
        Commands::Validate { kind, file } => {
            let raw = read_raw(file.as_deref()).unwrap_or_else(|e| fail("Failed to read properties", &e));
            let props = decode(kind, &raw).unwrap_or_else(|e| fail("Failed to decode properties", &e));
            if let Err(e) = props.validate() {
                fail("Invalid properties", &e);
            }
            println!("{} {}", yansi::Paint::green("Valid"), yansi::Paint::new(format!("{} cloud properties", kind)).cyan());
        }
        Commands::Schema { kind } => print_schema(kind, format),
    }
}
