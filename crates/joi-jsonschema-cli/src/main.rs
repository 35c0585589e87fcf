//! joi2jsonschema - convert a described Joi schema into JSON Schema.
//!
//! Reads the JSON produced by `schema.describe()` and writes the matching
//! JSON Schema document. Diagnostics go to stderr; set `RUST_LOG` to tune
//! them (default `joi_jsonschema=warn,joi2jsonschema=warn`).

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Map, Value};
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "joi2jsonschema")]
#[command(version, about = "Convert a Joi schema description into JSON Schema", long_about = None)]
struct Cli {
    /// Described schema as JSON (stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Write the JSON Schema to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Add a `$schema` member with this URI to the root document
    #[arg(long, value_name = "URI")]
    schema_uri: Option<String>,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "joi_jsonschema=warn,joi2jsonschema=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let text = read_input(cli.input.as_deref())?;
    tracing::debug!(input = ?cli.input, bytes = text.len(), "read described schema");
    let described: Value = serde_json::from_str(&text).context("input is not valid JSON")?;

    let mut schema = joi_jsonschema::convert_value(&described)?;
    if let Some(uri) = &cli.schema_uri {
        schema = with_schema_uri(schema, uri);
    }

    let mut rendered = if cli.compact {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    rendered.push('\n');

    tracing::debug!(output = ?cli.output, bytes = rendered.len(), "writing JSON Schema");
    match &cli.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("failed to write to stdout")?,
    }
    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Put `$schema` first in the root object. Non-object roots are left alone.
fn with_schema_uri(schema: Value, uri: &str) -> Value {
    match schema {
        Value::Object(members) => {
            let mut stamped = Map::new();
            stamped.insert("$schema".to_string(), Value::from(uri));
            stamped.extend(members);
            Value::Object(stamped)
        }
        other => other,
    }
}
