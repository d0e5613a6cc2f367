//! CLI: Validate an exported pipeline graph (JSON) as a DAG.
//!
//! Loads the `{nodes, edges}` document, installs it in a store without repair,
//! and prints the validation report. Exits with status 1 when the graph is not
//! a valid DAG or cannot be read.
//!
//! Usage: `pipeline_dag [OPTIONS] <path-to-graph-json>`
//! Example: pipeline_dag pipeline-graph.json
//!
//! Set RUST_LOG=pipeline_dag=trace for TRACE-level span enter/exit and events.

use clap::{Parser, ValueEnum};
use pipeline_dag::{PipelineStore, graph_io};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
  Text,
  Json,
}

/// Validate an exported pipeline graph as a DAG.
#[derive(Parser, Debug)]
#[command(name = "pipeline_dag")]
#[command(after_help = r#"Environment variables (override flags when set):
  PIPELINE_DAG_OUTPUT   Report format: text or json.

Examples:
  pipeline_dag pipeline-graph.json
  pipeline_dag --format json pipeline-graph.json"#)]
struct Args {
  /// Report format. Overridden by PIPELINE_DAG_OUTPUT if set.
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  format: OutputFormat,

  /// Path to the exported graph document
  #[arg(value_name = "path-to-graph-json")]
  graph_path: PathBuf,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let format = match env::var("PIPELINE_DAG_OUTPUT") {
    Ok(v) => match OutputFormat::from_str(&v, true) {
      Ok(f) => f,
      Err(_) => {
        warn!(value = %v, "ignoring unknown PIPELINE_DAG_OUTPUT");
        args.format
      }
    },
    Err(_) => args.format,
  };
  info!(path = %args.graph_path.display(), ?format, "validating graph");

  let doc = match graph_io::load_graph(&args.graph_path) {
    Ok(d) => d,
    Err(e) => {
      eprintln!("Error reading {}: {}", args.graph_path.display(), e);
      process::exit(1);
    }
  };

  let store = PipelineStore::from_document(doc);
  let report = store.validation();

  match format {
    OutputFormat::Json => match serde_json::to_string_pretty(report) {
      Ok(json) => println!("{}", json),
      Err(e) => {
        eprintln!("Error encoding report: {}", e);
        process::exit(1);
      }
    },
    OutputFormat::Text => {
      println!(
        "Graph: {} nodes, {} edges",
        store.nodes().len(),
        store.edges().len()
      );
      if report.is_valid {
        println!("Valid DAG.");
      } else {
        println!("Invalid DAG:");
        for e in &report.errors {
          println!("  - {}", e);
        }
        println!("Failed checks: {}", report.failed_checks());
      }
    }
  }

  info!(valid = report.is_valid, "validation complete");
  if !report.is_valid {
    process::exit(1);
  }
}
