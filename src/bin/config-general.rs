//! Command-line interface for config-general
//!
//! Loads a configuration file (or standard input) and prints it as JSON, YAML
//! or the raw parse tree.
//!
//! Usage:
//!   config-general `[PATH|-]` [--format json|yaml|raw]
//!
//! Log verbosity follows `RUST_LOG`, e.g. `RUST_LOG=config_general=debug`.

use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config_general::formats::{to_json_string, to_treeviz_str, to_yaml_string};
use config_general::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Merged tree as pretty-printed JSON
    Json,
    /// Merged tree as YAML
    Yaml,
    /// Unmerged parse tree
    Raw,
}

#[derive(Parser)]
#[command(name = "config-general")]
#[command(version, about = "Load Config::General style configuration files")]
struct Args {
    /// Path to the configuration file; omit or pass `-` to read standard input
    path: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "config_general=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => println!("{}", output.trim_end_matches('\n')),
        Err(message) => {
            eprintln!("error: {}", message);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<String, String> {
    let source = read_source(args.path.as_ref())?;

    match args.format {
        Format::Raw => {
            let doc = config_general::parse(&source)
                .map_err(|e| ParseError::from(e).to_string())?;
            Ok(to_treeviz_str(&doc))
        }
        Format::Json => {
            let tree = config_general::load(&source).map_err(|e| e.to_string())?;
            to_json_string(&tree).map_err(|e| e.to_string())
        }
        Format::Yaml => {
            let tree = config_general::load(&source).map_err(|e| e.to_string())?;
            to_yaml_string(&tree).map_err(|e| e.to_string())
        }
    }
}

fn read_source(path: Option<&PathBuf>) -> Result<String, String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e)),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| format!("failed to read standard input: {}", e))?;
            Ok(source)
        }
    }
}
