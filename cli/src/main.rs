//! pincite CLI - resolve extracted-field snippets to source citations

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use serde_json::json;

use pincite::{resolver, Citation, SourceKind, SourceStore};

#[derive(Parser)]
#[command(name = "pincite")]
#[command(version)]
#[command(about = "Locate a text snippet in a parsed source document", long_about = None)]
struct Cli {
    /// Source identifier (file stem under the data directory)
    #[arg(value_name = "SOURCE_ID")]
    source_id: String,

    /// Snippet text to locate
    #[arg(value_name = "SNIPPET")]
    snippet: String,

    /// Source type
    #[arg(short = 't', long, value_enum, default_value = "pdf")]
    source_type: SourceType,

    /// Directory holding `<id>.parsed.json` and `<id>.md` files
    #[arg(long, value_name = "DIR", env = "PINCITE_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Emit compact single-line JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SourceType {
    /// Parsed PDF with block bounding boxes
    Pdf,
    /// Markdown source
    Md,
}

impl From<SourceType> for SourceKind {
    fn from(value: SourceType) -> Self {
        match value {
            SourceType::Pdf => SourceKind::Pdf,
            SourceType::Md => SourceKind::Markdown,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let store = SourceStore::new(&cli.data_dir);
    log::debug!(
        "resolving '{}' in source '{}' under {}",
        cli.snippet,
        cli.source_id,
        cli.data_dir.display()
    );

    match resolver::resolve(&store, &cli.source_id, &cli.snippet, cli.source_type.into()) {
        Ok(Some(citation)) => print_citation(&citation, cli.compact),
        Ok(None) => {
            // An expected outcome, reported as a well-formed error object.
            let body = json!({ "error": "no match found", "sourceId": cli.source_id });
            println!("{body}");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn print_citation(citation: &Citation, compact: bool) -> ExitCode {
    let rendered = if compact {
        serde_json::to_string(citation)
    } else {
        serde_json::to_string_pretty(citation)
    };
    match rendered {
        Ok(body) => {
            println!("{body}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}
