use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use oab_core::normalize::{DocumentView, SpecVersion};
use oab_core::parse::{self, Document};

#[derive(Parser)]
#[command(
    name = "oab",
    about = "Condense OpenAPI/Swagger specs into LLM-sized text summaries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a spec file to plain text
    Summarize {
        /// Path to the spec file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Write the summary here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a spec file decodes, and report what was found
    Check {
        /// Path to the spec file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Summarize { input, output } => cmd_summarize(&input, output.as_deref()),

        Commands::Check { input } => cmd_check(&input),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "oab", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn load_document(path: &Path) -> Result<Document> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    let doc = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };
    Ok(doc)
}

fn cmd_summarize(input: &Path, output: Option<&Path>) -> Result<()> {
    let doc = load_document(input)?;
    let summary = oab_core::summarize(&doc);
    match output {
        Some(path) => {
            fs::write(path, &summary)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {} bytes to {}", summary.len(), path.display());
        }
        None => print!("{summary}"),
    }
    Ok(())
}

fn cmd_check(input: &Path) -> Result<()> {
    let doc = load_document(input)?;
    let view = DocumentView::new(&doc);
    let version = match view.version() {
        SpecVersion::SwaggerV2 => "Swagger 2.0",
        SpecVersion::OpenApiV3 => "OpenAPI 3.x",
    };
    println!(
        "{}: {} ({} paths, {} schemas)",
        input.display(),
        version,
        doc.paths.len(),
        view.schemas().len()
    );
    Ok(())
}
