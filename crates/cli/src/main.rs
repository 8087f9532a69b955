use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use designdna_core::model::{CapturedDocument, CapturedSheet};
use designdna_core::parsers::{parse_auto, stylesheet::parse_stylesheet};
use designdna_protocol::Stats;

#[derive(Parser)]
#[command(name = "designdna")]
#[command(about = "Extract design tokens from a captured web page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a token snapshot and write it as JSON
    Extract {
        #[command(flatten)]
        source: SourceArgs,

        /// Write the snapshot here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Print token counts per category
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Capture file (JSON) or a plain stylesheet (CSS)
    input: PathBuf,

    /// Additional stylesheet to scan; may be repeated
    #[arg(long = "stylesheet", short = 's')]
    stylesheets: Vec<PathBuf>,

    /// URL to record as the snapshot source
    #[arg(long)]
    url: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            source,
            output,
            compact,
        } => {
            let document = load_document(&source)?;
            let snapshot = designdna_core::extract(&document);
            let json = if compact {
                serde_json::to_string(&snapshot)?
            } else {
                serde_json::to_string_pretty(&snapshot)?
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, json + "\n")
                        .with_context(|| format!("writing {}", path.display()))?;
                    log::info!("wrote snapshot to {}", path.display());
                }
                None => writeln!(std::io::stdout().lock(), "{json}")?,
            }
        }
        Commands::Stats { source } => {
            let document = load_document(&source)?;
            let snapshot = designdna_core::extract(&document);
            write!(std::io::stdout().lock(), "{}", format_stats(&snapshot.stats))?;
        }
    }
    Ok(())
}

fn load_document(source: &SourceArgs) -> Result<CapturedDocument> {
    let mut document = read_input(&source.input)?;

    for path in &source.stylesheets {
        let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let rules =
            parse_stylesheet(&data).with_context(|| format!("parsing {}", path.display()))?;
        log::info!("loaded {} rules from {}", rules.len(), path.display());
        document.style_sheets.push(CapturedSheet {
            href: Some(path.display().to_string()),
            blocked: false,
            rules,
        });
    }

    if let Some(url) = &source.url {
        document.url = url.clone();
    }
    Ok(document)
}

fn read_input(path: &Path) -> Result<CapturedDocument> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let document = parse_auto(&data).with_context(|| format!("parsing {}", path.display()))?;
    log::info!(
        "loaded {} elements and {} stylesheets from {}",
        document.elements.len(),
        document.style_sheets.len(),
        path.display()
    );
    Ok(document)
}

fn format_stats(stats: &Stats) -> String {
    let entries = stats.entries();
    let width = entries.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|(label, count)| format!("{label:<width$}  {count}\n"))
        .collect()
}
