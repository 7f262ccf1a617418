use anyhow::Result;
use clap::{Parser, Subcommand};
use docsearch_cli::{build_server, open_input, read_corpus, run_match, run_search};
use docsearch_core::config::MAX_RESULT_DOCUMENT_COUNT;
use docsearch_core::{DocumentStatus, SearchConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Rank documents against queries with TF-IDF", long_about = None)]
struct Cli {
    /// Input file in console format; reads stdin when omitted
    #[arg(long, global = true)]
    input: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the top documents for every query
    Search {
        /// Only return documents with this status
        #[arg(long, default_value_t = DocumentStatus::Actual)]
        status: DocumentStatus,
        /// Maximum number of documents per query
        #[arg(long, default_value_t = MAX_RESULT_DOCUMENT_COUNT)]
        limit: usize,
        /// Print one JSON array per query
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the matched query words of every document for every query
    Match {
        /// Print one JSON object per document
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let corpus = read_corpus(open_input(cli.input.as_deref())?)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Search { status, limit, json } => {
            let server = build_server(&corpus, SearchConfig::with_limit(limit))?;
            run_search(&server, &corpus.queries, status, json, &mut out)?;
        }
        Commands::Match { json } => {
            let server = build_server(&corpus, SearchConfig::default())?;
            run_match(&server, &corpus.queries, json, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
