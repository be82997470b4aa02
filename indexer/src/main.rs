use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use search_core::loader::make_index;
use search_core::tokenizer::normalize;
use search_core::GlobalIndex;
use tracing_subscriber::{EnvFilter, fmt};

use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a keyword index over a set of documents and search it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// File listing the document files to index, whitespace separated
    #[arg(long, default_value = "docs.txt")]
    docs: PathBuf,
    /// File listing noise words, whitespace separated
    #[arg(long, default_value = "noisewords.txt")]
    noise_words: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index and report its size
    Build {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Print the whole index as JSON
        #[arg(long, default_value_t = false)]
        dump: bool,
    },
    /// Top five documents containing either keyword
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,
        kw1: String,
        kw2: String,
    },
    /// Show the occurrence list of one keyword
    Trace {
        #[command(flatten)]
        corpus: CorpusArgs,
        keyword: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { corpus, dump } => {
            let index = load(&corpus)?;
            println!("{} documents, {} keywords", index.document_count(), index.len());
            if dump {
                println!("{}", serde_json::to_string_pretty(&index)?);
            }
            Ok(())
        }
        Commands::Search { corpus, kw1, kw2 } => {
            let index = load(&corpus)?;
            print!("{}", render_search(&index, &kw1, &kw2));
            Ok(())
        }
        Commands::Trace { corpus, keyword } => {
            let index = load(&corpus)?;
            print!("{}", render_trace(&index, &keyword));
            Ok(())
        }
    }
}

fn load(corpus: &CorpusArgs) -> Result<GlobalIndex> {
    Ok(make_index(&corpus.docs, &corpus.noise_words)?)
}

fn render_search(index: &GlobalIndex, kw1: &str, kw2: &str) -> String {
    match index.top5(kw1, kw2) {
        Some(docs) => {
            let mut out = String::from("Docs:\n");
            for doc in docs {
                out.push_str(&doc);
                out.push('\n');
            }
            out
        }
        None => "no docs containing these keywords.\n".to_string(),
    }
}

fn render_trace(index: &GlobalIndex, raw: &str) -> String {
    let Some(keyword) = normalize(raw, index.noise_words()) else {
        return format!("{raw:?} is not a keyword\n");
    };
    let occs: Vec<String> = index.occurrences(&keyword).iter().map(ToString::to_string).collect();
    format!("{keyword}: [{}]\n", occs.join(", "))
}
