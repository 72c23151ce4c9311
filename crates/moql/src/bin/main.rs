//! MoQL command-line interface

use clap::{Parser, Subcommand};
use moql::cli::{self, CompileConfig};

/// MoQL command-line tool
#[derive(Parser)]
#[command(name = "moql")]
#[command(author, version, about = "MoQL query-string compiler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a query string and print the query document
    Compile {
        /// The MoQL query string, e.g. "score>525&sort=-created_at"
        query: String,

        /// Parameter keys to exclude before parsing
        #[arg(short, long = "blacklist", value_delimiter = ',')]
        blacklist: Vec<String>,

        /// Pretty-print the output document
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile {
            query,
            blacklist,
            pretty,
        } => cli::run(CompileConfig {
            query,
            blacklist,
            pretty,
        }),
    };

    if let Err(error) = result {
        cli::report_error(&error);
        std::process::exit(1);
    }
}
