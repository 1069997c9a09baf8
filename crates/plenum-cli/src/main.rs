mod cmd_hansard;
mod cmd_kokkai;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

const DEFAULT_START: &str = "2015-01-01";
const DEFAULT_END: &str = "2025-09-30";

#[derive(Parser)]
#[command(
    name = "plenum",
    version,
    about = "Collect cybersecurity-related parliamentary speeches into TSV tables"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Collect speeches from the NDL Kokkai speech search API
    Kokkai {
        /// Prefix for the output file (<prefix>speeches.tsv)
        #[arg(long, default_value = "")]
        out_prefix: String,
        /// Window start, YYYY-MM-DD
        #[arg(long, default_value = DEFAULT_START)]
        from: String,
        /// Window end, YYYY-MM-DD
        #[arg(long, default_value = DEFAULT_END)]
        until: String,
        /// Search term (repeatable; defaults to the built-in cyber terms)
        #[arg(long = "term")]
        terms: Vec<String>,
        /// Speech search endpoint
        #[arg(long, default_value = plenum_kokkai::collect::DEFAULT_BASE_URL)]
        base_url: String,
        /// Records per page
        #[arg(long, default_value_t = 100)]
        page_size: u32,
        /// Pause between successive pages, in milliseconds
        #[arg(long, default_value_t = 1500)]
        delay_ms: u64,
    },
    /// Filter a local ParlParse Hansard XML corpus
    Hansard {
        /// Directory containing the debates/lords/westminhall subtrees
        #[arg(long)]
        xml_root: PathBuf,
        /// Start date YYYY-MM-DD (matched against filename dates)
        #[arg(long, default_value = DEFAULT_START)]
        start: String,
        /// End date YYYY-MM-DD (matched against filename dates)
        #[arg(long, default_value = DEFAULT_END)]
        end: String,
        /// Prefix for the output files (e.g. UK_2015_2020_)
        #[arg(long, default_value = "")]
        out_prefix: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Kokkai {
            out_prefix,
            from,
            until,
            terms,
            base_url,
            page_size,
            delay_ms,
        } => cmd_kokkai::execute(cmd_kokkai::KokkaiParams {
            out_prefix,
            from,
            until,
            terms,
            base_url,
            page_size,
            delay_ms,
        }),
        Command::Hansard {
            xml_root,
            start,
            end,
            out_prefix,
        } => cmd_hansard::execute(&xml_root, &start, &end, &out_prefix),
    }
}
