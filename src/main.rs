//! passk - pass@k analysis for LLM code-generation benchmark records.
//!
//! Scans a directory of line-delimited JSON record files (or a single
//! file), computes unbiased pass@k estimates per problem, and prints
//! dataset-level summaries plus the hardest problems. Can also render
//! the static benchmark leaderboard.

use anyhow::Result;
use clap::Parser;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

use passk_metrics::analysis::{leaderboard, report};
use passk_metrics::config::{self, AnalysisConfig};

/// Pass@k analysis for benchmark record logs
#[derive(Parser, Debug)]
#[command(name = "passk")]
#[command(version)]
#[command(about = "Compute pass@k metrics from benchmark record files", long_about = None)]
struct Args {
    /// Directory of record files to analyze
    #[arg(short, long, default_value = config::RECORD_DIR)]
    record_dir: PathBuf,

    /// Analyze a single record file instead of scanning the directory
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// k values for pass@k, comma-separated
    #[arg(short, long, value_delimiter = ',', default_values_t = vec![1, 5])]
    k: Vec<usize>,

    /// How many 0%-pass-rate problems to list per file
    #[arg(long, default_value_t = config::DEFAULT_HARDEST_LIMIT)]
    hardest: usize,

    /// Print the static benchmark leaderboard and charts instead
    #[arg(long, default_value_t = false)]
    leaderboard: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();

    if args.leaderboard {
        leaderboard::render_all(&mut stdout)?;
        return Ok(());
    }

    let config = AnalysisConfig {
        record_dir: args.record_dir,
        k_values: args.k,
        hardest_limit: args.hardest,
    };

    match args.file {
        Some(path) => {
            info!("Analyzing record file: {:?}", path);
            let summary = report::analyze_file(&path, &config)?;
            writeln!(stdout, "{}", path.display())?;
            report::write_summary(&mut stdout, &summary, config.hardest_limit)?;
        }
        None => {
            info!("Analyzing record directory: {:?}", config.record_dir);
            report::analyze_record_dir(&config, &mut stdout)?;
        }
    }

    Ok(())
}
