use clap::{Parser, Subcommand};
use entropy_tree::data::params::{EvaluateParams, TableParams};
use entropy_tree::driver;
use entropy_tree::error::TreeError;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Greedy information-gain decision trees for integer tables.
///
/// Set RUST_LOG to control log output (default: info).
#[derive(Parser, Debug)]
#[command(name = "entropy-tree")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tables start with a header row
    #[arg(long, global = true)]
    headers: bool,

    /// Field delimiter
    #[arg(long, global = true, default_value_t = ',')]
    delimiter: char,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Train on a labelled table and write one label per query row
    Predict {
        /// Training table, label in the last column
        train: PathBuf,

        /// Query table, features only
        query: PathBuf,

        /// Results file
        output: PathBuf,
    },

    /// Hold out part of a labelled table and score a tree trained on the rest
    Evaluate {
        /// Labelled table
        data: PathBuf,

        /// Share of rows used for training, strictly between 0 and 1
        #[arg(long)]
        train_size: Option<f64>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    fn table_params(&self) -> Result<TableParams, TreeError> {
        let mut params = TableParams::new();
        params.set_has_headers(self.headers);
        params.set_delimiter(self.delimiter)?;
        Ok(params)
    }
}

fn evaluate_params(train_size: Option<f64>, seed: Option<u64>) -> Result<EvaluateParams, TreeError> {
    let mut params = EvaluateParams::new();
    if let Some(train_size) = train_size {
        params.set_train_size(train_size)?;
    }
    params.set_seed(seed);
    Ok(params)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging();
    let table = cli.table_params()?;

    match cli.command {
        Commands::Predict {
            train,
            query,
            output,
        } => {
            let written = driver::run_files::<i64>(&train, &query, &output, &table)?;
            info!("wrote {} labels to {}", written, output.display());
        }
        Commands::Evaluate {
            data,
            train_size,
            seed,
        } => {
            let params = evaluate_params(train_size, seed)?;
            let report = driver::evaluate::<i64, _>(File::open(&data)?, &table, &params)?;
            println!("{}", report);
        }
    }
    Ok(())
}
