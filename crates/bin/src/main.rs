//! Guichet CLI binary.
//!
//! Merges box-office results with movie metadata, runs the feature
//! pipeline and writes the encoded matrix as CSV.

use std::fs::File;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use guichet::{EncodeOptions, FEATURE_SCHEMA_V1, FEATURE_SCHEMA_VERSION, FeaturePipeline};
use guichet_data::{merge_sales_and_metadata, source};
use guichet_features::pipeline_stages;
use polars::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "guichet")]
#[command(about = "Guichet: opening-week box-office feature engineering", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a batch of movies into the canonical feature matrix
    Encode {
        /// JSON file with box-office rows (id, title, year, sales, release date)
        #[arg(long)]
        sales: PathBuf,

        /// JSON file with movie metadata cards
        #[arg(long)]
        metadata: PathBuf,

        /// Output CSV path
        #[arg(long)]
        output: PathBuf,

        /// Fixed budget fill (inference mode); computed from the batch when omitted
        #[arg(long)]
        budget_median: Option<f64>,

        /// Fixed runtime fill (inference mode); computed from the batch when omitted
        #[arg(long)]
        runtime_mean: Option<f64>,
    },

    /// Print the canonical feature schema
    Schema,

    /// List the pipeline stages
    Stages,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            sales,
            metadata,
            output,
            budget_median,
            runtime_mean,
        } => {
            encode(&sales, &metadata, &output, budget_median, runtime_mean)?;
        }
        Commands::Schema => print_schema(),
        Commands::Stages => print_stages(),
    }

    Ok(())
}

fn encode(
    sales: &PathBuf,
    metadata: &PathBuf,
    output: &PathBuf,
    budget_median: Option<f64>,
    runtime_mean: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows = source::load_box_office_rows(sales)?;
    let cards = source::load_movie_cards(metadata)?;
    info!(rows = rows.len(), cards = cards.len(), "loaded input files");

    let records = merge_sales_and_metadata(&rows, &cards)?;
    info!(records = records.len(), "merged box office with metadata");

    let options = EncodeOptions {
        budget_median,
        runtime_mean,
    };
    let matrix = FeaturePipeline::new().encode_batch(&records, &options)?;

    // id, sales, then the canonical feature columns.
    let mut frame = matrix.to_frame()?;
    let sales_column: Vec<Option<f64>> = records.iter().map(|r| r.sales).collect();
    frame.insert_column(1, Series::new("sales".into(), sales_column))?;

    let file = File::create(output)?;
    CsvWriter::new(file).finish(&mut frame)?;

    println!(
        "Encoded {} movies into {} feature columns (schema {}) -> {}",
        matrix.num_rows(),
        FEATURE_SCHEMA_V1.len(),
        FEATURE_SCHEMA_VERSION,
        output.display()
    );
    Ok(())
}

fn print_schema() {
    println!("Feature schema {FEATURE_SCHEMA_VERSION} ({} columns):", FEATURE_SCHEMA_V1.len());
    for (i, column) in FEATURE_SCHEMA_V1.iter().enumerate() {
        println!("  {:>2}  {column}", i + 1);
    }
}

fn print_stages() {
    println!("{:<32} {}", "STAGE", "DESCRIPTION");
    for stage in pipeline_stages() {
        println!("{:<32} {}", stage.name, stage.description);
        println!("{:<32}   requires: {}", "", stage.required_columns.join(", "));
        if !stage.produced_columns.is_empty() {
            println!("{:<32}   produces: {}", "", stage.produced_columns.join(", "));
        }
    }
}
