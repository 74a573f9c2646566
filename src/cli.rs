use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::{OutputFormat, RequirementsStrategy};

/// Analyze bill-of-materials feeds and check stock for production runs
#[derive(Parser, Debug)]
#[command(name = "bom-analyzer")]
#[command(version)]
#[command(about = "Analyze bill-of-materials feeds and check stock for production runs", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (defaults to ./bom-analyzer.config.yml when present)
    #[arg(short, long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute product metrics, complexity, component usage and cost distribution
    Analyze(AnalyzeArgs),
    /// Compute component requirements and stock sufficiency for a product
    Requirements(RequirementsArgs),
}

/// Input datasets shared by every subcommand
#[derive(ClapArgs, Debug)]
pub struct DatasetArgs {
    /// BOM partition with products A to L (.csv, .xlsx, .xls)
    #[arg(long = "bom-a-l", value_name = "FILE")]
    pub bom_a_l: PathBuf,

    /// BOM partition with products M to Z (.csv, .xlsx, .xls)
    #[arg(long = "bom-m-z", value_name = "FILE")]
    pub bom_m_z: PathBuf,

    /// Dispensing feed (component code, Qty, Value)
    #[arg(long, value_name = "FILE")]
    pub dispensing: Option<PathBuf>,

    /// Raw materials feed (component code, SOH)
    #[arg(long = "raw-materials", value_name = "FILE")]
    pub raw_materials: Option<PathBuf>,
}

/// Report rendering options shared by every subcommand
#[derive(ClapArgs, Debug)]
pub struct OutputArgs {
    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub datasets: DatasetArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Also write one CSV sheet per analysis table into this directory
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Number of entries listed in the insight lines [default: 5]
    #[arg(long = "top-n", value_parser = clap::value_parser!(u16).range(1..))]
    pub top_n: Option<u16>,
}

#[derive(ClapArgs, Debug)]
pub struct RequirementsArgs {
    #[command(flatten)]
    pub datasets: DatasetArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Product (FG Code) to produce
    #[arg(short = 'P', long, value_name = "PRODUCT")]
    pub product: String,

    /// Number of units to produce
    #[arg(short = 'q', long, value_name = "QTY", value_parser = parse_quantity)]
    pub quantity: f64,

    /// Requirements strategy: usage or bom [default: bom]
    #[arg(long)]
    pub strategy: Option<RequirementsStrategy>,

    /// Exit with code 1 when any component lacks sufficient stock
    #[arg(long = "fail-on-shortage")]
    pub fail_on_shortage: bool,
}

fn parse_quantity(s: &str) -> Result<f64, String> {
    let quantity: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(format!("quantity must be a non-negative number, got {}", s));
    }
    Ok(quantity)
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
