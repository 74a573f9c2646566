use bom_analyzer::adapters::outbound::console::StderrProgressReporter;
use bom_analyzer::adapters::outbound::filesystem::{FileSystemDatasetReader, SheetExporter};
use bom_analyzer::application::dto::{AnalysisRequest, OutputFormat, RequirementsRequest};
use bom_analyzer::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use bom_analyzer::application::use_cases::{AnalyzeBomUseCase, CalculateRequirementsUseCase};
use bom_analyzer::bom_analysis::services::{InsightOptions, DEFAULT_CURRENCY_SYMBOL, DEFAULT_TOP_N};
use bom_analyzer::cli::{AnalyzeArgs, Args, Command, DatasetArgs, RequirementsArgs};
use bom_analyzer::config::{self, ConfigFile};
use bom_analyzer::shared::error::ExitCode;
use bom_analyzer::shared::Result;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("bom_analyzer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    match args.command {
        Command::Analyze(analyze) => run_analyze(analyze, &config),
        Command::Requirements(requirements) => run_requirements(requirements, &config),
    }
}

/// Explicit `-c` path, else `bom-analyzer.config.yml` in the working directory
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    let config = match explicit {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => {
            let discovered = config::discover_config(Path::new("."))?;
            if discovered.is_some() {
                eprintln!("📋 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            discovered
        }
    };
    Ok(config.unwrap_or_default())
}

fn analysis_request(datasets: DatasetArgs, insight_options: InsightOptions) -> AnalysisRequest {
    AnalysisRequest::new(datasets.bom_a_l, datasets.bom_m_z)
        .with_dispensing(datasets.dispensing)
        .with_raw_materials(datasets.raw_materials)
        .with_insight_options(insight_options)
}

fn output_format(cli: Option<OutputFormat>, config: &ConfigFile) -> Result<OutputFormat> {
    Ok(match cli {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    })
}

fn run_analyze(args: AnalyzeArgs, config: &ConfigFile) -> Result<ExitCode> {
    let format = output_format(args.output.format, config)?;
    let insight_options = InsightOptions {
        top_n: args
            .top_n
            .map(usize::from)
            .or(config.top_n)
            .unwrap_or(DEFAULT_TOP_N),
        currency_symbol: config
            .currency_symbol
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
    };

    let use_case =
        AnalyzeBomUseCase::new(FileSystemDatasetReader::new(), StderrProgressReporter::new());
    let response = use_case.execute(analysis_request(args.datasets, insight_options))?;

    if let Some(dir) = args.export_dir {
        let written = SheetExporter::new(dir).export(&response.result)?;
        eprintln!("📁 Exported {} sheet(s)", written.len());
    }

    eprintln!("{}", FormatterFactory::progress_message(format));
    let output = FormatterFactory::create(format).format_analysis(&response)?;
    PresenterFactory::create(PresenterType::from_output(args.output.output)).present(&output)?;

    Ok(ExitCode::Success)
}

fn run_requirements(args: RequirementsArgs, config: &ConfigFile) -> Result<ExitCode> {
    let format = output_format(args.output.format, config)?;
    let strategy = match args.strategy {
        Some(strategy) => strategy,
        None => config.requirements_strategy()?.unwrap_or_default(),
    };
    let fail_on_shortage = args.fail_on_shortage || config.fail_on_shortage.unwrap_or(false);

    let request = RequirementsRequest::new(
        analysis_request(args.datasets, InsightOptions::default()),
        args.product,
        args.quantity,
    )
    .with_strategy(strategy)
    .with_column_aliases(config.column_aliases());

    let use_case = CalculateRequirementsUseCase::new(
        FileSystemDatasetReader::new(),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let output = FormatterFactory::create(format).format_requirements(&response)?;
    PresenterFactory::create(PresenterType::from_output(args.output.output)).present(&output)?;

    if fail_on_shortage && response.has_shortage {
        eprintln!("❌ Stock shortage detected for product '{}'", response.product_id);
        return Ok(ExitCode::ShortageDetected);
    }
    Ok(ExitCode::Success)
}
