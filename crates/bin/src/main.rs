//! Fundamenta CLI binary.
//!
//! Screens a snapshot of company financials, ranks the companies by
//! fundamental score, and writes the ranking, chart, alert and run report.

mod config;

use chrono::Local;
use clap::{Parser, Subcommand};
use config::AppConfig;
use fundamenta::{Screener, Screening};
use fundamenta_data::Snapshot;
use fundamenta_output::{
    ChartOptions, ExportFormat, RankingTable, ReportBuilder, ScoreAttribution, ScreeningSummary,
    WriterNotifier, notify_eligible, render_text, save_results, timestamped_file_name, write_svg,
};
use fundamenta_ratios::{RatioCategory, available_ratios, ratios_by_category};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "fundamenta")]
#[command(about = "Fundamenta: fundamental ratio scoring and stock ranking", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score and rank every company in a snapshot
    Rank {
        /// Snapshot of raw financials (JSON)
        #[arg(long)]
        input: PathBuf,

        /// Symbols to analyse (overrides the config file)
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        symbols: Vec<String>,

        /// Number of top companies to show
        #[arg(long)]
        top: Option<usize>,

        /// Minimum composite score for an alert
        #[arg(long)]
        min_score: Option<f64>,

        /// Directory for the ranking, chart and report files
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Ranking file format (csv, json or pretty-json)
        #[arg(long, default_value = "csv")]
        format: ExportFormat,

        /// Render a bar chart of the top companies
        #[arg(long)]
        chart: bool,

        /// Print an alert for companies at or above the minimum score
        #[arg(long)]
        notify: bool,

        /// Write a JSON run report
        #[arg(long)]
        report: bool,

        /// Print tables as Markdown
        #[arg(long)]
        markdown: bool,
    },

    /// Show how one company's score was built
    Explain {
        /// Stock symbol
        symbol: String,

        /// Snapshot of raw financials (JSON)
        #[arg(long)]
        input: PathBuf,

        /// Print as Markdown
        #[arg(long)]
        markdown: bool,
    },

    /// List the ratios and how they are scored
    Ratios {
        /// Filter by category (value, quality or growth)
        #[arg(long)]
        category: Option<String>,
    },
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> CliResult {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Rank {
            input,
            symbols,
            top,
            min_score,
            output_dir,
            format,
            chart,
            notify,
            report,
            markdown,
        } => {
            let options = RankOptions {
                output_dir,
                format,
                chart,
                notify,
                report,
                markdown,
            };
            rank(&config, &input, &symbols, top, min_score, &options)?;
        }
        Commands::Explain {
            symbol,
            input,
            markdown,
        } => {
            explain(&config, &input, &symbol, markdown)?;
        }
        Commands::Ratios { category } => {
            list_ratios(category.as_deref())?;
        }
    }

    Ok(())
}

struct RankOptions {
    output_dir: PathBuf,
    format: ExportFormat,
    chart: bool,
    notify: bool,
    report: bool,
    markdown: bool,
}

fn screen(
    config: &AppConfig,
    screener: &Screener,
    snapshot: &Snapshot,
    symbols: &[String],
) -> Screening {
    let watch_list = config.watch_list(symbols);
    if watch_list.is_empty() {
        screener.screen_snapshot(snapshot)
    } else {
        info!(symbols = ?watch_list, "restricting run to watch list");
        Screening {
            failures: snapshot.failures.clone(),
            ..screener.screen(watch_list.select(snapshot))
        }
    }
}

fn rank(
    config: &AppConfig,
    input: &Path,
    symbols: &[String],
    top: Option<usize>,
    min_score: Option<f64>,
    options: &RankOptions,
) -> CliResult {
    let snapshot = Snapshot::from_path(input)?;
    let screener =
        Screener::from_configs(config.scoring.clone(), config.ranking(top, min_score))?;
    let screening = screen(config, &screener, &snapshot, symbols);
    let result = &screening.result;

    let table = RankingTable::new("Top stocks by fundamental analysis", result.top_n());
    if options.markdown {
        println!("{}", table.to_markdown());
    } else {
        print!("{}", table.to_ascii_table());
    }

    let mut outputs = vec![save_results(result, &options.output_dir, options.format)?];

    if options.chart {
        let chart_options = ChartOptions::default();
        print!("{}", render_text(result.top_n(), &chart_options));
        if !result.is_empty() {
            let name = timestamped_file_name("top_stocks", "svg", Local::now().naive_local());
            let path = options.output_dir.join(name);
            write_svg(result.top_n(), &chart_options, &path)?;
            outputs.push(path);
        }
    }

    if options.notify {
        let mut notifier = WriterNotifier::stdout();
        notify_eligible(result, &mut notifier)?;
    }

    let summary =
        ScreeningSummary::new(result, screening.skipped.len(), screening.failures.len());
    print!("{}", summary.to_ascii_table());

    if options.report {
        let mut builder = ReportBuilder::new()
            .input(input.display().to_string())
            .scoring(config.scoring.clone())
            .result(result)
            .summary(summary)
            .skipped(screening.skipped_symbols());
        for path in &outputs {
            builder = builder.output(path.clone());
        }
        let name = timestamped_file_name("report", "json", Local::now().naive_local());
        let path = options.output_dir.join(name);
        builder.build()?.write_to(&path)?;
        info!(path = %path.display(), "run report saved");
    }

    for path in &outputs {
        info!(path = %path.display(), "output written");
    }

    Ok(())
}

fn explain(config: &AppConfig, input: &Path, symbol: &str, markdown: bool) -> CliResult {
    let snapshot = Snapshot::from_path(input)?;
    let screener = Screener::from_configs(config.scoring.clone(), config.ranking(None, None))?;
    let screening = screener.screen_snapshot(&snapshot);

    let symbol = symbol.trim().to_ascii_uppercase();
    let entry = screening
        .result
        .iter()
        .find(|e| e.symbol().eq_ignore_ascii_case(&symbol))
        .ok_or_else(|| format!("symbol {symbol} not found in {}", input.display()))?;

    let attribution = ScoreAttribution::from_entry(entry);
    if markdown {
        println!("{}", attribution.to_markdown());
    } else {
        print!("{}", attribution.to_ascii_table());
    }

    Ok(())
}

fn list_ratios(category: Option<&str>) -> CliResult {
    let ratios = match category {
        Some(name) => {
            let category = RatioCategory::from_name(name)
                .ok_or_else(|| format!("unknown ratio category: {name}"))?;
            ratios_by_category(category)
        }
        None => available_ratios(),
    };

    println!(
        "{:<16} {:<8} {:<16} {:<52}",
        "Ratio", "Group", "Direction", "Description"
    );
    println!("{}", "-".repeat(94));
    for info in ratios {
        println!(
            "{:<16} {:<8} {:<16} {:<52}",
            info.name,
            info.category.to_string(),
            info.direction.to_string(),
            info.description
        );
    }

    Ok(())
}
