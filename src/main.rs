//! Ledgerview CLI
//!
//! Terminal front end for the customer transaction dashboard:
//! - List customers and their transactions, optionally filtered
//! - Show a customer's daily totals with a text bar chart
//! - Emit chart data as JSON
//! - Check a dataset for inconsistencies

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use ledgerview::config::{generate_default_config, Config};
use ledgerview::{logging, source, Dashboard, DailyTotals, DatasetReport, TableRow};

/// Width of the longest bar in the text chart
const BAR_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "ledgerview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search customer transactions and chart daily totals")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/ledgerview/config.toml or ./ledgerview.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset URL (overrides config)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Dataset file (overrides config and --url)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List customers with their transactions
    Customers {
        /// Match against customer name (any case) or transaction amount
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Show a customer's transaction totals per day
    Totals {
        /// Customer id
        customer: String,
    },

    /// Print bar chart data for a customer as JSON
    Chart {
        /// Customer id
        customer: String,
    },

    /// Check the dataset for orphans, duplicates and malformed values
    Check,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_deref());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.url {
        config.source.url = url.clone();
        config.source.path = None;
    }
    if let Some(file) = &cli.file {
        config.source.path = Some(file.display().to_string());
    }

    logging::init(&config.logging);
    tracing::debug!("Ledgerview v{}", env!("CARGO_PKG_VERSION"));

    let dataset_source = source::from_config(&config.source)?;
    let mut dashboard = Dashboard::new();
    source::load_into(&mut dashboard, dataset_source.as_ref()).await;
    if let Some(err) = dashboard.last_error() {
        bail!("Failed to load dataset from {}: {}", dataset_source.describe(), err);
    }

    match cli.command {
        Commands::Customers { search } => {
            dashboard.set_search_term(search);
            let rows = dashboard.table_rows();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                OutputFormat::Csv => print_rows_csv(&rows)?,
                OutputFormat::Table => print_rows_table(&rows),
            }
        }

        Commands::Totals { customer } => {
            select(&mut dashboard, &customer)?;
            let name = dashboard
                .selected_customer()
                .map(|c| c.name.clone())
                .unwrap_or_default();
            let totals = dashboard.daily_totals().unwrap_or_default();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&totals)?),
                OutputFormat::Csv => print_totals_csv(&totals)?,
                OutputFormat::Table => print_totals_table(std::io::stdout().lock(), &name, &totals)?,
            }
        }

        Commands::Chart { customer } => {
            select(&mut dashboard, &customer)?;
            println!("{}", serde_json::to_string_pretty(&dashboard.chart_data())?);
        }

        Commands::Check => {
            let report = dashboard.dataset().check();
            report.log();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Csv => print_report_csv(std::io::stdout(), &report)?,
                OutputFormat::Table => print_report_table(std::io::stdout().lock(), &report)?,
            }
        }

        Commands::Config { .. } => unreachable!("handled before loading"),
    }

    Ok(())
}

fn select(dashboard: &mut Dashboard, input: &str) -> anyhow::Result<()> {
    let id = match dashboard.resolve_customer(input) {
        Some(customer) => customer.id.clone(),
        None => bail!("No customer with id {}", input),
    };
    dashboard.select(&id);
    Ok(())
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write config to {}", path.display()))?;
            println!("Config written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn print_rows_table(rows: &[TableRow]) {
    if rows.is_empty() {
        println!("No matching customers");
        return;
    }

    let name_width = rows
        .iter()
        .filter_map(|r| r.customer_name.as_ref().map(|n| n.chars().count()))
        .max()
        .unwrap_or(0)
        .max("Customer Name".len());

    println!(
        "{:<name_width$}  {:<12}  {:>12}",
        "Customer Name", "Date", "Amount",
        name_width = name_width
    );
    println!("{}", "-".repeat(name_width + 28));

    for row in rows {
        println!(
            "{:<name_width$}  {:<12}  {:>12}",
            row.customer_name.as_deref().unwrap_or(""),
            row.date,
            row.amount_text,
            name_width = name_width
        );
    }
}

fn print_rows_csv(rows: &[TableRow]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(["customer_id", "customer_name", "transaction_id", "date", "amount"])?;
    for row in rows {
        writer.write_record([
            row.customer_id.to_string(),
            row.customer_name.clone().unwrap_or_default(),
            row.transaction_id.to_string(),
            row.date.clone(),
            row.amount_text.clone(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn print_totals_table(mut out: impl Write, name: &str, totals: &DailyTotals) -> anyhow::Result<()> {
    writeln!(out, "{}", ledgerview::chart::chart_title(name))?;
    writeln!(out)?;

    if totals.is_empty() {
        writeln!(out, "No transactions")?;
        return Ok(());
    }

    let scale = totals.peak().unwrap_or(0.0);
    for (date, total) in totals.iter() {
        let len = if scale > 0.0 {
            ((total.abs() / scale) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        writeln!(
            out,
            "{:<12} {:<width$} {}",
            date,
            "█".repeat(len),
            ledgerview::format_amount(total),
            width = BAR_WIDTH
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Total: {}", ledgerview::format_amount(totals.grand_total()))?;
    Ok(())
}

fn print_totals_csv(totals: &DailyTotals) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(["date", "total"])?;
    for (date, total) in totals.iter() {
        writer.write_record([date.to_string(), ledgerview::format_amount(total)])?;
    }
    writer.flush()?;
    Ok(())
}

fn report_counts(report: &DatasetReport) -> [(&'static str, usize); 7] {
    [
        ("customers", report.customers),
        ("transactions", report.transactions),
        ("orphan_transactions", report.orphan_transactions.len()),
        ("duplicate_customer_ids", report.duplicate_customer_ids.len()),
        ("duplicate_transaction_ids", report.duplicate_transaction_ids.len()),
        ("non_finite_amounts", report.non_finite_amounts.len()),
        ("malformed_dates", report.malformed_dates.len()),
    ]
}

fn print_report_table(mut out: impl Write, report: &DatasetReport) -> anyhow::Result<()> {
    for (check, count) in report_counts(report) {
        writeln!(out, "{:<26} {}", format!("{}:", check), count)?;
    }
    Ok(())
}

fn print_report_csv(out: impl Write, report: &DatasetReport) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["check", "count"])?;
    for (check, count) in report_counts(report) {
        writer.write_record([check.to_string(), count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
