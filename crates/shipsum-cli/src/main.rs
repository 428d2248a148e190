use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use shipsum_core::{Aggregator, CategoryTotal, OrderRequest, OrderSummary};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shipsum")]
#[command(about = "Order Shipping Summarizer - Aggregate line items into cases, cost and weight", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize an order into per-category case counts
    Summarize {
        /// Input order file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the summary (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a plain-text packing report from a summary
    Report {
        /// Input summary file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output text file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize { input, output } => {
            summarize_command(input, output)?;
        }
        Commands::Report { input, output } => {
            report_command(input, output)?;
        }
    }

    Ok(())
}

fn summarize_command(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    println!("{}", "🔍 Loading order...".bright_blue());

    // Read input file
    let content = std::fs::read_to_string(&input)?;
    let request: OrderRequest = if input.extension().and_then(|s| s.to_str()) == Some("yaml")
        || input.extension().and_then(|s| s.to_str()) == Some("yml")
    {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    println!(
        "  {} line items",
        request.line_items.len().to_string().bright_white().bold()
    );
    println!(
        "  carrier estimate {}",
        request.shipping_rate.as_str().bright_white().bold()
    );
    println!();

    println!("{}", "🚀 Aggregating...".bright_blue());

    // Run aggregation
    let aggregator = Aggregator::new(request)?;
    let summary = aggregator.summarize()?;

    println!();
    println!("{}", "✅ Order summarized!".bright_green().bold());
    println!();

    // Display results
    println!("{}", "📊 Summary:".bright_yellow().bold());
    println!("  Cases per category:");
    for (name, total) in &summary.totals {
        println!(
            "    • {}: {}",
            name.bright_white(),
            format_cases(total).bright_cyan()
        );
    }
    println!();
    println!(
        "  Shipping & handling: {}",
        format!("${:.2}", summary.total_shipping_cost)
            .bright_green()
            .bold()
    );
    println!(
        "  Total weight: {}",
        format!("{:.2} lb", summary.total_weight).bright_white()
    );
    println!();

    // Save output
    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(&output_path, json)?;
        println!(
            "💾 Saved summary to {}",
            output_path.display().to_string().bright_white()
        );
    } else {
        // Print to stdout
        let json = serde_json::to_string_pretty(&summary)?;
        println!("{}", json);
    }

    Ok(())
}

fn report_command(input: PathBuf, output: PathBuf) -> Result<()> {
    println!("{}", "🔍 Loading summary...".bright_blue());

    // Read summary file
    let content = std::fs::read_to_string(&input)?;
    let summary: OrderSummary = serde_json::from_str(&content)?;

    println!("{}", "🧾 Generating report...".bright_blue());

    let report = generate_report(&summary)?;

    std::fs::write(&output, report)?;

    println!();
    println!(
        "{} Saved report to {}",
        "✅".bright_green(),
        output.display().to_string().bright_white()
    );

    Ok(())
}

/// Formats a case count the way pickers read it: "2" or "1 (+4)" when loose
/// units remain after full cases.
fn format_cases(total: &CategoryTotal) -> String {
    if total.remainder_units > 0 {
        format!("{} (+{})", total.case_count, total.remainder_units)
    } else {
        total.case_count.to_string()
    }
}

fn generate_report(summary: &OrderSummary) -> Result<String> {
    use std::fmt::Write;

    let mut report = String::new();

    writeln!(&mut report, "ORDER PACKING REPORT")?;
    writeln!(&mut report, "====================")?;
    writeln!(&mut report)?;

    // Sort so the report is stable across runs
    let mut totals: Vec<&CategoryTotal> = summary.totals.values().collect();
    totals.sort_by(|a, b| a.category.cmp(&b.category));

    for total in totals {
        writeln!(
            &mut report,
            "{:<14} {:>8}   ({} units, {:.2} lb)",
            total.category,
            format_cases(total),
            total.raw_units,
            total.weight
        )?;
    }

    writeln!(&mut report)?;
    writeln!(&mut report, "Carrier base rate:    ${:.2}", summary.base_rate)?;
    writeln!(
        &mut report,
        "Shipping & handling:  ${:.2}",
        summary.total_shipping_cost
    )?;
    writeln!(
        &mut report,
        "Total weight:         {:.2} lb",
        summary.total_weight
    )?;

    Ok(report)
}
