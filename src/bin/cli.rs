//! PickLabs CLI - Command-line interface for stake sizing and backtesting

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use picklabs::advisor::{Advisor, AdvisorConfig};
use picklabs::backtesting::{analyze_by_direction, BacktestConfig, BacktestReport, BacktestRunner};
use picklabs::data::load_prop_records;
use picklabs::error::EngineError;
use picklabs::models::LiveBet;

#[derive(Parser)]
#[command(name = "picklabs")]
#[command(author, version, about = "Sports betting stake sizing and backtest CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay historical predictions against realized outcomes
    Backtest {
        /// Path to the historical props CSV
        /// (player, sportsbook_line, actual_points, projected_points)
        #[arg(short, long)]
        data: PathBuf,

        /// Minimum projection-vs-line edge required to bet
        #[arg(long, default_value = "2.0")]
        threshold: f64,

        /// Units won per unit staked on a win (0.91 ≈ -110)
        #[arg(long, default_value = "0.91")]
        payout: f64,

        /// Emit the full report as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },

    /// Stake advice for a single live bet
    Advise {
        /// Model win probability (0-1)
        #[arg(short, long)]
        probability: f64,

        /// Decimal odds (e.g. 1.91 for -110)
        #[arg(short, long)]
        odds: f64,

        /// Bankroll for sizing
        #[arg(long, default_value = "1000")]
        bankroll: f64,

        /// Fixed-unit fraction of bankroll
        #[arg(long, default_value = "0.02")]
        unit: f64,

        /// Target profit amount
        #[arg(long, default_value = "50")]
        target: f64,

        /// Maximum Kelly stake as a fraction of bankroll
        #[arg(long, default_value = "0.25")]
        kelly_cap: f64,
    },
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let cli = Cli::parse();

    println!("{}", "PickLabs CLI v0.1.0".cyan().bold());
    println!();

    if cli.interactive {
        run_interactive()?;
    } else if let Some(command) = cli.command {
        match command {
            Commands::Backtest {
                data,
                threshold,
                payout,
                json,
            } => {
                run_backtest(&data, threshold, payout, json)?;
            }
            Commands::Advise {
                probability,
                odds,
                bankroll,
                unit,
                target,
                kelly_cap,
            } => {
                run_advise(probability, odds, bankroll, unit, target, kelly_cap)?;
            }
        }
    } else {
        println!("Use --help for usage information or --interactive for interactive mode.");
    }

    Ok(())
}

fn run_backtest(data: &Path, threshold: f64, payout: f64, json: bool) -> Result<()> {
    if !json {
        println!("{}", "Running backtest...".green());
        println!("Edge threshold: {:.2}", threshold);
        println!("Payout rate: {:.2}", payout);
        println!();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Loading historical records...");

    let records = load_prop_records(data)
        .with_context(|| format!("Failed to load CSV from {:?}", data))?;

    pb.finish_and_clear();

    if records.is_empty() {
        println!("{}", EngineError::EmptyInput.to_string().yellow());
    }

    let config = BacktestConfig {
        edge_threshold: threshold,
        payout_rate: payout,
    };
    let report = BacktestRunner::new(config).run(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &BacktestReport) {
    let summary = &report.summary;

    println!("{}", "=".repeat(60));
    println!("BACKTEST RESULTS");
    println!("{}", "=".repeat(60));
    println!(
        "Records: {} (below threshold: {}, malformed: {})",
        report.records_seen, report.skipped_below_threshold, report.malformed_records
    );
    println!("{}", "-".repeat(60));
    println!("Total bets placed: {}", summary.total_bets);
    println!("Record: {}-{}", summary.wins, summary.losses);
    println!("Win rate: {:.1}%", summary.win_rate_pct);
    println!("Net profit: {:+.2} units", summary.units_profit);

    let roi_str = format!("{:+.1}%", summary.roi_pct);
    let roi_colored = if summary.roi_pct > 0.0 {
        roi_str.green()
    } else if summary.roi_pct < 0.0 {
        roi_str.red()
    } else {
        roi_str.normal()
    };
    println!("ROI: {}", roi_colored);

    if !report.bets.is_empty() {
        println!("{}", "-".repeat(60));
        match report.risk.profit_factor {
            Some(pf) => println!("Profit factor: {:.2}", pf),
            None => println!("Profit factor: - (no losing bets)"),
        }
        println!("Max drawdown: {:.2} units", report.risk.max_drawdown_units);

        println!();
        println!("{}", "By direction:".yellow().bold());
        println!(
            "{:>6} {:>6} {:>6} {:>9} {:>11}",
            "side", "bets", "wins", "hit rate", "net units"
        );
        for row in analyze_by_direction(&report.bets) {
            println!(
                "{:>6} {:>6} {:>6} {:>8.1}% {:>+11.2}",
                row.direction.as_str(),
                row.bets,
                row.wins,
                row.hit_rate_pct,
                row.net_units
            );
        }
    }

    println!("{}", "=".repeat(60));
}

fn run_advise(
    probability: f64,
    odds: f64,
    bankroll: f64,
    unit: f64,
    target: f64,
    kelly_cap: f64,
) -> Result<()> {
    let advisor = Advisor::new(AdvisorConfig {
        bankroll,
        unit_percent: unit,
        target_profit: target,
        kelly_cap,
    })
    .context("Invalid advisor configuration")?;

    let bet = LiveBet {
        id: "cli".to_string(),
        win_probability: probability,
        decimal_odds: odds,
    };
    let advice = advisor.advise(&bet).context("Invalid bet parameters")?;

    println!(
        "{} (bankroll: {:.2}, odds: {:.2})",
        "Stake advice".green().bold(),
        bankroll,
        odds
    );
    println!();

    let edge_str = format!("{:+.2}%", advice.edge_pct);
    let edge_colored = if advice.edge_pct > 0.0 {
        edge_str.green()
    } else {
        edge_str.red()
    };
    println!(
        "Win probability: {:.1}%   Edge: {}",
        advice.win_probability_pct, edge_colored
    );
    println!();

    println!("{:>8} {:>10}", "strategy", "stake");
    println!("{}", "-".repeat(20));
    for rec in advice.suggestions.as_recommendations() {
        println!("{:>8} {:>10.2}", rec.strategy.as_str(), rec.amount);
    }

    if advice.edge_pct <= 0.0 {
        println!();
        println!(
            "{}",
            "No positive edge at these odds; Kelly recommends no stake.".yellow()
        );
    }

    Ok(())
}

fn run_interactive() -> Result<()> {
    let theme = ColorfulTheme::default();

    let probability: f64 = Input::with_theme(&theme)
        .with_prompt("Model win probability (0-1)")
        .default(0.55)
        .interact_text()?;

    let odds: f64 = Input::with_theme(&theme)
        .with_prompt("Decimal odds")
        .default(1.91)
        .interact_text()?;

    let bankroll: f64 = Input::with_theme(&theme)
        .with_prompt("Bankroll")
        .default(1000.0)
        .interact_text()?;

    println!();
    run_advise(probability, odds, bankroll, 0.02, 50.0, 0.25)
}
