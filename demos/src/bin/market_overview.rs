//! Demo 1: Market Overview
//!
//! Showcases: Public endpoints, 24h summaries, recent trades
//!
//! Run: cargo run --bin market_overview [MARKET]

use bittrex_rest::{BittrexClient, MarketSummary};
use colored::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;

const TOP_N: usize = 15;

fn change_pct(summary: &MarketSummary) -> Option<Decimal> {
    let last = summary.last?;
    let prev = summary.prev_day?;
    if prev.is_zero() {
        return None;
    }
    Some((last - prev) / prev * dec!(100))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .init();

    let focus = env::args().nth(1).unwrap_or_else(|| "BTC-LTC".to_string());

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  MARKET OVERVIEW".cyan().bold());
    println!("{}", "  Bittrex REST Demo - Public Market Data".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = BittrexClient::new()?;

    let markets = client.get_markets().await?;
    let active = markets.iter().filter(|m| m.is_active).count();
    println!(
        "{} {} markets listed, {} active\n",
        "✓".green(),
        markets.len(),
        active
    );

    // Rank by base volume
    let mut summaries = client.get_market_summaries().await?;
    summaries.sort_by(|a, b| b.base_volume.cmp(&a.base_volume));

    println!(
        "  {:<12} {:>14} {:>14} {:>10}",
        "MARKET".white().bold(),
        "LAST".white().bold(),
        "BASE VOL".white().bold(),
        "24H".white().bold()
    );
    println!("  {}", "─".repeat(54));

    for summary in summaries.iter().take(TOP_N) {
        let change = match change_pct(summary) {
            Some(pct) if pct > Decimal::ZERO => format!("{:+.2}%", pct).green(),
            Some(pct) if pct < Decimal::ZERO => format!("{:+.2}%", pct).red(),
            Some(pct) => format!("{:+.2}%", pct).white(),
            None => "-".dimmed(),
        };

        println!(
            "  {:<12} {:>14.8} {:>14.2} {:>10}",
            summary.market_name.cyan(),
            summary.last.unwrap_or_default(),
            summary.base_volume.unwrap_or_default(),
            change
        );
    }
    println!();

    // Focus market
    println!("{}", format!("  {}", focus.to_uppercase()).yellow().bold());
    println!("  {}", "─".repeat(54));

    match client.get_ticker(&focus).await {
        Ok(ticker) => {
            println!("  Bid:    {:>14.8}", ticker.bid.unwrap_or_default());
            println!("  Ask:    {:>14.8}", ticker.ask.unwrap_or_default());
            println!("  Last:   {:>14.8}", ticker.last.unwrap_or_default());
            if let Some(spread) = ticker.spread() {
                println!("  Spread: {:>14.8}", spread);
            }
        }
        Err(e) => println!("  {} {}", "Error:".red(), e),
    }
    println!();

    match client.get_market_history(&focus, 10).await {
        Ok(trades) => {
            println!("  {}", "Recent trades".white().bold());
            for trade in trades {
                let side = if trade.is_buy() {
                    "BUY ".green()
                } else {
                    "SELL".red()
                };
                println!(
                    "  {}  {}  {:>14.8} @ {:.8}",
                    trade.time_stamp.format("%H:%M:%S").to_string().dimmed(),
                    side,
                    trade.quantity,
                    trade.price
                );
            }
        }
        Err(e) => println!("  {} {}", "Error:".red(), e),
    }

    Ok(())
}
