//! Demo 2: ASCII Depth Chart
//!
//! Showcases: Order book endpoint, depth visualization
//!
//! Run: cargo run --bin depth_chart [MARKET]

use bittrex_rest::{BittrexClient, OrderEntry};
use colored::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;

const LEVELS: usize = 10;
const HALF_WIDTH: usize = 25;

fn bar_len(quantity: Decimal, max: Decimal) -> usize {
    if max.is_zero() {
        return 0;
    }
    ((quantity / max) * Decimal::from(HALF_WIDTH))
        .to_usize()
        .unwrap_or(0)
        .min(HALF_WIDTH)
}

fn draw(bids: &[OrderEntry], asks: &[OrderEntry]) {
    let bids = &bids[..bids.len().min(LEVELS)];
    let asks = &asks[..asks.len().min(LEVELS)];

    let max = bids
        .iter()
        .chain(asks)
        .map(|level| level.quantity)
        .max()
        .unwrap_or(dec!(1));

    // Asks, highest first
    for level in asks.iter().rev() {
        let len = bar_len(level.quantity, max);
        println!(
            "  {:>14.4} │{}{}│ {:<12.8}",
            level.quantity,
            " ".repeat(HALF_WIDTH - len),
            "█".repeat(len).red(),
            level.rate
        );
    }

    let spread = match (bids.first(), asks.first()) {
        (Some(bid), Some(ask)) => ask.rate - bid.rate,
        _ => Decimal::ZERO,
    };
    println!(
        "  {:>14} ├{}┤ {}",
        "",
        "─".repeat(HALF_WIDTH * 2),
        format!("SPREAD: {:.8}", spread).yellow()
    );

    for level in bids {
        let len = bar_len(level.quantity, max);
        println!(
            "  {:>14.4} │{}{}│ {:<12.8}",
            level.quantity,
            "█".repeat(len).green(),
            " ".repeat(HALF_WIDTH - len),
            level.rate
        );
    }

    println!();
    println!(
        "  {} {:.4}  {} {:.4}",
        "Bid Vol:".green(),
        bids.iter().map(|l| l.quantity).sum::<Decimal>(),
        "Ask Vol:".red(),
        asks.iter().map(|l| l.quantity).sum::<Decimal>()
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .init();

    let market = env::args().nth(1).unwrap_or_else(|| "BTC-LTC".to_string());

    println!("{}", "═".repeat(70).cyan());
    println!("{}", format!("  {} DEPTH CHART", market.to_uppercase()).cyan().bold());
    println!("{}", "  Bittrex REST Demo - Order Book Snapshot".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = BittrexClient::new()?;
    let book = client.get_order_book(&market, "both", LEVELS as u32).await?;

    if book.buy.is_empty() || book.sell.is_empty() {
        println!("{} Order book is empty", "!".yellow());
        return Ok(());
    }

    draw(&book.buy, &book.sell);
    Ok(())
}
