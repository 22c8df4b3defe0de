//! Demo 3: Account Snapshot
//!
//! Showcases: Signed requests, balances, open orders, funding history
//!
//! Run: BITTREX_API_KEY=... BITTREX_API_SECRET=... cargo run --bin account_snapshot
//!
//! Read-only: nothing is placed, cancelled or withdrawn.

use bittrex_rest::{BittrexClient, Credentials, RestError};
use colored::*;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bittrex_rest=info".into()),
        )
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  ACCOUNT SNAPSHOT".cyan().bold());
    println!("{}", "  Bittrex REST Demo - Authenticated Endpoints".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let credentials = match Credentials::from_env() {
        Ok(creds) => creds,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!("  Set BITTREX_API_KEY and BITTREX_API_SECRET to run this demo.");
            return Ok(());
        }
    };

    let client = BittrexClient::with_credentials(credentials)?;
    println!("{} Credentials loaded\n", "✓".green());

    // Balances
    match client.get_balances().await {
        Ok(balances) => {
            let mut held: Vec<_> = balances
                .into_values()
                .filter(|b| b.balance > Decimal::ZERO)
                .collect();
            held.sort_by(|a, b| a.currency.cmp(&b.currency));

            println!(
                "  {:<8} {:>18} {:>18} {:>18}",
                "ASSET".white().bold(),
                "TOTAL".white().bold(),
                "AVAILABLE".white().bold(),
                "RESERVED".white().bold()
            );
            println!("  {}", "─".repeat(66));
            for balance in held {
                println!(
                    "  {:<8} {:>18.8} {:>18.8} {:>18.8}",
                    balance.currency.cyan(),
                    balance.balance,
                    balance.available,
                    balance.reserved()
                );
            }
        }
        Err(RestError::Api { message }) => {
            println!("  {} exchange rejected request: {}", "✗".red(), message);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }
    println!();

    // Open orders
    let orders = client.get_open_orders("all").await?;
    println!("  {} ({})", "Open orders".white().bold(), orders.len());
    for order in &orders {
        println!(
            "  {}  {:<10} {:<10} {:>14.8} @ {:.8}  filled {:.8}",
            order.order_uuid.dimmed(),
            order.exchange,
            order.order_type,
            order.quantity,
            order.limit,
            order.filled()
        );
    }
    println!();

    // Recent funding
    let deposits = client.get_deposit_history("all", Some(5)).await?;
    println!("  {}", "Recent deposits".white().bold());
    for deposit in deposits {
        println!(
            "  {}  {:<6} {:>18.8}  {} confirmations",
            deposit.last_updated.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            deposit.currency,
            deposit.amount,
            deposit.confirmations
        );
    }

    let withdrawals = client.get_withdrawal_history("all", Some(5)).await?;
    println!("\n  {}", "Recent withdrawals".white().bold());
    for withdrawal in withdrawals {
        let status = if withdrawal.canceled {
            "canceled".red()
        } else if withdrawal.pending_payment {
            "pending".yellow()
        } else {
            "sent".green()
        };
        println!(
            "  {}  {:<6} {:>18.8}  {}",
            withdrawal.opened.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            withdrawal.currency,
            withdrawal.amount,
            status
        );
    }

    Ok(())
}
