//! Cart walkthrough example
//!
//! Demonstrates the cart manager lifecycle:
//! 1. Build a client from configuration
//! 2. Add, merge and remove lines locally
//! 3. Inspect totals and format them for display
//! 4. Sync with a live server when COMMERCE_BASE_URL is set
//!
//! Run: cargo run --example cart_demo

use commerce_client::{CartManager, ClientConfig, LineInput, format_currency};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let remote = std::env::var("COMMERCE_BASE_URL").is_ok();
    let base_url =
        std::env::var("COMMERCE_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let user_id: i64 = std::env::var("COMMERCE_USER_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);

    let mut config = ClientConfig::new(&base_url).with_timeout(10);
    if let Ok(token) = std::env::var("COMMERCE_TOKEN") {
        config = config.with_token(token);
    }

    let client = config.build_client()?;
    let mut manager = CartManager::new(client, user_id);

    if remote {
        println!("Loading cart for user {} from {}...", user_id, base_url);
        manager.load().await;
        match manager.error() {
            Some(error) => println!("  load failed: {}", error),
            None => println!(
                "  loaded order {:?} with {} line(s)",
                manager.cart().order.id,
                manager.cart().lines.len()
            ),
        }
    }

    println!("\nAdding two items...");
    manager.add_line(LineInput {
        description: Some("Espresso machine".to_string()),
        product_catalog_id: Some(101),
        quantity: Some(1),
        unit_price: Some(249.99),
        net_amount: Some(249.99),
        tax: Some(52.50),
        gross_amount: Some(302.49),
        ..LineInput::default()
    });
    manager.add_line(LineInput {
        description: Some("Coffee beans 1kg".to_string()),
        product_catalog_id: Some(102),
        quantity: Some(2),
        unit_price: Some(18.50),
        net_amount: Some(37.00),
        tax: Some(7.77),
        gross_amount: Some(44.77),
        ..LineInput::default()
    });

    println!("Bumping the beans to three bags (same line number merges)...");
    manager.add_line(LineInput {
        line_no: Some(2),
        quantity: Some(3),
        net_amount: Some(55.50),
        tax: Some(11.66),
        gross_amount: Some(67.16),
        ..LineInput::default()
    });

    let totals = manager.totals();
    println!("\nCart for user {}:", manager.user_id());
    for line in manager.cart().lines.iter().filter(|l| l.is_active()) {
        println!(
            "  #{} {:<20} x{}  {}",
            line.line_no,
            line.description,
            line.quantity,
            format_currency(line.gross_amount, 2)
        );
    }
    println!("  items: {}", totals.quantity);
    println!("  net:   {}", format_currency(totals.net_amount, 2));
    println!("  tax:   {}", format_currency(totals.tax, 2));
    println!("  total: {}", format_currency(totals.gross_amount, 2));

    if remote {
        println!("\nSaving cart to {}...", base_url);
        match manager.save().await {
            Ok(()) => println!("  saved as order {:?}", manager.cart().order.id),
            Err(error) => println!("  save failed: {}", error),
        }
    } else {
        println!("\nSet COMMERCE_BASE_URL (and optionally COMMERCE_TOKEN) to sync with a server.");
    }

    Ok(())
}
