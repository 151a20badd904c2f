//! Storefront demo binary
//!
//! Walks one customer through the shop: browse, add to cart, check out,
//! track the order, review a product, peek at the wishlist.
//!
//! ```bash
//! RUST_LOG=joot_storefront=debug cargo run --bin joot-storefront
//! JOOT_MIN_MOBILE_LEN=12 cargo run --bin joot-storefront
//! ```

use anyhow::Context;
use joot_runtime::Store;
use joot_storefront::{
    catalog,
    checkout::{checkout, submit_review, CheckoutForm, ReviewForm},
    format_rating, OrderId, ProductId, Rating, StoreAction, StoreReducer, StoreState,
    StorefrontConfig, StorefrontEnvironment,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "joot_storefront=info,joot_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StorefrontConfig::from_env().context("loading storefront configuration")?;
    tracing::info!(min_mobile_len = config.min_mobile_len, "Configuration loaded");

    let store = Store::new(
        StoreState::new(),
        StoreReducer::new(),
        StorefrontEnvironment::system(),
    );

    println!("=== Joot Products ===\n");
    for product in catalog::products() {
        println!(
            "  {:<16} {:>7}  ({})",
            product.name,
            config.format_price(product.price),
            product.id
        );
    }

    let basket_id = ProductId::from("jute-basket");
    let basket = catalog::find_product(&basket_id).context("jute-basket missing from catalog")?;
    println!("\n>>> Viewing {}: {}", basket.name, basket.description);

    for _ in 0..2 {
        store
            .send(StoreAction::AddToCart {
                product: basket.clone(),
            })
            .await?;
    }
    if let Some(coasters) = catalog::find_product(&ProductId::from("jute-coasters")) {
        store.send(StoreAction::AddToCart { product: coasters }).await?;
    }

    let state = store.snapshot().await;
    println!("\nCart ({} items):", state.cart_item_count());
    for line in state.cart_lines() {
        println!(
            "  {} x {}  {}",
            line.product.name,
            line.qty,
            config.format_price(line.line_total())
        );
    }
    println!("  Total: {}", config.format_price(state.cart_total()));

    println!("\n>>> Checking out with mobile \"12345\"");
    match checkout(
        CheckoutForm::new("Asha", "12345", "12 Lake Road, Kolkata"),
        &state.cart,
        store.environment(),
        &config,
    ) {
        Ok(action) => store.send(action).await?,
        Err(error) => println!("  {error}"),
    }

    println!("\n>>> Checking out with mobile \"9876543210\"");
    let action = checkout(
        CheckoutForm::new("Asha", "9876543210", "12 Lake Road, Kolkata"),
        &state.cart,
        store.environment(),
        &config,
    )?;
    let order_id = match &action {
        StoreAction::PlaceOrder { order } => order.id.clone(),
        _ => anyhow::bail!("checkout produced an unexpected action"),
    };
    store.send(action).await?;

    let state = store.snapshot().await;
    println!("  Cart now holds {} items", state.cart_item_count());
    if let Some(order) = state.find_order(&order_id) {
        println!("  Placed order:\n{}", serde_json::to_string_pretty(order)?);
    }

    println!("\n>>> Tracking order {order_id}");
    match state.find_order(&order_id) {
        Some(order) => println!("  Status: {}\n  Name: {}", order.status, order.name),
        None => println!("  No such order"),
    }
    println!(">>> Tracking order missing");
    if state.find_order(&OrderId::from("missing")).is_none() {
        println!("  No such order");
    }

    println!("\n>>> Reviewing {}", basket.name);
    for (name, stars, comment) in [
        ("Asha", 5, "Sturdy and pretty."),
        ("Ravi", 3, "Smaller than expected."),
        ("Meera", 4, "Good value."),
    ] {
        let rating = Rating::new(stars)?;
        let action = submit_review(
            basket_id.clone(),
            ReviewForm::new(name, rating, comment),
            store.environment(),
        );
        store.send(action).await?;
    }

    let state = store.snapshot().await;
    let (count, average) = state.review_summary(&basket_id);
    println!("  Reviews ({count}, ⭐ {})", format_rating(average));
    for review in state.reviews_for(&basket_id) {
        println!(
            "  {} – {}⭐ ({}): {}",
            review.name,
            review.rating.stars(),
            review.date,
            review.comment
        );
    }

    println!("\nComing Soon:");
    for entry in state.wishlist() {
        println!("  {} ({})", entry.name, entry.eta);
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
