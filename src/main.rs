use std::env;

use anyhow::{Context, Result};
use log::info;

use prepcart::adapters::{MockCatalog, MockOrders, MockRecipes, OrderStore, RecipeStore};
use prepcart::cart::{format_krw, Cart};
use prepcart::config::{PricingConfig, RetryConfig, SimulationConfig};
use prepcart::pipeline::{add_to_cart, resolve_recipe};
use prepcart::retry::with_retry;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let json_output = args.iter().any(|arg| arg == "--json");
    let mut positional = args.iter().filter(|arg| !arg.starts_with("--"));
    let recipe_id = positional
        .next()
        .cloned()
        .unwrap_or_else(|| "recipe-1".to_string());
    let servings: u32 = match positional.next() {
        Some(raw) => raw.parse().context("servings must be a positive integer")?,
        None => 8,
    };

    info!("Resolving {recipe_id} for {servings} servings");

    let sim = SimulationConfig::default();
    let retry = RetryConfig::default();
    let recipes = MockRecipes::with_seed(sim);
    let catalog = MockCatalog::with_seed(sim);
    let orders = MockOrders::new(sim);

    let recipe = with_retry(&retry, || recipes.get_recipe(&recipe_id))
        .await?
        .with_context(|| format!("recipe {recipe_id} not found"))?;
    println!(
        "{} ({}) — base {} servings, ordering for {}",
        recipe.name, recipe.category, recipe.base_servings, servings
    );

    let results = with_retry(&retry, || {
        resolve_recipe(&recipes, &catalog, &recipe_id, servings)
    })
    .await?;

    println!("\nIngredients:");
    for result in &results {
        match result.selected_product() {
            Some(product) => {
                print!(
                    "  {} -> {} [{}] x{:.0}{}",
                    result.ingredient_name,
                    product.display_name(),
                    product.supplier_type,
                    result.effective_qty,
                    product.unit,
                );
            }
            None => print!("  {} -> (no product)", result.ingredient_name),
        }
        match &result.warning {
            Some(warning) => println!("  ({warning})"),
            None => println!(),
        }
    }

    let mut cart = Cart::new(PricingConfig::from_env());
    add_to_cart(&mut cart, &results)?;

    if json_output {
        println!("\n{}", serde_json::to_string_pretty(&cart)?);
    } else {
        println!("\nCart:");
        for item in &cart.items {
            println!(
                "  {} — {} pack(s) @ {} = {}",
                item.display_name,
                item.quantity_packs,
                format_krw(item.unit_price),
                format_krw(item.subtotal)
            );
        }
        println!("  Subtotal: {}", format_krw(cart.subtotal));
        println!("  Tax:      {}", format_krw(cart.tax));
        println!("  Shipping: {}", format_krw(cart.shipping_fee));
        println!("  Total:    {}", format_krw(cart.total));
    }

    let payment = with_retry(&retry, || orders.process_payment(&cart)).await?;
    if !payment.success {
        println!(
            "\nPayment failed: {}",
            payment.error.unwrap_or_else(|| "unknown reason".to_string())
        );
        return Ok(());
    }

    let order = with_retry(&retry, || orders.create_order(cart.clone())).await?;
    println!(
        "\nOrder {} placed ({}), transaction {}",
        order.id,
        order.invoice_no,
        payment.transaction_id.unwrap_or_default()
    );

    Ok(())
}
