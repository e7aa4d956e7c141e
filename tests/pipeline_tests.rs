#[cfg(test)]
mod tests {
    use prepcart::adapters::seed::seed_products;
    use prepcart::adapters::{MockCatalog, MockOrders, MockRecipes, OrderStore, RecipeStore};
    use prepcart::cart::{aggregate, Cart, CartItem};
    use prepcart::config::{PricingConfig, SimulationConfig};
    use prepcart::model::ResolutionWarning;
    use prepcart::pipeline::{add_to_cart, resolve_ingredients, resolve_recipe};
    use prepcart::quantity::resolve;
    use prepcart::scaling::scale;

    fn recipes() -> MockRecipes {
        MockRecipes::with_seed(SimulationConfig::instant())
    }

    fn catalog() -> MockCatalog {
        MockCatalog::with_seed(SimulationConfig::instant())
    }

    #[tokio::test]
    async fn test_kimchi_stew_for_eight_servings() {
        // base 4 servings, 돼지고기 200g -> 400g at 8 servings
        let recipe = recipes().get_recipe("recipe-1").await.unwrap().unwrap();
        let scaled = scale(&recipe, 8).unwrap();
        assert_eq!(scaled[0].name, "돼지고기");
        assert_eq!(scaled[0].scaled_qty, 400.0);

        // contract 목살 (pack 1000 / MOQ 500) outranks the retail one
        let results = resolve_ingredients(&scaled, &seed_products()).unwrap();
        let pork = &results[0];
        assert_eq!(pork.candidates[0].id, "prod-1");
        assert_eq!(pork.selected_product_id.as_deref(), Some("prod-1"));

        // resolve(400, 500, 1000): one pack of 1000g, MOQ warning
        assert_eq!(pork.effective_qty, 1000.0);
        assert_eq!(
            pork.warning,
            Some(ResolutionWarning::MoqAdjusted { moq: 500.0 })
        );
        let resolution = resolve(400.0, 500.0, 1000.0).unwrap();
        assert_eq!(resolution.quantity_packs, 1);
        assert_eq!(resolution.effective_qty, pork.effective_qty);
    }

    #[tokio::test]
    async fn test_full_flow_from_recipe_to_paid_order() {
        let recipes = recipes();
        let catalog = catalog();
        let orders = MockOrders::new(SimulationConfig::instant());

        let results = resolve_recipe(&recipes, &catalog, "recipe-1", 8).await.unwrap();
        assert_eq!(results.len(), 6);

        let mut cart = Cart::default();
        add_to_cart(&mut cart, &results).unwrap();
        assert!(!cart.is_empty());
        assert_eq!(cart.total, cart.subtotal + cart.tax + cart.shipping_fee);
        assert_eq!(cart.tax, (cart.subtotal as f64 * 0.1).round() as i64);

        let payment = orders.process_payment(&cart).await.unwrap();
        assert!(payment.success);

        let order = orders.create_order(cart.clone()).await.unwrap();
        assert_eq!(order.cart_snapshot.total, cart.total);
    }

    #[tokio::test]
    async fn test_unmatched_ingredient_survives_alongside_matched() {
        // 파스타 has ingredients with no catalog coverage (스파게티면 etc.)
        let recipes = recipes();
        let catalog = catalog();

        let results = resolve_recipe(&recipes, &catalog, "recipe-2", 4).await.unwrap();

        let noodles = results
            .iter()
            .find(|r| r.ingredient_name == "스파게티면")
            .unwrap();
        assert!(noodles.candidates.is_empty());
        assert_eq!(noodles.warning, Some(ResolutionWarning::NoMatch));
        // fallback: scaled quantity (200g * 4/2)
        assert_eq!(noodles.effective_qty, 400.0);
    }

    #[test]
    fn test_repeat_additions_merge_in_cart() {
        let products = seed_products();
        let pork = products.iter().find(|p| p.id == "prod-2").unwrap();

        let mut cart = Cart::default();
        cart.add_item(CartItem::from_product(pork, 2));
        cart.add_item(CartItem::from_product(pork, 3));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity_packs, 5);
        assert_eq!(cart.items[0].subtotal, 5 * pork.price);
        assert_eq!(cart.subtotal, cart.items[0].subtotal);
    }

    #[test]
    fn test_aggregate_matches_cart_bookkeeping() {
        let products = seed_products();
        let mut cart = Cart::default();
        cart.add_item(CartItem::from_product(&products[0], 1));
        cart.add_item(CartItem::from_product(&products[3], 2));

        let totals = aggregate(&cart.items, &PricingConfig::default());
        assert_eq!(totals, cart.totals());
    }

    #[tokio::test]
    async fn test_scaling_twice_gives_same_results() {
        let recipe = recipes().get_recipe("recipe-1").await.unwrap().unwrap();

        let once = scale(&recipe, 10).unwrap();
        let twice = scale(&recipe, 10).unwrap();
        assert_eq!(once, twice);

        // and changing servings replaces rather than accumulates
        let back = scale(&recipe, 4).unwrap();
        assert_eq!(back.len(), recipe.items.len());
        assert_eq!(back[0].scaled_qty, recipe.items[0].base_qty);
    }
}
