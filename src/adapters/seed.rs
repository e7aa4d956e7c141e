//! # Seed Data
//!
//! Demo recipes and catalog products for the in-memory collaborators.

use crate::model::{Product, Recipe, RecipeItem, SupplierType};
use crate::units::{ProductUnit, Unit};

/// Two demo recipes for store-1
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("recipe-1", "store-1", "김치찌개", "한식", 4)
            .with_item(
                RecipeItem::new("돼지고기", 200.0, Unit::Grams)
                    .with_alt_names(["돼지목살", "목살", "삼겹살"]),
            )
            .with_item(
                RecipeItem::new("김치", 300.0, Unit::Grams).with_alt_names(["신김치", "묵은지"]),
            )
            .with_item(
                RecipeItem::new("두부", 1.0, Unit::Piece)
                    .with_alt_names(["연두부", "부드러운두부"]),
            )
            .with_item(RecipeItem::new("대파", 2.0, Unit::Piece).with_alt_names(["파"]))
            .with_item(
                RecipeItem::new("고춧가루", 2.0, Unit::Tablespoon).with_alt_names(["고추가루"]),
            )
            .with_item(RecipeItem::new("된장", 1.0, Unit::Tablespoon)),
        Recipe::new("recipe-2", "store-1", "파스타", "양식", 2)
            .with_item(
                RecipeItem::new("스파게티면", 200.0, Unit::Grams)
                    .with_alt_names(["파스타면", "면"]),
            )
            .with_item(
                RecipeItem::new("토마토소스", 200.0, Unit::Milliliters)
                    .with_alt_names(["마리나라소스"]),
            )
            .with_item(
                RecipeItem::new("올리브오일", 2.0, Unit::Tablespoon)
                    .with_alt_names(["엑스트라버진오일"]),
            )
            .with_item(RecipeItem::new("마늘", 3.0, Unit::Piece).with_alt_names(["다진마늘"]))
            .with_item(RecipeItem::new("파마산치즈", 50.0, Unit::Grams).with_alt_names(["치즈"])),
    ]
}

/// Thirteen demo catalog products across six ingredient groups
pub fn seed_products() -> Vec<Product> {
    fn product(
        id: &str,
        supplier_type: SupplierType,
        brand: &str,
        spec: &str,
        unit: ProductUnit,
        pack_size: f64,
        moq: f64,
        price: i64,
        lead_time_days: u32,
        category: &str,
    ) -> Product {
        Product {
            id: id.to_string(),
            supplier_type,
            brand: brand.to_string(),
            spec: spec.to_string(),
            unit,
            pack_size,
            moq,
            price,
            lead_time_days,
            category: Some(category.to_string()),
        }
    }

    vec![
        // 돼지고기
        product("prod-1", SupplierType::Contract, "농협", "목살", ProductUnit::Grams, 1000.0, 500.0, 12000, 1, "육류"),
        product("prod-2", SupplierType::Wholesale, "CJ", "목살", ProductUnit::Grams, 500.0, 200.0, 7000, 2, "육류"),
        product("prod-3", SupplierType::Retail, "이마트", "목살", ProductUnit::Grams, 300.0, 100.0, 4500, 0, "육류"),
        // 김치
        product("prod-4", SupplierType::Contract, "종가집", "포기김치", ProductUnit::Grams, 2000.0, 1000.0, 15000, 1, "김치"),
        product("prod-5", SupplierType::Wholesale, "풀무원", "포기김치", ProductUnit::Grams, 1000.0, 500.0, 8000, 2, "김치"),
        // 두부
        product("prod-6", SupplierType::Wholesale, "대림", "연두부", ProductUnit::Piece, 20.0, 10.0, 15000, 1, "두부"),
        product("prod-7", SupplierType::Retail, "이마트", "연두부", ProductUnit::Piece, 4.0, 1.0, 3000, 0, "두부"),
        // 대파
        product("prod-8", SupplierType::Wholesale, "농산물직거래", "대파", ProductUnit::Piece, 50.0, 20.0, 25000, 1, "채소"),
        product("prod-9", SupplierType::Retail, "이마트", "대파", ProductUnit::Piece, 5.0, 1.0, 2500, 0, "채소"),
        // 고춧가루
        product("prod-10", SupplierType::Wholesale, "청정원", "고춧가루", ProductUnit::Grams, 1000.0, 500.0, 8000, 2, "조미료"),
        product("prod-11", SupplierType::Retail, "청정원", "고춧가루", ProductUnit::Grams, 200.0, 100.0, 2000, 0, "조미료"),
        // 된장
        product("prod-12", SupplierType::Wholesale, "청정원", "된장", ProductUnit::Grams, 2000.0, 1000.0, 12000, 2, "조미료"),
        product("prod-13", SupplierType::Retail, "청정원", "된장", ProductUnit::Grams, 500.0, 200.0, 3500, 0, "조미료"),
    ]
}
