use std::collections::BTreeSet;

use business::domain::catalog::model::CatalogState;
use business::domain::catalog::seed::seed_products;
use business::domain::catalog::value_objects::{CategoryFilter, PriceRange};
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::projection::model::{CatalogTab, CatalogView};
use business::domain::shared::value_objects::ProductId;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Session;

impl Session {
    /// Drives one scripted browse/filter/cart session against the engine,
    /// the way the catalog UI would between renders.
    pub fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let mut state = CatalogState::new(seed_products()?);
        let tab = config.catalog.initial_tab;
        container
            .set_items_per_page
            .execute(&mut state, config.catalog.items_per_page);

        println!("Browsing the full catalog");
        print_view(&container.browse.execute(&state, tab));

        container.set_current_page.execute(&mut state, 2);
        println!("Second page");
        print_view(&container.browse.execute(&state, tab));

        println!("Searching for \"apple\"");
        container
            .set_search_term
            .execute(&mut state, "apple".to_string());
        print_view(&container.browse.execute(&state, tab));

        println!("Filtering audio gear under $400");
        container.set_search_term.execute(&mut state, String::new());
        container
            .set_category_filter
            .execute(&mut state, CategoryFilter::from("audio"));
        container
            .set_price_filter
            .execute(&mut state, PriceRange::new(0.0, 400.0));
        print_view(&container.browse.execute(&state, tab));

        println!("Filtering by brand");
        container.clear_filters.execute(&mut state);
        container.set_brands_filter.execute(
            &mut state,
            BTreeSet::from(["Apple".to_string(), "Sony".to_string()]),
        );
        print_view(&container.browse.execute(&state, tab));
        container.clear_filters.execute(&mut state);

        println!("Favoriting the headphones and the console");
        container
            .toggle_favorite
            .execute(&mut state, ProductId::new(4));
        container
            .toggle_favorite
            .execute(&mut state, ProductId::new(12));
        print_view(&container.browse.execute(&state, CatalogTab::Favorites));

        println!("Filling the cart");
        let headphones = container
            .get_product_by_id
            .execute(&state, ProductId::new(4))?;
        let console = container
            .get_product_by_id
            .execute(&state, ProductId::new(12))?;
        container.add_to_cart.execute(&mut state, headphones);
        container.add_to_cart.execute(&mut state, console.clone());
        container.add_to_cart.execute(&mut state, console);
        container
            .update_cart_quantity
            .execute(&mut state, ProductId::new(4), 2);
        print_cart(&state);

        println!("Adding a product of our own");
        let created = container.create_product.execute(
            &mut state,
            CreateProductParams {
                title: "Steam Deck OLED".to_string(),
                description: "Handheld gaming PC with an OLED display.".to_string(),
                price: 549.0,
                brand: "Valve".to_string(),
                thumbnail: "https://i.dummyjson.com/data/products/17/thumbnail.jpg".to_string(),
                rating: 4.6,
                discount_percentage: 0.0,
                category: "gaming".to_string(),
                stock: 12,
            },
        )?;
        println!("  created {} with id {}", created.title, created.id);

        println!("Editing it right away");
        let mut edited = created.clone();
        container
            .set_editing_product
            .execute(&mut state, Some(created));
        edited.price = 499.0;
        container.update_product.execute(&mut state, edited);
        container.set_editing_product.execute(&mut state, None);

        println!("Deleting the PlayStation, cart and favorites follow");
        container
            .delete_product
            .execute(&mut state, ProductId::new(12));
        print_cart(&state);
        print_view(&container.browse.execute(&state, CatalogTab::Favorites));

        Ok(())
    }
}

fn print_view(view: &CatalogView) {
    println!(
        "  page {}/{} - {} of {} products ({} favorites, {} categories, {} brands, top price ${})",
        view.page,
        view.total_pages,
        view.items.len(),
        view.total_filtered,
        view.total_favorites,
        view.category_count,
        view.brand_count,
        view.max_price
    );
    for product in &view.items {
        println!(
            "    #{} {} - ${} [{}] {}",
            product.id, product.title, product.price, product.category, product.brand
        );
    }
}

fn print_cart(state: &CatalogState) {
    let summary = state.cart_summary();
    for line in state.cart() {
        println!(
            "    {} x{} = ${:.2}",
            line.product.title,
            line.quantity,
            line.line_total()
        );
    }
    println!(
        "  cart: {} items, ${:.2} total",
        summary.total_items, summary.total_price
    );
}
