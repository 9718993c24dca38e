pub mod application {
    pub mod cart {
        pub mod add;
        pub mod remove;
        pub mod summarize;
        pub mod update_quantity;
    }
    pub mod catalog {
        pub mod clear_filters;
        pub mod set_brands_filter;
        pub mod set_category_filter;
        pub mod set_current_page;
        pub mod set_in_stock_filter;
        pub mod set_items_per_page;
        pub mod set_price_filter;
        pub mod set_rating_filter;
        pub mod set_search_term;
        pub mod toggle_favorite;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod set_editing;
        pub mod update;
    }
    pub mod projection {
        pub mod browse;
    }
}

pub mod domain {
    pub mod logger;
    pub mod cart {
        pub mod model;
        pub mod use_cases {
            pub mod add;
            pub mod remove;
            pub mod summarize;
            pub mod update_quantity;
        }
    }
    pub mod catalog {
        pub mod model;
        pub mod seed;
        pub mod value_objects;
        pub mod use_cases {
            pub mod clear_filters;
            pub mod set_brands_filter;
            pub mod set_category_filter;
            pub mod set_current_page;
            pub mod set_in_stock_filter;
            pub mod set_items_per_page;
            pub mod set_price_filter;
            pub mod set_rating_filter;
            pub mod set_search_term;
            pub mod toggle_favorite;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod set_editing;
            pub mod update;
        }
    }
    pub mod projection {
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod browse;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
