//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// Shop customers.
    users (id) {
        id -> Int8,
        name -> Varchar,
    }
}

diesel::table! {
    /// Bikes offered in the catalogue.
    products (id) {
        id -> Int8,
        name -> Varchar,
        /// Discipline label such as `road` or `mtb`.
        #[sql_name = "type"]
        product_type -> Varchar,
        price -> Int4,
        discount -> Int4,
        title -> Varchar,
        description -> Text,
    }
}

diesel::table! {
    categories (id) {
        id -> Int8,
        name -> Varchar,
    }
}

diesel::table! {
    /// Many-to-many link between products and categories.
    product_categories (product_id, category_id) {
        product_id -> Int8,
        category_id -> Int8,
    }
}

diesel::table! {
    /// Frame sizes; `size` is unique.
    sizes (id) {
        id -> Int8,
        size -> Varchar,
    }
}

diesel::table! {
    /// A product offered in a given frame size.
    bike_configurations (id) {
        id -> Int8,
        product_id -> Int8,
        size_id -> Int8,
    }
}

diesel::table! {
    /// Favourites. `(product_id, user_id)` is unique.
    likes (id) {
        id -> Int8,
        product_id -> Int8,
        user_id -> Int8,
    }
}

diesel::table! {
    orders (id) {
        id -> Int8,
        user_id -> Int8,
        address -> Varchar,
        price -> Float4,
    }
}

diesel::table! {
    /// Line items; `quantity` is constrained to be positive.
    order_lines (id) {
        id -> Int8,
        order_id -> Int8,
        product_id -> Int8,
        quantity -> Int4,
    }
}

diesel::joinable!(bike_configurations -> products (product_id));
diesel::joinable!(bike_configurations -> sizes (size_id));
diesel::joinable!(likes -> products (product_id));
diesel::joinable!(likes -> users (user_id));
diesel::joinable!(order_lines -> orders (order_id));
diesel::joinable!(order_lines -> products (product_id));
diesel::joinable!(orders -> users (user_id));
diesel::joinable!(product_categories -> categories (category_id));
diesel::joinable!(product_categories -> products (product_id));

diesel::allow_tables_to_appear_in_same_query!(
    bike_configurations,
    categories,
    likes,
    order_lines,
    orders,
    product_categories,
    products,
    sizes,
    users,
);
