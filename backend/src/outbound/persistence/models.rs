//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Each row converts into its domain value
//! through a pure `into_domain` function; aggregate rows take their already
//! loaded children as arguments.

use diesel::prelude::*;

use crate::domain::{
    BikeConfiguration, Category, CategoryId, ConfigurationId, Like, LikeId, Order, OrderId,
    OrderLine, OrderLineId, Product, ProductId, Size, SizeId, User, UserId,
};

use super::schema::{
    bike_configurations, categories, likes, order_lines, orders, product_categories, products,
    sizes, users,
};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
}

impl UserRow {
    pub fn into_domain(self) -> User {
        User {
            id: UserId::new(self.id),
            name: self.name,
        }
    }
}

// ---------------------------------------------------------------------------
// Products and their children
// ---------------------------------------------------------------------------

/// Row struct for reading from the products table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRow {
    pub id: i64,
    pub name: String,
    pub product_type: String,
    pub price: i32,
    pub discount: i32,
    pub title: String,
    pub description: String,
}

impl ProductRow {
    /// Assemble a product from its row and child rows.
    pub fn into_domain(
        self,
        categories: Vec<CategoryRow>,
        configurations: Vec<BikeConfigurationRow>,
        likes: Vec<LikeRow>,
    ) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            product_type: self.product_type,
            price: self.price,
            discount: self.discount,
            title: self.title,
            description: self.description,
            categories: categories.into_iter().map(CategoryRow::into_domain).collect(),
            configurations: configurations
                .into_iter()
                .map(BikeConfigurationRow::into_domain)
                .collect(),
            likes: likes.into_iter().map(LikeRow::into_domain).collect(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i64,
    pub name: String,
}

impl CategoryRow {
    pub fn into_domain(self) -> Category {
        Category {
            id: CategoryId::new(self.id),
            name: self.name,
        }
    }
}

/// Row struct for the product/category link table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = product_categories)]
#[diesel(primary_key(product_id, category_id))]
#[diesel(belongs_to(ProductRow, foreign_key = product_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductCategoryRow {
    pub product_id: i64,
    pub category_id: i64,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = bike_configurations)]
#[diesel(belongs_to(ProductRow, foreign_key = product_id))]
#[diesel(belongs_to(SizeRow, foreign_key = size_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BikeConfigurationRow {
    pub id: i64,
    pub product_id: i64,
    pub size_id: i64,
}

impl BikeConfigurationRow {
    pub fn into_domain(self) -> BikeConfiguration {
        BikeConfiguration {
            id: ConfigurationId::new(self.id),
            product_id: ProductId::new(self.product_id),
            size_id: SizeId::new(self.size_id),
        }
    }
}

// ---------------------------------------------------------------------------
// Likes
// ---------------------------------------------------------------------------

/// Row struct for reading from the likes table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = likes)]
#[diesel(belongs_to(ProductRow, foreign_key = product_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LikeRow {
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
}

impl LikeRow {
    pub fn into_domain(self) -> Like {
        Like::new(
            LikeId::new(self.id),
            UserId::new(self.user_id),
            ProductId::new(self.product_id),
        )
    }
}

/// Insertable struct for creating like records.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = likes)]
pub(crate) struct NewLikeRow {
    pub product_id: i64,
    pub user_id: i64,
}

// ---------------------------------------------------------------------------
// Sizes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = sizes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SizeRow {
    pub id: i64,
    pub size: String,
}

impl SizeRow {
    pub fn into_domain(self, configurations: Vec<BikeConfigurationRow>) -> Size {
        Size {
            id: SizeId::new(self.id),
            size: self.size,
            configurations: configurations
                .into_iter()
                .map(BikeConfigurationRow::into_domain)
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// Row struct for reading from the orders table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderRow {
    pub id: i64,
    pub user_id: i64,
    pub address: String,
    pub price: f32,
}

impl OrderRow {
    pub fn into_domain(self, lines: Vec<OrderLineRow>) -> Order {
        Order {
            id: OrderId::new(self.id),
            user_id: UserId::new(self.user_id),
            address: self.address,
            price: self.price,
            lines: lines.into_iter().map(OrderLineRow::into_domain).collect(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_lines)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderLineRow {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

impl OrderLineRow {
    pub fn into_domain(self) -> OrderLine {
        OrderLine {
            id: OrderLineId::new(self.id),
            product_id: ProductId::new(self.product_id),
            quantity: self.quantity,
        }
    }
}
