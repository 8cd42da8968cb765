//! In-memory catalogue mirroring the seed migration.
//!
//! Backs the fixture port implementations used when the server runs without
//! a database and by handler tests.

use crate::domain::{
    Like, LikeId, Order, OrderId, OrderLine, OrderLineId, Product, ProductId, Size, SizeId, User,
    UserId,
};

const DESCRIPTION: &str = "Bianchi Methanol FS es la joya de doble suspensión de Bianchi. \
Una btt que te permitirá subir como un cohete y bajar como un rayo, gracias a su geometría \
renovada y su carbono CV que absorve el 80% de las vibraciones.";

fn product(
    id: i64,
    name: &str,
    product_type: &str,
    price: i32,
    title: &str,
    likes: Vec<Like>,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        product_type: product_type.to_owned(),
        price,
        discount: 0,
        title: title.to_owned(),
        description: DESCRIPTION.to_owned(),
        categories: Default::default(),
        configurations: Vec::new(),
        likes,
    }
}

fn like(id: i64, user_id: i64, product_id: i64) -> Like {
    Like::new(LikeId::new(id), UserId::new(user_id), ProductId::new(product_id))
}

/// Seeded products ordered by id.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Methanol CV FS 9.3 XT",
            "road",
            4707,
            "ULTIMATE CROSS-COUNTRY RACE BIKE",
            vec![like(1, 1, 1)],
        ),
        product(
            2,
            "Methanol CV FS 9.2 XTR",
            "mtb",
            6195,
            "ULTIMATE CROSS-COUNTRY RACE BIKE",
            vec![like(2, 1, 2)],
        ),
        product(
            3,
            "Methanol CV FS 9.1 XX1",
            "mtb",
            9932,
            "ULTIMATE CROS-COUNTRY RACE BIKE",
            vec![like(3, 2, 3)],
        ),
    ]
}

/// Seeded users ordered by id.
pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: UserId::new(1),
            name: "Ada".to_owned(),
        },
        User {
            id: UserId::new(2),
            name: "Grace".to_owned(),
        },
    ]
}

/// Seeded sizes ordered by id.
pub fn sample_sizes() -> Vec<Size> {
    vec![
        Size::new(SizeId::new(1), "M"),
        Size::new(SizeId::new(2), "S"),
    ]
}

/// Seeded orders ordered by id.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new(1),
            user_id: UserId::new(1),
            address: "C/Muro n3".to_owned(),
            price: 563.25,
            lines: vec![OrderLine {
                id: OrderLineId::new(1),
                product_id: ProductId::new(3),
                quantity: 1,
            }],
        },
        Order {
            id: OrderId::new(2),
            user_id: UserId::new(2),
            address: "C/Pez n12".to_owned(),
            price: 4707.0,
            lines: vec![OrderLine {
                id: OrderLineId::new(2),
                product_id: ProductId::new(1),
                quantity: 1,
            }],
        },
    ]
}
