//! Product aggregate and the catalogue values hanging off it.

use std::collections::BTreeSet;

use super::ids::{CategoryId, ConfigurationId, ProductId, SizeId, UserId};
use super::like::Like;

/// Marketing category a product is filed under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category {
    /// Stable category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

/// Purchasable variant of a bike in a given frame size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BikeConfiguration {
    /// Configuration identifier.
    pub id: ConfigurationId,
    /// Product this configuration belongs to.
    pub product_id: ProductId,
    /// Frame size of this configuration.
    pub size_id: SizeId,
}

/// A bike offered in the catalogue.
///
/// `price` and `discount` are whole currency units as stored in the
/// `products` table. `product_type` holds the discipline label (for example
/// `road` or `mtb`) and is matched exactly by type filters.
///
/// Likes are ordered by identifier; categories are a set ordered by
/// identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Catalogue identifier.
    pub id: ProductId,
    /// Model name used by name search.
    pub name: String,
    /// Discipline label such as `road` or `mtb`.
    pub product_type: String,
    /// List price in whole currency units.
    pub price: i32,
    /// Discount in whole currency units.
    pub discount: i32,
    /// Marketing headline.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Categories ordered by identifier.
    pub categories: BTreeSet<Category>,
    /// Available size configurations.
    pub configurations: Vec<BikeConfiguration>,
    /// Likes ordered by identifier.
    pub likes: Vec<Like>,
}

impl Product {
    /// Whether `user` has liked this product.
    ///
    /// # Examples
    /// ```
    /// use bikes::domain::{Like, LikeId, Product, ProductId, UserId};
    ///
    /// let product = Product {
    ///     id: ProductId::new(1),
    ///     name: "Methanol CV FS 9.3 XT".to_owned(),
    ///     product_type: "road".to_owned(),
    ///     price: 4707,
    ///     discount: 0,
    ///     title: "ULTIMATE CROSS-COUNTRY RACE BIKE".to_owned(),
    ///     description: String::new(),
    ///     categories: Default::default(),
    ///     configurations: Vec::new(),
    ///     likes: vec![Like::new(LikeId::new(1), UserId::new(1), ProductId::new(1))],
    /// };
    /// assert!(product.is_liked_by(UserId::new(1)));
    /// assert!(!product.is_liked_by(UserId::new(2)));
    /// ```
    #[must_use]
    pub fn is_liked_by(&self, user: UserId) -> bool {
        self.likes.iter().any(|like| like.user_id == user)
    }
}
