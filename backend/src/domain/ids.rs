//! Typed identifiers for catalogue aggregates.
//!
//! Every table uses a `BIGSERIAL` primary key. Wrapping the raw `i64` keeps a
//! product id from being passed where a user id is expected.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Return the raw database identifier.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Identifier of a row in `products`.
    ProductId
}

define_id! {
    /// Identifier of a row in `users`.
    UserId
}

define_id! {
    /// Identifier of a row in `likes`.
    LikeId
}

define_id! {
    /// Identifier of a row in `orders`.
    OrderId
}

define_id! {
    /// Identifier of a row in `order_lines`.
    OrderLineId
}

define_id! {
    /// Identifier of a row in `sizes`.
    SizeId
}

define_id! {
    /// Identifier of a row in `categories`.
    CategoryId
}

define_id! {
    /// Identifier of a row in `bike_configurations`.
    ConfigurationId
}
