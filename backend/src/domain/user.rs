//! Shop customers.

use super::ids::UserId;

/// Registered customer. Likes and orders reference users by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
}
