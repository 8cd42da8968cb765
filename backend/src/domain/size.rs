//! Frame sizes.

use super::ids::SizeId;
use super::product::BikeConfiguration;

/// Frame size label (for example `M` or `S`) and the configurations using it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Size {
    /// Size identifier.
    pub id: SizeId,
    /// Frame size label.
    pub size: String,
    /// Configurations offered in this size.
    pub configurations: Vec<BikeConfiguration>,
}

impl Size {
    /// Construct a size with no configurations attached.
    #[must_use]
    pub fn new(id: SizeId, size: impl Into<String>) -> Self {
        Self {
            id,
            size: size.into(),
            configurations: Vec::new(),
        }
    }
}
