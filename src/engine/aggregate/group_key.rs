use serde::{Deserialize, Serialize};

use crate::engine::dimension::{Product, Region, slot_index};
use crate::engine::errors::AggregateError;

/// Composite grouping key. At most `Region::COUNT * Product::COUNT` distinct
/// keys exist, which is what the dense path exploits. Ordering follows the
/// dense slot layout (region first, then product) and doubles as the
/// canonical tie-break order for the top-group scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub region: Region,
    pub product: Product,
}

impl GroupKey {
    pub fn new(region: Region, product: Product) -> Self {
        Self { region, product }
    }

    /// Validates a record's dimension labels. `index` is the record's
    /// position in the batch, reported on failure.
    pub fn from_labels(region: &str, product: &str, index: usize) -> Result<Self, AggregateError> {
        let region = Region::resolve(region, index)?;
        let product = Product::resolve(product, index)?;
        Ok(Self { region, product })
    }

    #[inline]
    pub fn slot(&self) -> usize {
        slot_index(self.region, self.product)
    }

    /// Inverse of `slot`, used by the dense path to recover keys at
    /// finalization.
    pub fn from_slot(slot: usize) -> Self {
        Self {
            region: Region::ALL[slot / Product::COUNT],
            product: Product::ALL[slot % Product::COUNT],
        }
    }

    pub fn labels(&self) -> (&'static str, &'static str) {
        (self.region.as_label(), self.product.as_label())
    }
}
