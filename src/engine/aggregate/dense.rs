use ahash::RandomState as AHashRandomState;
use tracing::debug;

use crate::engine::aggregate::{GroupAccumulator, GroupKey, GroupedTotals, GroupingEngine};
use crate::engine::dimension::{Product, Region};
use crate::engine::errors::AggregateError;
use crate::engine::record::SalesRecord;

pub const SLOT_COUNT: usize = Region::COUNT * Product::COUNT;

/// Flat-array grouping. The key space is fully enumerable, so groups live in
/// a fixed arena addressed by `GroupKey::slot` and lookup is a single index
/// instead of a hash. Empty slots stay `None`; a slot is initialized the
/// first time its combination is observed, so a present accumulator is never
/// confused with a legitimate all-zero one.
pub struct DenseEngine;

impl GroupingEngine for DenseEngine {
    fn aggregate(&self, records: &[SalesRecord]) -> Result<GroupedTotals, AggregateError> {
        let mut slots: [Option<GroupAccumulator>; SLOT_COUNT] = [None; SLOT_COUNT];

        for (index, record) in records.iter().enumerate() {
            let key = GroupKey::from_labels(&record.region, &record.product, index)?;
            slots[key.slot()]
                .get_or_insert_with(GroupAccumulator::new)
                .fold(record);
        }

        debug!(
            target: "salesagg::aggregate",
            records = records.len(),
            groups = slots.iter().filter(|s| s.is_some()).count(),
            "Dense grouping pass complete"
        );

        Ok(finalize_slots(&slots))
    }
}

/// Finalization over the arena, ascending slot order. Shared with the
/// partitioned path, which merges arenas before finalizing.
pub(crate) fn finalize_slots(slots: &[Option<GroupAccumulator>; SLOT_COUNT]) -> GroupedTotals {
    let mut totals = GroupedTotals::with_hasher(AHashRandomState::new());
    for (slot, acc) in slots.iter().enumerate() {
        if let Some(acc) = acc {
            totals.insert(GroupKey::from_slot(slot), acc.finalize());
        }
    }
    totals
}
