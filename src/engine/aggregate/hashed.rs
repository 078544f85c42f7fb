use ahash::RandomState as AHashRandomState;
use std::collections::HashMap;
use tracing::debug;

use crate::engine::aggregate::{GroupAccumulator, GroupKey, GroupedTotals, GroupingEngine};
use crate::engine::errors::AggregateError;
use crate::engine::record::SalesRecord;

/// Map-based grouping. Keys through an associative table, so it carries the
/// per-record hash and bucket cost but makes no assumption about how many
/// distinct keys exist. Baseline against which the dense path is validated.
pub struct HashedEngine;

impl GroupingEngine for HashedEngine {
    fn aggregate(&self, records: &[SalesRecord]) -> Result<GroupedTotals, AggregateError> {
        let mut groups: HashMap<GroupKey, GroupAccumulator, AHashRandomState> =
            HashMap::with_hasher(AHashRandomState::new());

        for (index, record) in records.iter().enumerate() {
            let key = GroupKey::from_labels(&record.region, &record.product, index)?;
            groups.entry(key).or_default().fold(record);
        }

        debug!(
            target: "salesagg::aggregate",
            records = records.len(),
            groups = groups.len(),
            "Hashed grouping pass complete"
        );

        let mut totals = GroupedTotals::with_hasher(AHashRandomState::new());
        for (key, acc) in groups.iter() {
            totals.insert(*key, acc.finalize());
        }
        Ok(totals)
    }
}
