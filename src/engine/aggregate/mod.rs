pub mod accumulator;
pub mod dense;
pub mod group_key;
pub mod hashed;
pub mod partitioned;
pub mod top;

pub use accumulator::{GroupAccumulator, GroupTotals};
pub use dense::DenseEngine;
pub use group_key::GroupKey;
pub use hashed::HashedEngine;
pub use partitioned::{aggregate_partitioned, aggregate_partitioned_default};
pub use top::select_top;

use ahash::RandomState as AHashRandomState;
use std::collections::HashMap;

use crate::engine::errors::AggregateError;
use crate::engine::record::SalesRecord;

/// Finalized per-group output, shared by every grouping path.
pub type GroupedTotals = HashMap<GroupKey, GroupTotals, AHashRandomState>;

/// Seam between the grouping strategies. Each call owns its group table for
/// the duration of the pass; engines hold no state across calls.
pub trait GroupingEngine {
    fn aggregate(&self, records: &[SalesRecord]) -> Result<GroupedTotals, AggregateError>;
}
