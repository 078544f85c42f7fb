use rayon::prelude::*;
use tracing::debug;

use crate::engine::aggregate::dense::{SLOT_COUNT, finalize_slots};
use crate::engine::aggregate::{GroupAccumulator, GroupKey, GroupedTotals};
use crate::engine::errors::AggregateError;
use crate::engine::record::SalesRecord;
use crate::shared::config::CONFIG;

/// Partial aggregation over contiguous partitions, then a merge. Each
/// partition folds into its own dense arena; merged counts and sums are
/// finalized once at the end, so averages are derived from the combined
/// state rather than averaged across partitions. Record indices reported in
/// errors stay global to the input batch.
pub fn aggregate_partitioned(
    records: &[SalesRecord],
    partitions: usize,
) -> Result<GroupedTotals, AggregateError> {
    let partitions = partitions.max(1);
    let chunk_len = records.len().div_ceil(partitions).max(1);

    let merged = records
        .par_chunks(chunk_len)
        .enumerate()
        .map(|(chunk, slice)| fold_partition(slice, chunk * chunk_len))
        .try_reduce(|| [None; SLOT_COUNT], merge_arenas)?;

    debug!(
        target: "salesagg::aggregate",
        records = records.len(),
        partitions,
        groups = merged.iter().filter(|s| s.is_some()).count(),
        "Partitioned grouping pass complete"
    );

    Ok(finalize_slots(&merged))
}

/// Partition count from the `[engine]` settings section.
pub fn aggregate_partitioned_default(
    records: &[SalesRecord],
) -> Result<GroupedTotals, AggregateError> {
    aggregate_partitioned(records, CONFIG.engine.partition_count)
}

fn fold_partition(
    records: &[SalesRecord],
    base_index: usize,
) -> Result<[Option<GroupAccumulator>; SLOT_COUNT], AggregateError> {
    let mut slots: [Option<GroupAccumulator>; SLOT_COUNT] = [None; SLOT_COUNT];
    for (offset, record) in records.iter().enumerate() {
        let key = GroupKey::from_labels(&record.region, &record.product, base_index + offset)?;
        slots[key.slot()]
            .get_or_insert_with(GroupAccumulator::new)
            .fold(record);
    }
    Ok(slots)
}

fn merge_arenas(
    mut left: [Option<GroupAccumulator>; SLOT_COUNT],
    right: [Option<GroupAccumulator>; SLOT_COUNT],
) -> Result<[Option<GroupAccumulator>; SLOT_COUNT], AggregateError> {
    for (slot, partial) in right.into_iter().enumerate() {
        if let Some(partial) = partial {
            match left[slot].as_mut() {
                Some(acc) => acc.merge(&partial),
                None => left[slot] = Some(partial),
            }
        }
    }
    Ok(left)
}
