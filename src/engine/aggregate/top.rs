use crate::engine::aggregate::{GroupKey, GroupTotals, GroupedTotals};
use crate::engine::errors::AggregateError;

/// Returns the group with the strictly greatest `total_amount`. On an exact
/// tie the smaller key (ascending region then product index) wins, so the
/// winner does not depend on which grouping path produced the table or on
/// map iteration order. Zero groups has no defined winner and is an error.
pub fn select_top(groups: &GroupedTotals) -> Result<(GroupKey, GroupTotals), AggregateError> {
    let mut best: Option<(GroupKey, GroupTotals)> = None;

    for (key, totals) in groups.iter() {
        match &best {
            None => best = Some((*key, *totals)),
            Some((best_key, best_totals)) => {
                if totals.total_amount > best_totals.total_amount
                    || (totals.total_amount == best_totals.total_amount && key < best_key)
                {
                    best = Some((*key, *totals));
                }
            }
        }
    }

    best.ok_or(AggregateError::NoGroups)
}
