use serde::{Deserialize, Serialize};

use crate::engine::record::SalesRecord;

/// Running per-group state. Created lazily on a group's first record, so a
/// live accumulator always has `count >= 1`. Measures are folded as-is; no
/// sign constraint is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupAccumulator {
    pub count: i64,
    pub total_amount: f64,
    pub total_quantity: i64,
}

impl GroupAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn fold(&mut self, record: &SalesRecord) {
        self.count += 1;
        self.total_amount += record.amount;
        self.total_quantity += record.quantity;
    }

    /// Combines partial state from another pass over a disjoint slice of the
    /// same batch. Averages are derived after merging, never merged
    /// themselves.
    #[inline]
    pub fn merge(&mut self, other: &GroupAccumulator) {
        self.count += other.count;
        self.total_amount += other.total_amount;
        self.total_quantity += other.total_quantity;
    }

    /// Derives the averages. Called exactly once per group, after all
    /// folding and merging is done.
    pub fn finalize(&self) -> GroupTotals {
        GroupTotals {
            total_sales: self.count,
            total_amount: self.total_amount,
            avg_amount: self.total_amount / self.count as f64,
            total_quantity: self.total_quantity,
            avg_quantity: self.total_quantity as f64 / self.count as f64,
        }
    }
}

/// Finalized aggregate for one group. Field names follow the reference SQL
/// projection (`COUNT(*) as total_sales, SUM(amount) as total_amount, ...`)
/// so engine output and reference rows compare structurally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupTotals {
    pub total_sales: i64,
    pub total_amount: f64,
    pub avg_amount: f64,
    pub total_quantity: i64,
    pub avg_quantity: f64,
}
