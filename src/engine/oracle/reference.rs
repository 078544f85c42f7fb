use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::aggregate::{GroupKey, GroupTotals, GroupedTotals};
use crate::engine::errors::OracleError;

/// Relative tolerance for float comparisons against a reference produced by
/// an independent accumulation order.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// One row of an independently computed aggregate for the same dataset,
/// shaped like the reference SQL projection:
///
/// ```sql
/// SELECT region, product,
///        COUNT(*)      AS total_sales,
///        SUM(amount)   AS total_amount,
///        AVG(amount)   AS avg_amount,
///        SUM(quantity) AS total_quantity,
///        AVG(quantity) AS avg_quantity
/// FROM sales GROUP BY region, product
/// ```
///
/// The engines never read these; they exist so a test or benchmark harness
/// can cross-validate engine output against an external system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    pub region: String,
    pub product: String,
    pub total_sales: i64,
    pub total_amount: f64,
    pub avg_amount: f64,
    pub total_quantity: i64,
    pub avg_quantity: f64,
}

impl ReferenceRow {
    pub fn from_json(json: &str) -> Result<Vec<ReferenceRow>, OracleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Structural comparison: integer fields must match exactly, float
    /// fields within relative `tolerance`.
    pub fn matches(&self, totals: &GroupTotals, tolerance: f64) -> bool {
        self.total_sales == totals.total_sales
            && self.total_quantity == totals.total_quantity
            && approx_eq(self.total_amount, totals.total_amount, tolerance)
            && approx_eq(self.avg_amount, totals.avg_amount, tolerance)
            && approx_eq(self.avg_quantity, totals.avg_quantity, tolerance)
    }
}

/// Checks every reference row against the engine's group table. The first
/// disagreement is reported with the field name and both values.
pub fn verify(
    groups: &GroupedTotals,
    rows: &[ReferenceRow],
    tolerance: f64,
) -> Result<(), OracleError> {
    for row in rows {
        let key = match GroupKey::from_labels(&row.region, &row.product, 0) {
            Ok(key) => key,
            Err(_) => {
                return Err(OracleError::MissingGroup {
                    region: row.region.clone(),
                    product: row.product.clone(),
                });
            }
        };
        let totals = groups.get(&key).ok_or_else(|| OracleError::MissingGroup {
            region: row.region.clone(),
            product: row.product.clone(),
        })?;

        check_field(row, "total_sales", totals.total_sales as f64, row.total_sales as f64, 0.0)?;
        check_field(
            row,
            "total_quantity",
            totals.total_quantity as f64,
            row.total_quantity as f64,
            0.0,
        )?;
        check_field(row, "total_amount", totals.total_amount, row.total_amount, tolerance)?;
        check_field(row, "avg_amount", totals.avg_amount, row.avg_amount, tolerance)?;
        check_field(row, "avg_quantity", totals.avg_quantity, row.avg_quantity, tolerance)?;
    }

    debug!(
        target: "salesagg::oracle",
        rows = rows.len(),
        "Reference verification passed"
    );

    Ok(())
}

fn check_field(
    row: &ReferenceRow,
    field: &'static str,
    actual: f64,
    expected: f64,
    tolerance: f64,
) -> Result<(), OracleError> {
    if approx_eq(actual, expected, tolerance) {
        Ok(())
    } else {
        Err(OracleError::Mismatch {
            region: row.region.clone(),
            product: row.product.clone(),
            field,
            actual,
            expected,
        })
    }
}

fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= tolerance * scale
}
