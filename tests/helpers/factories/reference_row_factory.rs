use crate::engine::aggregate::{GroupKey, GroupTotals};
use crate::engine::oracle::ReferenceRow;

pub struct ReferenceRowFactory {
    region: String,
    product: String,
    total_sales: i64,
    total_amount: f64,
    total_quantity: i64,
}

impl ReferenceRowFactory {
    pub fn new() -> Self {
        Self {
            region: "North".to_string(),
            product: "Laptop".to_string(),
            total_sales: 1,
            total_amount: 100.0,
            total_quantity: 1,
        }
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    pub fn with_product(mut self, product: &str) -> Self {
        self.product = product.to_string();
        self
    }

    pub fn with_totals(mut self, sales: i64, amount: f64, quantity: i64) -> Self {
        self.total_sales = sales;
        self.total_amount = amount;
        self.total_quantity = quantity;
        self
    }

    pub fn create(self) -> ReferenceRow {
        ReferenceRow {
            avg_amount: self.total_amount / self.total_sales as f64,
            avg_quantity: self.total_quantity as f64 / self.total_sales as f64,
            region: self.region,
            product: self.product,
            total_sales: self.total_sales,
            total_amount: self.total_amount,
            total_quantity: self.total_quantity,
        }
    }

    /// Reference row mirroring one finalized engine group, for building
    /// agreeing fixtures.
    pub fn from_group(key: &GroupKey, totals: &GroupTotals) -> ReferenceRow {
        let (region, product) = key.labels();
        ReferenceRow {
            region: region.to_string(),
            product: product.to_string(),
            total_sales: totals.total_sales,
            total_amount: totals.total_amount,
            avg_amount: totals.avg_amount,
            total_quantity: totals.total_quantity,
            avg_quantity: totals.avg_quantity,
        }
    }
}
