use crate::engine::record::SalesRecord;

pub struct SalesRecordFactory {
    region: String,
    product: String,
    amount: f64,
    quantity: i64,
}

impl SalesRecordFactory {
    pub fn new() -> Self {
        Self {
            region: "North".to_string(),
            product: "Laptop".to_string(),
            amount: 100.0,
            quantity: 1,
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

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn create(self) -> SalesRecord {
        SalesRecord {
            region: self.region,
            product: self.product,
            amount: self.amount,
            quantity: self.quantity,
        }
    }

    /// A batch sharing this factory's dimensions, with the amount ramped per
    /// record so each one stays distinguishable.
    pub fn create_list(self, count: usize) -> Vec<SalesRecord> {
        (0..count)
            .map(|i| SalesRecord {
                region: self.region.clone(),
                product: self.product.clone(),
                amount: self.amount + 10.0 * i as f64,
                quantity: self.quantity + (i % 10) as i64,
            })
            .collect()
    }
}
