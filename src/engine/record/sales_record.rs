use serde::{Deserialize, Serialize};

/// One flat sales fact. Dimension values are carried as labels because
/// records can arrive from arbitrary external sources (in-memory fixtures,
/// deserialized files, query result sets); the engines validate them against
/// the dimension tables on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub region: String,
    pub product: String,
    pub amount: f64,
    pub quantity: i64,
}

impl SalesRecord {
    pub fn new(
        region: impl Into<String>,
        product: impl Into<String>,
        amount: f64,
        quantity: i64,
    ) -> Self {
        Self {
            region: region.into(),
            product: product.into(),
            amount,
            quantity,
        }
    }
}
