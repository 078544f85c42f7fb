pub use super::factories::{ReferenceRowFactory, SalesRecordFactory};

pub struct Factory;

impl Factory {
    pub fn sales_record() -> SalesRecordFactory {
        SalesRecordFactory::new()
    }

    pub fn reference_row() -> ReferenceRowFactory {
        ReferenceRowFactory::new()
    }
}
