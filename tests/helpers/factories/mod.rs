pub mod reference_row_factory;
pub mod sales_record_factory;

pub use reference_row_factory::ReferenceRowFactory;
pub use sales_record_factory::SalesRecordFactory;
