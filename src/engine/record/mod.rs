pub mod generator;
pub mod sales_record;

pub use generator::{generate, generate_default, shuffle};
pub use sales_record::SalesRecord;

#[cfg(test)]
mod generator_test;
