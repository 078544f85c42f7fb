use rand::seq::SliceRandom;
use tracing::debug;

use crate::engine::dimension::{Product, Region};
use crate::engine::record::SalesRecord;
use crate::shared::config::CONFIG;

/// Builds the synthetic sales dataset. Record `i` cycles through the two
/// dimension tables and ramps `amount` linearly, so per-group totals have a
/// closed form: every (region, product) pair receives exactly `n / 20`
/// records once `n` is a multiple of 20, and (West, Keyboard) collects the
/// highest amounts because it sits on the `i % 20 == 19` residue.
pub fn generate(n: usize) -> Vec<SalesRecord> {
    let mut records = Vec::with_capacity(n);
    for i in 0..n {
        let region = Region::ALL[i % Region::COUNT];
        let product = Product::ALL[i % Product::COUNT];
        records.push(SalesRecord {
            region: region.as_label().to_string(),
            product: product.as_label().to_string(),
            amount: 100.0 + 10.0 * (i as f64),
            quantity: 1 + (i % 10) as i64,
        });
    }

    debug!(
        target: "salesagg::generator",
        records = records.len(),
        "Generated sales dataset"
    );

    records
}

/// Dataset sized and shuffled per the `[generator]` settings section.
pub fn generate_default() -> Vec<SalesRecord> {
    let cfg = &CONFIG.generator;
    let mut records = generate(cfg.record_count);
    if cfg.shuffle {
        shuffle(&mut records);
    }
    records
}

/// Uniform random permutation, in place. Aggregation output must not depend
/// on record order, so tests run the engines over shuffled copies.
pub fn shuffle(records: &mut [SalesRecord]) {
    let mut rng = rand::thread_rng();
    records.shuffle(&mut rng);
}
