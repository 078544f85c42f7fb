use crate::engine::record::{SalesRecord, generate, shuffle};

// Cycle pattern -----------------------------------------------------------

#[test]
fn records_cycle_through_both_dimension_tables() {
    let records = generate(23);
    assert_eq!(records.len(), 23);

    assert_eq!(records[0].region, "North");
    assert_eq!(records[0].product, "Laptop");
    assert_eq!(records[3].region, "West");
    assert_eq!(records[4].region, "North");
    assert_eq!(records[4].product, "Keyboard");
    assert_eq!(records[5].product, "Laptop");

    // Residue 19 mod 20 is the (West, Keyboard) combination.
    assert_eq!(records[19].region, "West");
    assert_eq!(records[19].product, "Keyboard");
}

#[test]
fn measures_follow_the_closed_form() {
    let records = generate(25);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.amount, 100.0 + 10.0 * i as f64);
        assert_eq!(record.quantity, 1 + (i % 10) as i64);
    }
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(generate(200), generate(200));
}

#[test]
fn zero_records_is_an_empty_dataset() {
    assert!(generate(0).is_empty());
}

// Settings-driven default -------------------------------------------------

#[test]
fn default_dataset_size_comes_from_settings() {
    use crate::engine::record::generate_default;
    use crate::shared::config::CONFIG;

    let records = generate_default();
    assert_eq!(records.len(), CONFIG.generator.record_count);
}

// Shuffle -----------------------------------------------------------------

#[test]
fn shuffle_permutes_without_losing_records() {
    let original = generate(500);
    let mut shuffled = original.clone();
    shuffle(&mut shuffled);

    assert_eq!(shuffled.len(), original.len());

    let sort_key = |r: &SalesRecord| (r.amount.to_bits(), r.quantity);
    let mut a = original.clone();
    let mut b = shuffled.clone();
    a.sort_by_key(sort_key);
    b.sort_by_key(sort_key);
    assert_eq!(a, b);
}
