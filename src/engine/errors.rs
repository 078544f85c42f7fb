use thiserror::Error;

/// Errors raised while grouping a record batch.
///
/// A bad dimension label means the upstream source broke its contract, so the
/// whole aggregation call is aborted rather than the record being dropped or
/// rerouted to a default bucket.
#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    #[error("unknown region {value:?} at record {index}")]
    UnknownRegion { value: String, index: usize },

    #[error("unknown product {value:?} at record {index}")]
    UnknownProduct { value: String, index: usize },

    #[error("no groups to select from")]
    NoGroups,
}

/// Errors raised while checking engine output against an external reference.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("reference rows failed to parse: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reference row ({region}, {product}) has no matching group")]
    MissingGroup { region: String, product: String },

    #[error(
        "group ({region}, {product}) disagrees on {field}: engine {actual}, reference {expected}"
    )]
    Mismatch {
        region: String,
        product: String,
        field: &'static str,
        actual: f64,
        expected: f64,
    },
}
