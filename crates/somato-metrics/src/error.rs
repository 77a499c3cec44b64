use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("band table is empty")]
    EmptyBandTable,

    #[error("band upper bounds must ascend (band {index} has upper bound {upper})")]
    NonAscendingBound { index: usize, upper: f64 },

    #[error("unknown skinfold protocol: {0}")]
    UnknownProtocol(String),
}
