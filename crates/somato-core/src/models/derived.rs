use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Indices derived from a measurement snapshot.
///
/// Never stored as authoritative data — always recomputed from the raw
/// snapshot. `None` means "not computed", which is distinct from a measured
/// zero; the skinfold sums instead treat missing folds as zero so a partial
/// set of folds still yields a running total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DerivedIndices {
    /// Body-mass index, kg/m², one decimal.
    pub bmi: Option<f64>,
    /// Classification label for `bmi`, `-` when BMI is not computed.
    pub bmi_class: String,
    /// Waist circumference over height, two decimals.
    pub waist_height_ratio: Option<f64>,
    /// Waist circumference over hip circumference, two decimals.
    pub waist_hip_ratio: Option<f64>,
    /// Five-fold skinfold sum, mm, one decimal.
    pub skinfold_sum5: f64,
    /// Eight-fold skinfold sum, mm, one decimal.
    pub skinfold_sum8: f64,
}

/// Format an index for display. Absent values render as `-`.
pub fn format_index(value: Option<f64>, places: usize) -> String {
    match value {
        Some(v) => format!("{v:.places$}"),
        None => "-".to_string(),
    }
}
