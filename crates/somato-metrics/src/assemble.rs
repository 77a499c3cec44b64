//! One-pass derivation over a full measurement snapshot.

use somato_core::models::derived::DerivedIndices;
use somato_core::models::snapshot::MeasurementSnapshot;

use crate::bands::bmi_bands;
use crate::indices::{self, FoldProtocol, FoldSite};
use crate::parse::parse_decimal;

/// Compute every derived index the snapshot currently supports.
///
/// Each index tolerates missing input independently: a consultation with
/// only a weight entered still yields its skinfold sums and a `-` BMI
/// class rather than failing as a whole. Nothing here reads state outside
/// the snapshot, so repeated calls on the same snapshot return identical
/// results.
pub fn derive_indices(snapshot: &MeasurementSnapshot) -> DerivedIndices {
    let weight = parse_decimal(&snapshot.basic.weight);
    let height = parse_decimal(&snapshot.basic.height);
    let waist = parse_decimal(&snapshot.body.waist);
    let hip = parse_decimal(&snapshot.body.hip);

    let bmi = indices::bmi(weight, height);
    let fold = |site| fold_value(snapshot, site);

    DerivedIndices {
        bmi,
        bmi_class: bmi_bands().classify(bmi).to_string(),
        waist_height_ratio: indices::waist_height_ratio(waist, height),
        waist_hip_ratio: indices::waist_hip_ratio(waist, hip),
        skinfold_sum5: indices::skinfold_sum(FoldProtocol::Sum5, fold),
        skinfold_sum8: indices::skinfold_sum(FoldProtocol::Sum8, fold),
    }
}

fn fold_value(snapshot: &MeasurementSnapshot, site: FoldSite) -> Option<f64> {
    let folds = &snapshot.skinfolds;
    let raw = match site {
        FoldSite::Triceps => &folds.triceps,
        FoldSite::Biceps => &folds.biceps,
        FoldSite::Subscapular => &folds.subscapular,
        FoldSite::Midaxillary => &folds.midaxillary,
        FoldSite::Suprailiac => &folds.suprailiac,
        FoldSite::Supraspinal => &folds.supraspinal,
        FoldSite::Abdominal => &folds.abdominal,
        FoldSite::Thigh => &folds.thigh,
        FoldSite::Calf => &folds.calf,
    };
    parse_decimal(raw)
}
