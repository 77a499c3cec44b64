//! Pure index arithmetic over parsed measurement values.
//!
//! Every function is deterministic and total over its inputs: a missing or
//! unusable input yields `None`, never a panic. Rounding is
//! half-away-from-zero at the precision stated on each index.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::MetricsError;

/// Round half away from zero at `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Body-mass index: weight in kg over squared height in m, one decimal.
///
/// Height is captured in centimeters. A missing weight, or a missing or
/// non-positive height (it is the divisor), yields `None`.
pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let weight = weight_kg?;
    let height_m = height_cm.filter(|h| *h > 0.0)? / 100.0;
    Some(round_to(weight / (height_m * height_m), 1))
}

/// Waist circumference over height, two decimals.
///
/// A missing or non-positive height yields `None` — "not computed" is its
/// own state, never a stand-in `0.00`.
pub fn waist_height_ratio(waist_cm: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let waist = waist_cm?;
    let height = height_cm.filter(|h| *h > 0.0)?;
    Some(round_to(waist / height, 2))
}

/// Waist circumference over hip circumference, two decimals.
pub fn waist_hip_ratio(waist_cm: Option<f64>, hip_cm: Option<f64>) -> Option<f64> {
    let waist = waist_cm?;
    let hip = hip_cm.filter(|h| *h > 0.0)?;
    Some(round_to(waist / hip, 2))
}

/// A named skinfold measurement site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FoldSite {
    Triceps,
    Biceps,
    Subscapular,
    Midaxillary,
    Suprailiac,
    Supraspinal,
    Abdominal,
    Thigh,
    Calf,
}

/// A standard aggregate protocol over a named subset of fold sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FoldProtocol {
    Sum5,
    Sum8,
}

const SUM5_SITES: [FoldSite; 5] = [
    FoldSite::Triceps,
    FoldSite::Subscapular,
    FoldSite::Suprailiac,
    FoldSite::Abdominal,
    FoldSite::Thigh,
];

const SUM8_SITES: [FoldSite; 8] = [
    FoldSite::Triceps,
    FoldSite::Subscapular,
    FoldSite::Suprailiac,
    FoldSite::Abdominal,
    FoldSite::Thigh,
    FoldSite::Biceps,
    FoldSite::Supraspinal,
    FoldSite::Calf,
];

impl FoldProtocol {
    pub fn id(&self) -> &'static str {
        match self {
            FoldProtocol::Sum5 => "sum5",
            FoldProtocol::Sum8 => "sum8",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FoldProtocol::Sum5 => "Sum of 5 skinfolds",
            FoldProtocol::Sum8 => "Sum of 8 skinfolds",
        }
    }

    /// The fold sites this protocol aggregates.
    pub fn sites(&self) -> &'static [FoldSite] {
        match self {
            FoldProtocol::Sum5 => &SUM5_SITES,
            FoldProtocol::Sum8 => &SUM8_SITES,
        }
    }

    /// Look up a protocol by id, e.g. from a capture-form selection.
    pub fn from_id(id: &str) -> Result<Self, MetricsError> {
        match id {
            "sum5" => Ok(FoldProtocol::Sum5),
            "sum8" => Ok(FoldProtocol::Sum8),
            _ => Err(MetricsError::UnknownProtocol(id.to_string())),
        }
    }
}

/// Sum the folds a protocol names, one decimal place.
///
/// An absent fold contributes zero instead of making the whole sum absent:
/// a partially measured set still yields a usable running total.
pub fn skinfold_sum(protocol: FoldProtocol, fold: impl Fn(FoldSite) -> Option<f64>) -> f64 {
    let total: f64 = protocol
        .sites()
        .iter()
        .map(|site| fold(*site).unwrap_or(0.0))
        .sum();
    round_to(total, 1)
}
