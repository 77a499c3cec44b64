//! Ordered-threshold classification.
//!
//! A `BandTable` maps a continuous index onto a categorical label. Tables
//! are plain data: supporting a new index means declaring a new table, not
//! writing a new code path.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::MetricsError;

/// Label returned when the value to classify is absent.
pub const ABSENT_LABEL: &str = "-";

/// One classification band: values strictly below `upper` get `label`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub upper: f64,
    pub label: String,
}

impl Band {
    pub fn new(upper: f64, label: impl Into<String>) -> Self {
        Self {
            upper,
            label: label.into(),
        }
    }
}

/// An ordered band table with a top label for values past every bound.
///
/// Construction validates the table once; classification is then
/// infallible.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BandTable {
    bands: Vec<Band>,
    top_label: String,
}

impl BandTable {
    /// Build a table from bands ordered by ascending upper bound.
    ///
    /// An empty table or out-of-order bounds is a caller bug, reported as
    /// an error rather than left to misclassify silently.
    pub fn new(bands: Vec<Band>, top_label: impl Into<String>) -> Result<Self, MetricsError> {
        if bands.is_empty() {
            return Err(MetricsError::EmptyBandTable);
        }
        for i in 1..bands.len() {
            if bands[i].upper <= bands[i - 1].upper {
                return Err(MetricsError::NonAscendingBound {
                    index: i,
                    upper: bands[i].upper,
                });
            }
        }
        Ok(Self {
            bands,
            top_label: top_label.into(),
        })
    }

    /// Classify a value against this table.
    ///
    /// Returns the label of the first band whose upper bound strictly
    /// exceeds the value (bounds are exclusive: 24.9 classifies below a
    /// 25.0 bound, 25.0 into the next band), the top label once every
    /// bound is exceeded, and [`ABSENT_LABEL`] for an absent value.
    pub fn classify(&self, value: Option<f64>) -> &str {
        let Some(value) = value else {
            return ABSENT_LABEL;
        };
        self.bands
            .iter()
            .find(|band| value < band.upper)
            .map(|band| band.label.as_str())
            .unwrap_or(&self.top_label)
    }
}

/// BMI classification bands.
pub fn bmi_bands() -> &'static BandTable {
    static BANDS: LazyLock<BandTable> = LazyLock::new(|| BandTable {
        bands: vec![
            Band::new(18.5, "Low Weight"),
            Band::new(25.0, "Adequate"),
            Band::new(30.0, "Overweight"),
        ],
        top_label: "Obesity".to_string(),
    });
    &BANDS
}
