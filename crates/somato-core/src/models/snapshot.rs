//! The raw measurement snapshot captured during a consultation.
//!
//! Every field is free-form text exactly as typed into the capture form; an
//! empty string means the field was not captured. Parsing and derivation
//! happen downstream at computation time, so a half-typed value never
//! invalidates the record.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The category half of a field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Basic,
    Body,
    Skinfolds,
    Bioimpedance,
    Labs,
}

impl Category {
    pub fn id(&self) -> &'static str {
        match self {
            Category::Basic => "basic",
            Category::Body => "body",
            Category::Skinfolds => "skinfolds",
            Category::Bioimpedance => "bioimpedance",
            Category::Labs => "labs",
        }
    }

    fn parse(id: &str) -> Option<Category> {
        match id {
            "basic" => Some(Category::Basic),
            "body" => Some(Category::Body),
            "skinfolds" => Some(Category::Skinfolds),
            "bioimpedance" => Some(Category::Bioimpedance),
            "labs" => Some(Category::Labs),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Address of a single snapshot field, e.g. `skinfolds.triceps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldPath {
    pub category: Category,
    pub field: String,
}

impl FieldPath {
    pub fn new(category: Category, field: impl Into<String>) -> Self {
        Self {
            category,
            field: field.into(),
        }
    }

    /// Parse a dotted path like `"body.waist"`.
    pub fn parse(path: &str) -> Result<Self, CoreError> {
        let (category, field) = path
            .split_once('.')
            .ok_or_else(|| CoreError::InvalidFieldPath(path.to_string()))?;
        if field.is_empty() {
            return Err(CoreError::InvalidFieldPath(path.to_string()));
        }
        let category = Category::parse(category)
            .ok_or_else(|| CoreError::UnknownCategory(category.to_string()))?;
        Ok(Self::new(category, field))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.field)
    }
}

/// Weight and stature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct BasicMetrics {
    /// Body weight, kg.
    pub weight: String,
    /// Stature, cm.
    pub height: String,
}

/// Circumference measurements, cm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct BodyMetrics {
    pub neck: String,
    pub chest: String,
    pub waist: String,
    pub hip: String,
    pub arm: String,
    pub thigh: String,
    pub calf: String,
}

/// Skinfold thicknesses, mm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Skinfolds {
    pub triceps: String,
    pub biceps: String,
    pub subscapular: String,
    pub midaxillary: String,
    pub suprailiac: String,
    pub supraspinal: String,
    pub abdominal: String,
    pub thigh: String,
    pub calf: String,
}

/// Bioimpedance scale readouts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Bioimpedance {
    pub fat_percent: String,
    pub muscle_mass: String,
    pub body_water: String,
    pub visceral_fat: String,
}

/// Laboratory panel values transcribed from the patient's exams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct LabPanel {
    pub glucose: String,
    pub total_cholesterol: String,
    pub hdl: String,
    pub ldl: String,
    pub triglycerides: String,
}

macro_rules! field_access {
    ($ty:ty, $($name:ident),+ $(,)?) => {
        impl $ty {
            pub const FIELDS: &'static [&'static str] = &[$(stringify!($name)),+];

            fn get(&self, field: &str) -> Option<&str> {
                match field {
                    $(stringify!($name) => Some(&self.$name),)+
                    _ => None,
                }
            }

            fn set(&mut self, field: &str, value: String) -> bool {
                match field {
                    $(stringify!($name) => self.$name = value,)+
                    _ => return false,
                }
                true
            }
        }
    };
}

field_access!(BasicMetrics, weight, height);
field_access!(BodyMetrics, neck, chest, waist, hip, arm, thigh, calf);
field_access!(
    Skinfolds,
    triceps,
    biceps,
    subscapular,
    midaxillary,
    suprailiac,
    supraspinal,
    abdominal,
    thigh,
    calf,
);
field_access!(Bioimpedance, fat_percent, muscle_mass, body_water, visceral_fat);
field_access!(LabPanel, glucose, total_cholesterol, hdl, ldl, triglycerides);

/// All raw measurements for one consultation, grouped by category.
///
/// Each category sits behind an `Arc`, so replacing one field clones only
/// the addressed category and shares the other four with the source
/// snapshot. That keeps per-keystroke updates (and any history kept by the
/// caller) cheap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct MeasurementSnapshot {
    pub basic: Arc<BasicMetrics>,
    pub body: Arc<BodyMetrics>,
    pub skinfolds: Arc<Skinfolds>,
    pub bioimpedance: Arc<Bioimpedance>,
    pub labs: Arc<LabPanel>,
}

impl MeasurementSnapshot {
    /// Read the raw text of one field.
    pub fn field(&self, path: &FieldPath) -> Result<&str, CoreError> {
        let value = match path.category {
            Category::Basic => self.basic.get(&path.field),
            Category::Body => self.body.get(&path.field),
            Category::Skinfolds => self.skinfolds.get(&path.field),
            Category::Bioimpedance => self.bioimpedance.get(&path.field),
            Category::Labs => self.labs.get(&path.field),
        };
        value.ok_or_else(|| CoreError::UnknownField {
            category: path.category.id().to_string(),
            field: path.field.clone(),
        })
    }

    /// Return a new snapshot with exactly one field replaced.
    ///
    /// `self` is untouched. Unrecognized field names are a caller bug and
    /// reported as an error, never silently dropped.
    pub fn with_field(
        &self,
        path: &FieldPath,
        value: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let value = value.into();
        let mut next = self.clone();
        let known = match path.category {
            Category::Basic => {
                let mut cat = (*self.basic).clone();
                let known = cat.set(&path.field, value);
                next.basic = Arc::new(cat);
                known
            }
            Category::Body => {
                let mut cat = (*self.body).clone();
                let known = cat.set(&path.field, value);
                next.body = Arc::new(cat);
                known
            }
            Category::Skinfolds => {
                let mut cat = (*self.skinfolds).clone();
                let known = cat.set(&path.field, value);
                next.skinfolds = Arc::new(cat);
                known
            }
            Category::Bioimpedance => {
                let mut cat = (*self.bioimpedance).clone();
                let known = cat.set(&path.field, value);
                next.bioimpedance = Arc::new(cat);
                known
            }
            Category::Labs => {
                let mut cat = (*self.labs).clone();
                let known = cat.set(&path.field, value);
                next.labs = Arc::new(cat);
                known
            }
        };
        if !known {
            return Err(CoreError::UnknownField {
                category: path.category.id().to_string(),
                field: path.field.clone(),
            });
        }
        Ok(next)
    }
}
