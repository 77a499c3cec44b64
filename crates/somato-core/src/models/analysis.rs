use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::derived::DerivedIndices;
use crate::models::snapshot::MeasurementSnapshot;

/// The input handed to the narrative-generation collaborator for one
/// consultation: the full raw snapshot plus freshly derived indices.
///
/// `structured_input` is a human-readable rendering of the same data for
/// direct inclusion in the generation prompt; the typed fields let the
/// collaborator address individual values.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisRequest {
    pub consultation_id: Uuid,
    pub patient_name: String,
    pub date: Date,
    pub snapshot: MeasurementSnapshot,
    pub derived: DerivedIndices,
    pub structured_input: String,
}
