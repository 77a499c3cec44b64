use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::snapshot::{FieldPath, MeasurementSnapshot};

/// One consultation: patient identity, the visit date, and the raw
/// measurement snapshot captured during it.
///
/// The snapshot is the only thing persisted for a consultation — derived
/// indices are recomputed from it on every read so they can never go stale
/// against a formula or band-table change.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Consultation {
    pub id: Uuid,
    pub patient_name: String,
    pub date: Date,
    pub status: ConsultationStatus,
    pub snapshot: MeasurementSnapshot,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConsultationStatus {
    Open,
    Finalized,
}

impl Consultation {
    pub fn new(patient_name: impl Into<String>, date: Date) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            patient_name: patient_name.into(),
            date,
            status: ConsultationStatus::Open,
            snapshot: MeasurementSnapshot::default(),
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record one measurement field, returning the updated consultation.
    ///
    /// The previous consultation value is untouched, so callers can keep it
    /// around for undo. Fails once the consultation is finalized.
    pub fn record(
        &self,
        path: &FieldPath,
        value: impl Into<String>,
    ) -> Result<Self, CoreError> {
        if self.status == ConsultationStatus::Finalized {
            return Err(CoreError::ConsultationFinalized(self.id));
        }
        let snapshot = self.snapshot.with_field(path, value)?;
        Ok(Self {
            snapshot,
            updated_at: Timestamp::now(),
            ..self.clone()
        })
    }

    /// Close the consultation. A finalized consultation rejects any further
    /// `record` call; finalizing twice is also an error.
    pub fn finalize(&self) -> Result<Self, CoreError> {
        if self.status == ConsultationStatus::Finalized {
            return Err(CoreError::ConsultationFinalized(self.id));
        }
        Ok(Self {
            status: ConsultationStatus::Finalized,
            updated_at: Timestamp::now(),
            ..self.clone()
        })
    }
}
