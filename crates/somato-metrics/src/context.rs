//! Structured analysis input for the narrative collaborator.
//!
//! Assembles the raw snapshot and freshly derived indices into the request
//! the clinical-summary generator consumes. Only fields the clinician
//! actually captured appear in the rendered block.

use somato_core::error::CoreError;
use somato_core::models::analysis::AnalysisRequest;
use somato_core::models::consultation::Consultation;
use somato_core::models::derived::{DerivedIndices, format_index};
use somato_core::models::snapshot::MeasurementSnapshot;
use tracing::info;

use crate::assemble::derive_indices;

/// Render a snapshot and its derived indices as a structured text block.
pub fn structured_input(snapshot: &MeasurementSnapshot, derived: &DerivedIndices) -> String {
    let mut output = String::from("## Anthropometric Record\n\n");

    section(
        &mut output,
        "Basic Metrics",
        &[
            ("Weight (kg)", &snapshot.basic.weight),
            ("Height (cm)", &snapshot.basic.height),
        ],
    );
    section(
        &mut output,
        "Circumferences (cm)",
        &[
            ("Neck", &snapshot.body.neck),
            ("Chest", &snapshot.body.chest),
            ("Waist", &snapshot.body.waist),
            ("Hip", &snapshot.body.hip),
            ("Arm", &snapshot.body.arm),
            ("Thigh", &snapshot.body.thigh),
            ("Calf", &snapshot.body.calf),
        ],
    );
    section(
        &mut output,
        "Skinfolds (mm)",
        &[
            ("Triceps", &snapshot.skinfolds.triceps),
            ("Biceps", &snapshot.skinfolds.biceps),
            ("Subscapular", &snapshot.skinfolds.subscapular),
            ("Midaxillary", &snapshot.skinfolds.midaxillary),
            ("Suprailiac", &snapshot.skinfolds.suprailiac),
            ("Supraspinal", &snapshot.skinfolds.supraspinal),
            ("Abdominal", &snapshot.skinfolds.abdominal),
            ("Thigh", &snapshot.skinfolds.thigh),
            ("Calf", &snapshot.skinfolds.calf),
        ],
    );
    section(
        &mut output,
        "Bioimpedance",
        &[
            ("Fat (%)", &snapshot.bioimpedance.fat_percent),
            ("Muscle mass (kg)", &snapshot.bioimpedance.muscle_mass),
            ("Body water (%)", &snapshot.bioimpedance.body_water),
            ("Visceral fat", &snapshot.bioimpedance.visceral_fat),
        ],
    );
    section(
        &mut output,
        "Laboratory",
        &[
            ("Glucose (mg/dL)", &snapshot.labs.glucose),
            ("Total cholesterol (mg/dL)", &snapshot.labs.total_cholesterol),
            ("HDL (mg/dL)", &snapshot.labs.hdl),
            ("LDL (mg/dL)", &snapshot.labs.ldl),
            ("Triglycerides (mg/dL)", &snapshot.labs.triglycerides),
        ],
    );

    output.push_str("### Derived Indices\n");
    output.push_str(&format!(
        "- BMI: {} ({})\n",
        format_index(derived.bmi, 1),
        derived.bmi_class,
    ));
    output.push_str(&format!(
        "- Waist-to-height ratio: {}\n",
        format_index(derived.waist_height_ratio, 2),
    ));
    output.push_str(&format!(
        "- Waist-to-hip ratio: {}\n",
        format_index(derived.waist_hip_ratio, 2),
    ));
    output.push_str(&format!(
        "- Skinfold sum, 5 folds (mm): {:.1}\n",
        derived.skinfold_sum5,
    ));
    output.push_str(&format!(
        "- Skinfold sum, 8 folds (mm): {:.1}\n",
        derived.skinfold_sum8,
    ));
    output
}

fn section(output: &mut String, title: &str, fields: &[(&str, &str)]) {
    let present: Vec<_> = fields
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect();
    if present.is_empty() {
        return;
    }
    output.push_str(&format!("### {title}\n"));
    for (label, value) in present {
        output.push_str(&format!("- {label}: {}\n", value.trim()));
    }
    output.push('\n');
}

/// Build the full analysis request for a consultation.
///
/// Derived indices are recomputed from the current snapshot here — a
/// previously displayed value is never trusted.
pub fn build_analysis_request(consultation: &Consultation) -> AnalysisRequest {
    let derived = derive_indices(&consultation.snapshot);
    let structured = structured_input(&consultation.snapshot, &derived);

    info!(consultation_id = %consultation.id, "assembled analysis request");

    AnalysisRequest {
        consultation_id: consultation.id,
        patient_name: consultation.patient_name.clone(),
        date: consultation.date,
        snapshot: consultation.snapshot.clone(),
        derived,
        structured_input: structured,
    }
}

/// Serialize a request to the JSON payload the collaborator receives.
pub fn to_payload(request: &AnalysisRequest) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(request)?)
}
