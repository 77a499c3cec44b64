//! The structured analysis input handed to the narrative collaborator.

use somato_core::models::consultation::Consultation;
use somato_core::models::snapshot::{FieldPath, MeasurementSnapshot};
use somato_metrics::context::{build_analysis_request, structured_input, to_payload};
use somato_metrics::derive_indices;

fn snapshot(fields: &[(&str, &str)]) -> MeasurementSnapshot {
    let mut snapshot = MeasurementSnapshot::default();
    for (path, value) in fields {
        let path = FieldPath::parse(path).unwrap();
        snapshot = snapshot.with_field(&path, *value).unwrap();
    }
    snapshot
}

#[test]
fn structured_input_lists_only_captured_fields() {
    let snapshot = snapshot(&[
        ("basic.weight", "70"),
        ("basic.height", "175"),
        ("skinfolds.triceps", "12"),
    ]);
    let derived = derive_indices(&snapshot);
    let block = structured_input(&snapshot, &derived);

    assert!(block.contains("- Weight (kg): 70"));
    assert!(block.contains("- Triceps: 12"));
    assert!(block.contains("- BMI: 22.9 (Adequate)"));
    // Unmeasured fields and empty categories stay out of the prompt.
    assert!(!block.contains("Neck"));
    assert!(!block.contains("Laboratory"));
}

#[test]
fn structured_input_marks_uncomputed_ratios() {
    let snapshot = snapshot(&[("body.waist", "80")]);
    let derived = derive_indices(&snapshot);
    let block = structured_input(&snapshot, &derived);

    assert!(block.contains("- Waist-to-height ratio: -"));
    assert!(block.contains("- BMI: - (-)"));
    assert!(block.contains("- Skinfold sum, 5 folds (mm): 0.0"));
}

#[test]
fn analysis_request_recomputes_from_the_current_snapshot() {
    let consultation = Consultation::new("A. Silva", jiff::civil::date(2026, 3, 12));
    let weight = FieldPath::parse("basic.weight").unwrap();
    let height = FieldPath::parse("basic.height").unwrap();

    let consultation = consultation
        .record(&weight, "70")
        .unwrap()
        .record(&height, "175")
        .unwrap();
    assert_eq!(build_analysis_request(&consultation).derived.bmi, Some(22.9));

    let consultation = consultation.record(&weight, "95").unwrap();
    assert_eq!(build_analysis_request(&consultation).derived.bmi, Some(31.0));
}

#[test]
fn payload_serializes_the_full_request() {
    let consultation = Consultation::new("A. Silva", jiff::civil::date(2026, 3, 12))
        .record(&FieldPath::parse("basic.weight").unwrap(), "70")
        .unwrap()
        .record(&FieldPath::parse("basic.height").unwrap(), "175")
        .unwrap();

    let request = build_analysis_request(&consultation);
    let payload = to_payload(&request).unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

    assert_eq!(value["patient_name"], "A. Silva");
    assert_eq!(value["snapshot"]["basic"]["weight"], "70");
    assert_eq!(value["derived"]["bmi"], 22.9);
    assert_eq!(value["derived"]["bmi_class"], "Adequate");
    assert!(value["structured_input"].as_str().unwrap().contains("BMI"));
}
