//! Field-path addressing and immutable updates over the measurement
//! snapshot, plus the consultation lifecycle built on top of them.

use std::sync::Arc;

use somato_core::error::CoreError;
use somato_core::models::consultation::{Consultation, ConsultationStatus};
use somato_core::models::snapshot::{
    BasicMetrics, Bioimpedance, BodyMetrics, Category, FieldPath, LabPanel, MeasurementSnapshot,
    Skinfolds,
};

#[test]
fn parses_dotted_field_paths() {
    let path = FieldPath::parse("skinfolds.triceps").unwrap();
    assert_eq!(path.category, Category::Skinfolds);
    assert_eq!(path.field, "triceps");
    assert_eq!(path.to_string(), "skinfolds.triceps");
}

#[test]
fn rejects_malformed_field_paths() {
    assert!(matches!(
        FieldPath::parse("waist"),
        Err(CoreError::InvalidFieldPath(_))
    ));
    assert!(matches!(
        FieldPath::parse("body."),
        Err(CoreError::InvalidFieldPath(_))
    ));
    assert!(matches!(
        FieldPath::parse("vitals.pulse"),
        Err(CoreError::UnknownCategory(_))
    ));
}

#[test]
fn with_field_replaces_exactly_one_field() {
    let empty = MeasurementSnapshot::default();
    let path = FieldPath::parse("body.waist").unwrap();

    let updated = empty.with_field(&path, "82,5").unwrap();

    assert_eq!(updated.field(&path).unwrap(), "82,5");
    assert_eq!(empty.field(&path).unwrap(), "");
    assert_eq!(updated.body.hip, "");
}

#[test]
fn with_field_shares_untouched_categories() {
    let base = MeasurementSnapshot::default()
        .with_field(&FieldPath::parse("basic.weight").unwrap(), "70")
        .unwrap();

    let updated = base
        .with_field(&FieldPath::parse("skinfolds.triceps").unwrap(), "12")
        .unwrap();

    assert!(!Arc::ptr_eq(&base.skinfolds, &updated.skinfolds));
    assert!(Arc::ptr_eq(&base.basic, &updated.basic));
    assert!(Arc::ptr_eq(&base.body, &updated.body));
    assert!(Arc::ptr_eq(&base.bioimpedance, &updated.bioimpedance));
    assert!(Arc::ptr_eq(&base.labs, &updated.labs));
}

#[test]
fn with_field_rejects_unknown_field_names() {
    let snapshot = MeasurementSnapshot::default();
    let path = FieldPath::new(Category::Basic, "wingspan");

    let err = snapshot.with_field(&path, "180").unwrap_err();
    assert!(matches!(
        err,
        CoreError::UnknownField { category, field }
            if category == "basic" && field == "wingspan"
    ));
}

#[test]
fn every_declared_field_is_addressable_and_empty_by_default() {
    let snapshot = MeasurementSnapshot::default();
    let categories = [
        (Category::Basic, BasicMetrics::FIELDS),
        (Category::Body, BodyMetrics::FIELDS),
        (Category::Skinfolds, Skinfolds::FIELDS),
        (Category::Bioimpedance, Bioimpedance::FIELDS),
        (Category::Labs, LabPanel::FIELDS),
    ];

    for (category, fields) in categories {
        for field in fields {
            let path = FieldPath::new(category, *field);
            assert_eq!(snapshot.field(&path).unwrap(), "", "{path}");
        }
    }
}

#[test]
fn record_updates_an_open_consultation() {
    let consultation = Consultation::new("A. Silva", jiff::civil::date(2026, 3, 12));
    let path = FieldPath::parse("basic.weight").unwrap();

    let updated = consultation.record(&path, "70").unwrap();

    assert_eq!(updated.snapshot.field(&path).unwrap(), "70");
    assert_eq!(updated.status, ConsultationStatus::Open);
    assert_eq!(consultation.snapshot.field(&path).unwrap(), "");
}

#[test]
fn finalized_consultation_rejects_further_changes() {
    let consultation = Consultation::new("A. Silva", jiff::civil::date(2026, 3, 12));
    let path = FieldPath::parse("basic.weight").unwrap();

    let finalized = consultation.record(&path, "70").unwrap().finalize().unwrap();
    assert_eq!(finalized.status, ConsultationStatus::Finalized);

    let err = finalized.record(&path, "71").unwrap_err();
    assert!(matches!(err, CoreError::ConsultationFinalized(id) if id == finalized.id));

    assert!(matches!(
        finalized.finalize(),
        Err(CoreError::ConsultationFinalized(_))
    ));
}
