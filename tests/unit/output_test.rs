//! Tests for CLI report structures

use resolution_solver::core::models::{INVALID_INPUT_MESSAGE, Outcome, Validity};
use resolution_solver::output::{OutputMode, ResizeReport, ResolutionReport, ValidationReport};
use serde_json::json;

#[test]
fn test_output_mode_default_is_human() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_valid_report_json() {
    let report = ValidationReport::from(&Validity::Valid);
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({ "valid": true, "status": "✅" })
    );
}

#[test]
fn test_invalid_report_carries_reason() {
    let report = ValidationReport::from(&Validity::invalid("No formula given."));
    assert!(!report.valid);
    assert_eq!(report.status, "❌ No formula given.");
    assert_eq!(report.reason.as_deref(), Some("No formula given."));
}

#[test]
fn test_resolved_report() {
    let outcome = Outcome::Resolved {
        resolution: "7\n2".to_string(),
        markup: "The resolution is: 7\n2".to_string(),
    };
    let report = ResolutionReport::new(&Validity::Valid, &outcome);
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "valid": true,
            "status": "✅",
            "result": "The resolution is: 7\n2",
            "resolution": "7\n2",
        })
    );
}

#[test]
fn test_rejected_report_has_no_resolution() {
    let outcome = Outcome::Rejected {
        markup: INVALID_INPUT_MESSAGE.to_string(),
    };
    let report = ResolutionReport::new(&Validity::invalid("bad"), &outcome);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["valid"], json!(false));
    assert_eq!(value["result"], json!(INVALID_INPUT_MESSAGE));
    assert!(value.get("resolution").is_none());
}

#[test]
fn test_resize_report_json() {
    assert_eq!(
        serde_json::to_value(ResizeReport::new(3)).unwrap(),
        json!({ "event": "resize", "height": 3 })
    );
}
