//! The schema adapter used through `validator` derives, the way enrollment and
//! guardian forms consume it.

use attend_rut::{Rut, INVALID_RUT_CODE, INVALID_RUT_MESSAGE};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Validate)]
struct EnrollmentForm {
    #[validate(custom(function = "attend_rut::validate_rut"))]
    student_rut: String,

    #[validate(custom(function = "attend_rut::validate_rut"))]
    guardian_rut: Option<String>,
}

#[test]
fn test_form_accepts_valid_identifiers() {
    let form = EnrollmentForm {
        student_rut: "12.345.678-5".to_string(),
        guardian_rut: Some(" 1.000.005-k ".to_string()),
    };
    assert!(form.validate().is_ok());
}

#[test]
fn test_form_skips_absent_optional_identifier() {
    let form = EnrollmentForm {
        student_rut: "21063494-0".to_string(),
        guardian_rut: None,
    };
    assert!(form.validate().is_ok());
}

#[test]
fn test_form_reports_fixed_message_per_field() {
    let form = EnrollmentForm {
        student_rut: "12.345.678-0".to_string(),
        guardian_rut: Some("abc".to_string()),
    };
    let errors = form.validate().unwrap_err();
    let fields = errors.field_errors();

    for field in ["student_rut", "guardian_rut"] {
        let errs = fields.get(field).expect("field should have errors");
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, INVALID_RUT_CODE);
        assert_eq!(errs[0].message.as_deref(), Some(INVALID_RUT_MESSAGE));
    }
}

#[derive(Debug, Deserialize)]
struct GuardianRequest {
    name: String,
    rut: Rut,
}

#[test]
fn test_request_body_with_typed_rut() {
    let body: GuardianRequest =
        serde_json::from_str(r#"{"name":"Ana","rut":"12.345.670-K"}"#).unwrap();
    assert_eq!(body.name, "Ana");
    assert_eq!(body.rut.as_str(), "12345670-K");
    assert_eq!(body.rut.to_string(), "12.345.670-K");
}

#[test]
fn test_request_body_with_bad_rut() {
    let err = serde_json::from_str::<GuardianRequest>(r#"{"name":"Ana","rut":"12.345.670-1"}"#)
        .unwrap_err();
    assert!(err.to_string().contains(INVALID_RUT_MESSAGE));
}
