use serde_json::json;

use paceline::client::routes::runner::RunnerForm;

fn filled() -> RunnerForm {
    RunnerForm {
        name: "Ada Okafor".to_string(),
        location: "Aurora Bay".to_string(),
        bib: "101".to_string(),
    }
}

#[test]
fn a_valid_form_becomes_a_record() {
    let customer = filled().validate().unwrap();

    assert_eq!(customer.name, "Ada Okafor");
    assert_eq!(customer.location, "Aurora Bay");
    assert_eq!(customer.bib, Some(101));
}

#[test]
fn blank_required_fields_fail_together_with_a_bad_bib() {
    let form = RunnerForm {
        name: " ".to_string(),
        location: String::new(),
        bib: "abc".to_string(),
    };

    let errors = form.validate().unwrap_err();

    assert!(errors.name.is_some());
    assert!(errors.location.is_some());
    assert!(errors.bib.is_some());
    assert!(!errors.is_empty());
}

#[test]
fn an_empty_bib_is_simply_absent() {
    let mut form = filled();
    form.bib = "  ".to_string();

    assert_eq!(form.validate().unwrap().bib, None);
}

#[test]
// What actually goes over the wire on registration: no key, no nulls for
// the optional fields that were never set
fn the_registration_payload_carries_no_key_and_no_null_fields() {
    let mut form = filled();
    form.bib = String::new();

    let customer = form.validate().unwrap();
    let payload = serde_json::to_value(&customer).unwrap();

    assert_eq!(
        payload,
        json!({
            "name": "Ada Okafor",
            "location": "Aurora Bay",
        })
    );
}
