//! Form State Tests

use medeventgen_frontend::services::form_state::{
    submit_draft, EventDraft, FormField, DEFAULT_TEMPLATE, TEMPLATE_OPTIONS,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_full_draft_submits_every_field() {
    let mut draft = EventDraft::new();
    for field in FormField::ALL {
        draft.set_by_name(field.name(), format!("value-{}", field.name()));
    }
    draft.select_template("elegant");

    let mut submitted = None;
    assert!(submit_draft(&draft, false, |data| submitted = Some(data)));

    let data = submitted.unwrap();
    assert_eq!(data.topic, "value-topic");
    assert_eq!(data.reg_url, "value-regUrl");
    assert_eq!(data.extra_info.as_deref(), Some("value-extraInfo"));
    assert_eq!(data.schedule.as_deref(), Some("value-schedule"));
    assert_eq!(data.template, "elegant");
}

#[wasm_bindgen_test]
fn test_default_template_is_first_card() {
    assert_eq!(EventDraft::new().template(), DEFAULT_TEMPLATE);
    assert_eq!(TEMPLATE_OPTIONS[0].icon, "🩺");
}
