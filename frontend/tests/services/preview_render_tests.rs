//! Preview Render Tests
//!
//! Mounts `GeneratedPreview` and inspects the isolated iframe it renders.

use leptos::prelude::*;
use medeventgen_frontend::bindings::GenerationResult;
use medeventgen_frontend::components::generated_preview::PREVIEW_IFRAME_ID;
use medeventgen_frontend::components::GeneratedPreview;
use medeventgen_frontend::services::preview_actions::ISOLATED_VIEW_SANDBOX;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_preview_iframe_holds_exact_markup_and_sandbox() {
    leptos::mount::mount_to_body(|| {
        let result = GenerationResult {
            preview_html: "<p>Hello</p>".to_string(),
        };
        view! { <GeneratedPreview result /> }
    });

    let document = web_sys::window().unwrap().document().unwrap();
    let iframe = document
        .get_element_by_id(PREVIEW_IFRAME_ID)
        .expect("preview iframe rendered");

    assert_eq!(iframe.tag_name().to_lowercase(), "iframe");
    assert_eq!(iframe.get_attribute("srcdoc").as_deref(), Some("<p>Hello</p>"));

    let sandbox = iframe.get_attribute("sandbox").unwrap_or_default();
    assert_eq!(sandbox, ISOLATED_VIEW_SANDBOX);
    assert!(!sandbox.split_whitespace().any(|flag| flag == "allow-scripts"));
}
