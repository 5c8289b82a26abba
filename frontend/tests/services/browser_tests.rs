//! Browser Capability Tests
//!
//! Exercises the DOM-backed preview capabilities in a real browser.

use medeventgen_frontend::services::browser::{
    clipboard_flavours, current_year, BrowserFileSaver, IframeView,
};
use medeventgen_frontend::services::preview_actions::{FileSaver, IsolatedView};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn test_missing_iframe_has_no_markup() {
    assert_eq!(IframeView::new("no-such-iframe").body_markup(), None);
}

#[wasm_bindgen_test]
fn test_non_iframe_element_has_no_markup() {
    let div = document().create_element("div").unwrap();
    div.set_id("not-an-iframe");
    document().body().unwrap().append_child(&div).unwrap();

    assert_eq!(IframeView::new("not-an-iframe").body_markup(), None);

    div.remove();
}

#[wasm_bindgen_test]
fn test_same_origin_iframe_body_is_readable() {
    let iframe: web_sys::HtmlIFrameElement = document()
        .create_element("iframe")
        .unwrap()
        .dyn_into()
        .unwrap();
    iframe.set_id("readable-iframe");
    document().body().unwrap().append_child(&iframe).unwrap();

    // A fresh iframe holds an empty about:blank document.
    assert_eq!(
        IframeView::new("readable-iframe").body_markup().as_deref(),
        Some("")
    );

    iframe.remove();
}

#[wasm_bindgen_test]
fn test_download_leaves_no_anchor_behind() {
    let before = document().get_elements_by_tag_name("a").length();
    BrowserFileSaver::html().save(b"<html></html>", "medical-event.html");
    assert_eq!(document().get_elements_by_tag_name("a").length(), before);
}

#[wasm_bindgen_test]
fn test_current_year_is_plausible() {
    assert!(current_year() >= 2024);
}

#[wasm_bindgen_test]
fn test_clipboard_flavours_carry_both_mime_types() {
    let markup = "<h1>研討會</h1>";
    let flavours = clipboard_flavours(markup, markup).unwrap();

    for mime in ["text/html", "text/plain"] {
        let blob: web_sys::Blob = js_sys::Reflect::get(&flavours, &JsValue::from_str(mime))
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(blob.type_(), mime);
        assert_eq!(blob.size() as usize, markup.len());
    }
}
