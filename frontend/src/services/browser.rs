//! Browser implementations of the preview capabilities.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::preview_actions::{
    ClipboardError, ClipboardWriter, FileSaver, IsolatedView, HTML_MIME, PLAIN_MIME,
};

// ============================================================================
// Clipboard API
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = ClipboardItem)]
    type JsClipboardItem;

    #[wasm_bindgen(constructor, js_class = "ClipboardItem", catch)]
    fn new(items: &js_sys::Object) -> Result<JsClipboardItem, JsValue>;

    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = "write", catch)]
    async fn clipboard_write(items: &js_sys::Array) -> Result<JsValue, JsValue>;
}

fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

fn blob(content: &str, mime: &str) -> Result<web_sys::Blob, JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
}

/// `{ "text/html": Blob, "text/plain": Blob }`, the payload of one
/// `ClipboardItem`.
pub fn clipboard_flavours(html: &str, text: &str) -> Result<js_sys::Object, JsValue> {
    let html_blob = blob(html, HTML_MIME)?;
    let text_blob = blob(text, PLAIN_MIME)?;
    let flavours = js_sys::Object::new();
    js_sys::Reflect::set(&flavours, &JsValue::from_str(HTML_MIME), &html_blob)?;
    js_sys::Reflect::set(&flavours, &JsValue::from_str(PLAIN_MIME), &text_blob)?;
    Ok(flavours)
}

/// `navigator.clipboard.write` with one `text/html` + `text/plain` item.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl BrowserClipboard {
    fn item(html: &str, text: &str) -> Result<js_sys::Array, JsValue> {
        let item = JsClipboardItem::new(&clipboard_flavours(html, text)?)?;
        Ok(js_sys::Array::of1(&item))
    }
}

#[async_trait(?Send)]
impl ClipboardWriter for BrowserClipboard {
    async fn write(&self, html: &str, text: &str) -> Result<(), ClipboardError> {
        let items =
            Self::item(html, text).map_err(|e| ClipboardError::Unavailable(describe(&e)))?;
        clipboard_write(&items)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::WriteFailed(describe(&e)))
    }
}

// ============================================================================
// Downloads
// ============================================================================

/// Triggers a download through a temporary object URL.
#[derive(Debug, Clone)]
pub struct BrowserFileSaver {
    mime: &'static str,
}

impl BrowserFileSaver {
    pub fn html() -> Self {
        Self { mime: HTML_MIME }
    }

    fn try_save(&self, bytes: &[u8], filename: &str) -> Result<(), JsValue> {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(self.mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let anchor = document.create_element("a")?;
        anchor.set_attribute("href", &url)?;
        anchor.set_attribute("download", filename)?;
        if let Some(body) = document.body() {
            body.append_child(&anchor)?;
        }
        if let Some(el) = anchor.dyn_ref::<web_sys::HtmlElement>() {
            el.click();
        }
        anchor.remove();
        web_sys::Url::revoke_object_url(&url)?;
        Ok(())
    }
}

impl FileSaver for BrowserFileSaver {
    fn save(&self, bytes: &[u8], filename: &str) {
        if let Err(e) = self.try_save(bytes, filename) {
            log::error!("Failed to save {}: {}", filename, describe(&e));
        }
    }
}

// ============================================================================
// Preview iframe
// ============================================================================

/// The preview iframe, looked up by element id.
#[derive(Debug, Clone, Copy)]
pub struct IframeView {
    element_id: &'static str,
}

impl IframeView {
    pub fn new(element_id: &'static str) -> Self {
        Self { element_id }
    }
}

impl IsolatedView for IframeView {
    fn body_markup(&self) -> Option<String> {
        let iframe = web_sys::window()?
            .document()?
            .get_element_by_id(self.element_id)?
            .dyn_into::<web_sys::HtmlIFrameElement>()
            .ok()?;
        let body = iframe.content_document()?.body()?;
        Some(body.inner_html())
    }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("Alert failed: {}", describe(&e));
        }
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
