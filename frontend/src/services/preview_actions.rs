//! Preview actions
//!
//! Copy and download for a generated page. Browser capabilities are injected
//! through the traits below so the actions run without a DOM in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::bindings::GenerationResult;

pub const DOWNLOAD_FILE_NAME: &str = "medical-event.html";
pub const HTML_MIME: &str = "text/html";
pub const PLAIN_MIME: &str = "text/plain";

/// Same-origin access lets the shell read the rendered body for copy, and
/// popups let the page's `target="_blank"` registration link open. Scripts
/// inside the generated page stay disabled.
pub const ISOLATED_VIEW_SANDBOX: &str =
    "allow-same-origin allow-popups allow-popups-to-escape-sandbox";

pub const COPY_SUCCESS_MESSAGE: &str = "內容已成功複製！可直接貼至編輯器中。";
pub const COPY_FAILURE_MESSAGE: &str = "複製失敗，請手動複製。";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Preview document is not loaded yet")]
    ViewNotReady,

    #[error("Clipboard API unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write rejected: {0}")]
    WriteFailed(String),
}

/// Writes one clipboard item carrying both HTML and plain-text flavours.
#[async_trait(?Send)]
pub trait ClipboardWriter {
    async fn write(&self, html: &str, text: &str) -> Result<(), ClipboardError>;
}

/// Saves bytes under a file name (a browser download).
pub trait FileSaver {
    fn save(&self, bytes: &[u8], filename: &str);
}

/// The isolated document showing the generated page.
pub trait IsolatedView {
    /// Rendered body markup, or `None` while the document is not loaded.
    fn body_markup(&self) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(ClipboardError),
}

impl CopyOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            CopyOutcome::Copied => COPY_SUCCESS_MESSAGE,
            CopyOutcome::Failed(_) => COPY_FAILURE_MESSAGE,
        }
    }
}

/// Copy the rendered body of `view` as rich HTML plus its raw markup as text.
pub async fn copy_rich_content(
    view: &dyn IsolatedView,
    clipboard: &dyn ClipboardWriter,
) -> CopyOutcome {
    let Some(markup) = view.body_markup() else {
        log::error!("Copy failed: {}", ClipboardError::ViewNotReady);
        return CopyOutcome::Failed(ClipboardError::ViewNotReady);
    };

    match clipboard.write(&markup, &markup).await {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            log::error!("Copy failed: {}", e);
            CopyOutcome::Failed(e)
        }
    }
}

/// Save the full generated document as `medical-event.html`.
pub fn download_html(result: &GenerationResult, saver: &dyn FileSaver) {
    saver.save(result.preview_html.as_bytes(), DOWNLOAD_FILE_NAME);
}
