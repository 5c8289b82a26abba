//! Generated Preview
//!
//! Shows the generated page in a sandboxed iframe with copy and download
//! actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bindings::GenerationResult;
use crate::services::browser::{alert, BrowserClipboard, BrowserFileSaver, IframeView};
use crate::services::preview_actions::{copy_rich_content, download_html, ISOLATED_VIEW_SANDBOX};

pub const PREVIEW_IFRAME_ID: &str = "preview-iframe";

#[component]
pub fn GeneratedPreview(result: GenerationResult) -> impl IntoView {
    let srcdoc = result.preview_html.clone();

    let on_copy = move |_| {
        spawn_local(async move {
            let outcome =
                copy_rich_content(&IframeView::new(PREVIEW_IFRAME_ID), &BrowserClipboard).await;
            alert(outcome.message());
        });
    };

    let on_download = move |_| download_html(&result, &BrowserFileSaver::html());

    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 overflow-hidden mt-8">
            <div class="bg-gray-50 border-b border-gray-100 px-6 py-4 flex flex-wrap justify-between items-center gap-4">
                <h3 class="text-sm font-bold text-gray-700 flex items-center gap-2">
                    "📋 醫學網頁內容預覽"
                </h3>
                <div class="flex gap-3">
                    <button
                        on:click=on_copy
                        class="flex items-center justify-center gap-2 px-5 py-2.5 bg-blue-700 text-white text-sm font-bold rounded-lg hover:bg-blue-800 shadow-sm transition-all active:scale-95"
                    >
                        <span class="leading-none inline-flex items-center">"複製富文本內容"</span>
                    </button>
                    <button
                        on:click=on_download
                        class="flex items-center justify-center gap-2 px-5 py-2.5 bg-white border border-gray-200 text-gray-700 text-sm font-bold rounded-lg hover:bg-gray-50 shadow-sm transition-all active:scale-95"
                    >
                        <span class="leading-none inline-flex items-center">"下載 HTML"</span>
                    </button>
                </div>
            </div>

            <div class="p-8">
                <div class="mb-6 p-4 bg-blue-50 rounded-xl text-xs text-blue-900 leading-relaxed border border-blue-100 flex items-start gap-3">
                    <span class="text-xl">"🩺"</span>
                    <div>
                        <strong>"已優化為醫學專業佈局："</strong>
                        "包含嚴謹的框線美學、專業醫療色調與結構化排版。點擊「複製」按鈕後，直接貼上至編輯器即可保留完整視覺細節。"
                    </div>
                </div>

                <div class="border border-gray-200 rounded-2xl overflow-hidden h-[850px] bg-white shadow-inner relative">
                    <iframe
                        id=PREVIEW_IFRAME_ID
                        srcdoc=srcdoc
                        sandbox=ISOLATED_VIEW_SANDBOX
                        title="Medical Content Preview"
                        class="w-full h-full border-none"
                    ></iframe>
                </div>
            </div>
        </div>
    }
}
