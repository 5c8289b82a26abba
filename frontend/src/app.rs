use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bindings::{EventData, HttpGenerationService};
use crate::components::{EventForm, GeneratedPreview};
use crate::services::browser::current_year;
use crate::services::shell_state::{run_generation, ShellState};

#[component]
pub fn App() -> impl IntoView {
    let shell = RwSignal::new(ShellState::default());
    let service = HttpGenerationService::default();

    let on_generate = Callback::new(move |data: EventData| {
        let service = service.clone();
        spawn_local(async move {
            run_generation(&shell, &service, data).await;
        });
    });

    let is_loading = Signal::derive(move || shell.with(|s| s.loading));
    let error = move || shell.with(|s| s.error.clone());
    let result = move || shell.with(|s| s.result.clone());

    view! {
        <div class="min-h-screen pb-20 bg-gray-50 text-gray-800">
            <header class="bg-white border-b border-gray-100 sticky top-0 z-10 shadow-sm">
                <div class="max-w-5xl mx-auto px-6 py-4 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <div class="w-8 h-8 bg-blue-700 rounded-lg flex items-center justify-center text-white font-bold text-xl shadow-sm">
                            "M"
                        </div>
                        <h1 class="text-xl font-bold tracking-tight text-blue-900">"MedEventGen"</h1>
                    </div>
                    <p class="text-xs text-gray-400 hidden sm:block">
                        "Professional Medical Content Generator"
                    </p>
                </div>
            </header>

            <main class="max-w-4xl mx-auto px-6 pt-10">
                <div class="text-center mb-10">
                    <h2 class="text-3xl font-bold text-gray-900 mb-3">"醫學活動網頁生成器"</h2>
                    <p class="text-gray-500 max-w-xl mx-auto">
                        "專為醫療研討會、臨床講座與學術會議設計。生成具備信任感、嚴謹度與結構化的專業介紹網頁。"
                    </p>
                </div>

                <EventForm on_submit=on_generate is_loading />

                {move || error().map(|message| view! {
                    <div class="mt-6 p-4 bg-red-50 text-red-600 rounded-xl border border-red-100 flex items-center gap-2">
                        <span>"⚠"</span>
                        {message}
                    </div>
                })}

                {move || result().map(|result| view! { <GeneratedPreview result /> })}

                <Show when=move || shell.with(|s| s.show_empty_hint())>
                    <div class="mt-12 text-center text-gray-300">
                        <div class="mb-4 flex justify-center text-6xl opacity-20">"⚕"</div>
                        <p>"請填寫活動詳情，系統將依據醫學專業標準進行排版"</p>
                    </div>
                </Show>
            </main>

            <footer class="mt-20 border-t border-gray-100 py-8">
                <div class="max-w-5xl mx-auto px-6 text-center text-gray-400 text-sm">
                    {format!("© {} MedEventGen. 為醫療學術交流提供高效內容解決方案。", current_year())}
                </div>
            </footer>
        </div>
    }
}
