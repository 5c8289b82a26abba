//! Event Form
//!
//! Template picker plus the event detail fields. Submitting hands the current
//! draft to the shell.

use leptos::ev;
use leptos::prelude::*;

use crate::bindings::EventData;
use crate::services::form_state::{
    submit_draft, EventDraft, FieldKind, FormField, TemplateOption, FORM_ROWS, TEMPLATE_OPTIONS,
};

const INPUT_CLASSES: &str = "w-full px-4 py-2 border border-gray-200 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent outline-none transition-all duration-200 bg-white text-base";
const LABEL_CLASSES: &str = "block text-sm font-medium text-gray-700 mb-1";

// ============================================================================
// Components
// ============================================================================

#[component]
fn TemplateCard(
    option: TemplateOption,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=move || format!(
                "cursor-pointer border-2 rounded-xl p-3 text-center transition-all duration-200 {}",
                if selected.get() {
                    "border-blue-600 bg-blue-50"
                } else {
                    "border-gray-100 bg-gray-50 hover:border-gray-200"
                }
            )
            on:click=move |_| on_select.run(option.id)
        >
            <div class="text-2xl mb-1">{option.icon}</div>
            <div class="text-sm font-bold text-gray-800">{option.name}</div>
            <div class="text-[10px] text-gray-500">{option.description}</div>
        </div>
    }
}

#[component]
fn FieldInput(field: FormField, draft: RwSignal<EventDraft>) -> impl IntoView {
    let value = move || draft.with(|d| d.value(field).to_string());
    let on_input = move |evt: ev::Event| {
        let value = event_target_value(&evt);
        draft.update(|d| d.set(field, value));
    };

    let control = match field.kind() {
        FieldKind::TextArea { rows } => view! {
            <textarea
                name=field.name()
                rows=rows.to_string()
                required=field.is_required()
                placeholder=field.placeholder()
                class=INPUT_CLASSES
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        FieldKind::Url => view! {
            <input
                type="url"
                name=field.name()
                required=field.is_required()
                placeholder=field.placeholder()
                class=INPUT_CLASSES
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        FieldKind::Text => view! {
            <input
                type="text"
                name=field.name()
                required=field.is_required()
                placeholder=field.placeholder()
                class=INPUT_CLASSES
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label class=LABEL_CLASSES>{field.label()}</label>
            {control}
        </div>
    }
}

#[component]
fn SubmitButton(#[prop(into)] is_loading: Signal<bool>) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || is_loading.get()
            class=move || format!(
                "w-full py-4 px-6 text-white font-bold rounded-xl transition-all duration-300 transform active:scale-95 shadow-lg flex items-center justify-center gap-2 {}",
                if is_loading.get() {
                    "bg-gray-400 cursor-not-allowed"
                } else {
                    "bg-blue-700 hover:bg-blue-800 hover:shadow-blue-200"
                }
            )
        >
            <Show
                when=move || is_loading.get()
                fallback=|| view! {
                    <span class="leading-none flex items-center h-full">"生成醫學專業網頁"</span>
                }
            >
                <span class="animate-spin h-5 w-5 border-2 border-white border-t-transparent rounded-full"></span>
                <span class="leading-none flex items-center h-full">"正在生成醫學專業內容..."</span>
            </Show>
        </button>
    }
}

/// Event detail form.
#[component]
pub fn EventForm(
    on_submit: Callback<EventData>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    let draft = RwSignal::new(EventDraft::new());

    let select_template = Callback::new(move |id: &'static str| {
        draft.update(|d| d.select_template(id));
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        draft.with_untracked(|d| {
            submit_draft(d, is_loading.get_untracked(), |data| on_submit.run(data));
        });
    };

    view! {
        <form
            on:submit=handle_submit
            class="space-y-6 bg-white p-8 rounded-2xl shadow-sm border border-gray-100"
        >
            <div>
                <label class=LABEL_CLASSES>"選擇設計風格 (醫學專業系列)"</label>
                <div class="grid grid-cols-2 sm:grid-cols-4 gap-3 mt-2">
                    {TEMPLATE_OPTIONS
                        .into_iter()
                        .map(|option| {
                            let selected = Signal::derive(move || {
                                draft.with(|d| d.template() == option.id)
                            });
                            view! {
                                <TemplateCard option selected on_select=select_template />
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {FORM_ROWS
                .iter()
                .map(|row| {
                    let fields = row
                        .iter()
                        .map(|&field| view! { <FieldInput field draft /> })
                        .collect_view();
                    if row.len() > 1 {
                        view! { <div class="grid grid-cols-1 md:grid-cols-2 gap-4">{fields}</div> }
                            .into_any()
                    } else {
                        fields.into_any()
                    }
                })
                .collect_view()}

            <SubmitButton is_loading />
        </form>
    }
}
