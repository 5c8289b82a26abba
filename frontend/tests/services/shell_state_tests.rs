//! Shell State Tests
//!
//! Drives the generation lifecycle through a reactive signal, the way the
//! app shell does.

use async_trait::async_trait;
use leptos::prelude::*;
use medeventgen_frontend::bindings::{EventData, GenerationResult, ServiceError};
use medeventgen_frontend::services::shell_state::{
    run_generation, GenerationService, ShellState, GENERATION_FAILED_MESSAGE,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

struct StaticService(Result<&'static str, u16>);

#[async_trait(?Send)]
impl GenerationService for StaticService {
    async fn generate(&self, _data: &EventData) -> Result<GenerationResult, ServiceError> {
        match self.0 {
            Ok(html) => Ok(GenerationResult {
                preview_html: html.to_string(),
            }),
            Err(status) => Err(ServiceError::Status(status)),
        }
    }
}

fn event() -> EventData {
    EventData {
        topic: "Pediatric Vaccination Update".to_string(),
        template: "creative".to_string(),
        ..Default::default()
    }
}

#[wasm_bindgen_test]
async fn test_signal_store_success() {
    let shell = RwSignal::new(ShellState::default());

    let accepted = run_generation(&shell, &StaticService(Ok("<p>Hello</p>")), event()).await;

    assert!(accepted);
    let state = shell.get_untracked();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.result.unwrap().preview_html, "<p>Hello</p>");
}

#[wasm_bindgen_test]
async fn test_signal_store_failure() {
    let shell = RwSignal::new(ShellState::default());

    run_generation(&shell, &StaticService(Err(502)), event()).await;

    let state = shell.get_untracked();
    assert!(!state.loading);
    assert!(state.result.is_none());
    assert_eq!(state.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
}

#[wasm_bindgen_test]
async fn test_signal_store_rejects_while_loading() {
    let shell = RwSignal::new(ShellState {
        loading: true,
        ..Default::default()
    });

    let accepted = run_generation(&shell, &StaticService(Ok("<p>x</p>")), event()).await;

    assert!(!accepted);
    assert!(shell.get_untracked().loading);
    assert!(shell.get_untracked().result.is_none());
}
