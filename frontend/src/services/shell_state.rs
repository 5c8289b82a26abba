//! Generation lifecycle state
//!
//! Tracks the loading flag, the last result and the user-facing error for the
//! page shell. Only one generation runs at a time.

use async_trait::async_trait;
use leptos::prelude::*;

use crate::bindings::{EventData, GenerationResult, ServiceError};

/// Message shown for every generation failure.
pub const GENERATION_FAILED_MESSAGE: &str = "生成過程中發生錯誤，請稍後再試。";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    pub loading: bool,
    pub result: Option<GenerationResult>,
    pub error: Option<String>,
}

impl ShellState {
    /// Enter the loading state. Returns false if a generation is already running.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        self.result = None;
        true
    }

    pub fn succeed(&mut self, result: GenerationResult) {
        self.loading = false;
        self.error = None;
        self.result = Some(result);
    }

    /// Record a failure. The cause is logged, the user sees the generic message.
    pub fn fail(&mut self, cause: &str) {
        log::error!("Generation failed: {}", cause);
        self.loading = false;
        self.result = None;
        self.error = Some(GENERATION_FAILED_MESSAGE.to_string());
    }

    pub fn show_empty_hint(&self) -> bool {
        self.result.is_none() && !self.loading
    }
}

/// Something that can produce a page from event data.
#[async_trait(?Send)]
pub trait GenerationService {
    async fn generate(&self, data: &EventData) -> Result<GenerationResult, ServiceError>;
}

/// Storage for the shell state.
pub trait ShellStore {
    fn with_state<R>(&self, f: impl FnOnce(&mut ShellState) -> R) -> Option<R>;
}

impl ShellStore for RwSignal<ShellState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ShellState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Run one generation against `service`, driving the shell through
/// loading -> result | error. Returns false when rejected as a duplicate.
pub async fn run_generation<S, G>(store: &S, service: &G, data: EventData) -> bool
where
    S: ShellStore,
    G: GenerationService + ?Sized,
{
    if store.with_state(ShellState::begin) != Some(true) {
        log::debug!("Generation already in flight, ignoring request");
        return false;
    }

    log::info!("Generating page for '{}' ({})", data.topic, data.template);
    match service.generate(&data).await {
        Ok(result) => {
            store.with_state(|s| s.succeed(result));
        }
        Err(e) => {
            store.with_state(|s| s.fail(&e.to_string()));
        }
    }
    true
}
