//! Logging Tests
//!
//! Failure causes go through `log::error!`; they must reach the console.

use medeventgen_frontend::init_logging;
use medeventgen_frontend::services::shell_state::ShellState;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_failure_cause_reaches_console_logger() {
    init_logging();

    assert!(log::log_enabled!(log::Level::Error));
    assert!(log::max_level() >= log::LevelFilter::Info);

    let mut state = ShellState::default();
    state.fail("upstream exploded: 503 overloaded");
    assert!(state.error.is_some());
}

#[wasm_bindgen_test]
fn test_init_logging_is_idempotent() {
    init_logging();
    init_logging();
    assert!(log::log_enabled!(log::Level::Error));
}
