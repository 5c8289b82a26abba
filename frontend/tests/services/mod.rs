//! Service tests module
//!
//! Frontend service tests using wasm-bindgen-test for browser testing.

pub mod browser_tests;
pub mod form_state_tests;
pub mod logging_tests;
pub mod preview_render_tests;
pub mod shell_state_tests;
