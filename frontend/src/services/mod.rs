pub mod browser;
pub mod form_state;
pub mod preview_actions;
pub mod shell_state;
