pub mod event;
pub mod llm;
pub mod logging;
pub mod prompt;
