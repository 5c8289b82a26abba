/// MedEventGen - AI-Powered Medical Event Page Generator
///
/// Backend library: event model, prompt builder, Gemini generation client
/// and the HTTP API that serves the browser frontend.

pub mod config;
pub mod core;
pub mod server;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
