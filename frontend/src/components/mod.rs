pub mod event_form;
pub mod generated_preview;

pub use event_form::EventForm;
pub use generated_preview::GeneratedPreview;
