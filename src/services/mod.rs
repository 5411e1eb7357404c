pub mod llm_service;
pub mod tutor_service;

pub use llm_service::{ChatPrompt, LlmService};
pub use tutor_service::TutorService;
