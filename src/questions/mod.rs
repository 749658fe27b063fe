pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{ProviderError, QuestionProvider};
pub use providers::{GeminiProvider, LmStudioProvider};
pub use types::{Question, QuestionPayload};
