pub mod gemini;
pub mod lmstudio;

pub use gemini::GeminiProvider;
pub use lmstudio::LmStudioProvider;
