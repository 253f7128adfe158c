pub mod gemini;

pub use gemini::{GeminiApi, GeminiApiError};
