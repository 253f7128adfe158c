use crate::api::GeminiApi;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Questions matching one of these (trimmed, lowercased) get the canned
/// greeting without ever reaching the model.
const GREETINGS: [&str; 3] = ["hi", "hello", "hey"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    Dummy,
    Gemini,
}

/// Response payload for `/ask`. `confidence` is a fixed value per generation
/// path, not a computed probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub source: AnswerSource,
    pub confidence: f64,
}

/// Picks one of three answer strategies, evaluated in order, first match wins:
/// canned greeting, dummy echo, or a Gemini call.
pub struct AnswerEngine {
    gemini: Option<GeminiApi>,
}

impl AnswerEngine {
    pub fn new(gemini: Option<GeminiApi>) -> Self {
        Self { gemini }
    }

    /// `question` is the caller's original text; the router has already
    /// rejected empty-after-trim input.
    pub async fn answer(&self, question: &str, use_llm: bool) -> Answer {
        let trimmed = question.trim();

        if GREETINGS.contains(&trimmed.to_lowercase().as_str()) {
            return Answer {
                answer: "Hi there! How can I help you?".to_string(),
                source: AnswerSource::Dummy,
                confidence: 0.9,
            };
        }

        let Some(gemini) = self.gemini.as_ref().filter(|_| use_llm) else {
            return Answer {
                answer: format!("(DUMMY) You asked: {question}"),
                source: AnswerSource::Dummy,
                confidence: 0.5,
            };
        };

        match gemini.generate(trimmed).await {
            Ok(text) => Answer {
                answer: text,
                source: AnswerSource::Gemini,
                confidence: 0.9,
            },
            // Upstream failures surface inside a 200 answer payload, never as
            // an HTTP error (see DESIGN.md).
            Err(e) => {
                warn!(error = %e, "Gemini call failed, returning error-annotated answer");
                Answer {
                    answer: format!("(ERROR) Could not fetch from Gemini. {e}"),
                    source: AnswerSource::Gemini,
                    confidence: 0.0,
                }
            }
        }
    }
}
