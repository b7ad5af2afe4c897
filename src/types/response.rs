use serde::{Deserialize, Serialize};

/// Parameters for a Responses API request.
///
/// This variant is single-turn: the system prompt travels in `instructions`
/// and only the latest user text is sent in `input`. No prior turns are
/// transmitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseCreateParams {
    /// The model that will handle the request.
    pub model: String,

    /// Instruction text establishing the assistant's behavior.
    pub instructions: String,

    /// The user text for this turn.
    pub input: String,
}

impl ResponseCreateParams {
    /// Create new response parameters.
    pub fn new(
        model: impl Into<String>,
        instructions: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            instructions: instructions.into(),
            input: input.into(),
        }
    }
}

/// A Responses API response.
///
/// Only the aggregated output text is consumed; everything else the endpoint
/// sends is ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseObject {
    /// The aggregated reply text. The endpoint may omit it.
    pub output_text: Option<String>,
}

impl ResponseObject {
    /// Returns the reply text, normalizing an absent value to an empty string.
    pub fn text(&self) -> String {
        self.output_text.clone().unwrap_or_default()
    }
}
