use serde::{Deserialize, Serialize};

use crate::types::Message;

/// Parameters for a Chat Completions request.
///
/// The full conversation, system turn included, is sent on every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionParams {
    /// The model that will handle the request.
    pub model: String,

    /// The ordered conversation to complete.
    pub messages: Vec<Message>,
}

impl ChatCompletionParams {
    /// Create new chat completion parameters.
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
        }
    }
}

/// The assistant message inside a completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChoiceMessage {
    /// The reply text. The endpoint may send `null`.
    pub content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionChoice {
    /// The assistant message for this choice.
    pub message: ChoiceMessage,
}

/// A Chat Completions response.
///
/// Fields beyond `choices` (id, usage, ...) are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletion {
    /// The completion choices. Non-streaming requests yield exactly one.
    pub choices: Vec<ChatCompletionChoice>,
}

impl ChatCompletion {
    /// Returns the reply text of the first choice.
    ///
    /// An absent choice or a `null` content is normalized to an empty string
    /// rather than treated as an error.
    pub fn text(&self) -> String {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn params_serialize_to_wire_shape() {
        let params = ChatCompletionParams::new(
            "openai/gpt-oss-120b",
            vec![Message::system("be terse"), Message::user("2+2?")],
        );
        let json = to_value(&params).unwrap();

        assert_eq!(
            json,
            json!({
                "model": "openai/gpt-oss-120b",
                "messages": [
                    {"role": "system", "content": "be terse"},
                    {"role": "user", "content": "2+2?"}
                ]
            })
        );
    }

    #[test]
    fn completion_text_from_first_choice() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "choices": [{"message": {"content": "4"}}]
        }))
        .unwrap();
        assert_eq!(completion.text(), "4");
    }

    #[test]
    fn completion_null_content_normalized_to_empty() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "choices": [{"message": {"content": null}}]
        }))
        .unwrap();
        assert_eq!(completion.text(), "");
    }

    #[test]
    fn completion_no_choices_normalized_to_empty() {
        let completion: ChatCompletion =
            serde_json::from_value(json!({"choices": []})).unwrap();
        assert_eq!(completion.text(), "");
    }

    #[test]
    fn completion_ignores_extra_fields() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [{"message": {"content": "hi", "role": "assistant"}, "index": 0}],
            "usage": {"prompt_tokens": 3, "completion_tokens": 1}
        }))
        .unwrap();
        assert_eq!(completion.text(), "hi");
    }
}
