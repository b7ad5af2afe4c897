//! Integration tests against a live OpenAI-compatible endpoint.
//! These tests require VLLM_BASE_URL in the environment to run.

#[cfg(test)]
mod tests {
    use gpt_oss_chat::chat::{ChatConfig, ChatSession, Protocol};
    use gpt_oss_chat::{ChatCompletionParams, Message, OpenAi};

    fn live_client() -> Option<OpenAi> {
        let base_url = std::env::var("VLLM_BASE_URL").ok()?;
        Some(OpenAi::with_options(None, Some(base_url), None).expect("failed to create client"))
    }

    fn live_model() -> String {
        std::env::var("VLLM_MODEL").unwrap_or_else(|_| "openai/gpt-oss-120b".to_string())
    }

    #[tokio::test]
    async fn chat_completions_round_trip() {
        let Some(client) = live_client() else {
            eprintln!("Skipping test: VLLM_BASE_URL not set");
            return;
        };

        let params = ChatCompletionParams::new(
            live_model(),
            vec![
                Message::system("Answer with one word."),
                Message::user("Say 'ok'."),
            ],
        );

        let response = client.chat_completions(params).await;
        assert!(response.is_ok(), "request should succeed: {response:?}");
    }

    #[tokio::test]
    async fn chat_session_turn() {
        let Some(client) = live_client() else {
            eprintln!("Skipping test: VLLM_BASE_URL not set");
            return;
        };

        let config = ChatConfig::new()
            .with_model(live_model())
            .with_system_prompt("Answer with one word.");
        let mut session = ChatSession::new(client, config);

        let reply = session.send("Say 'ok'.").await;
        assert!(reply.is_ok(), "turn should succeed: {reply:?}");
        // system + user + assistant
        assert_eq!(session.history().len(), 3);
    }

    #[tokio::test]
    async fn responses_session_turn() {
        let Some(client) = live_client() else {
            eprintln!("Skipping test: VLLM_BASE_URL not set");
            return;
        };

        let config = ChatConfig::new()
            .with_model(live_model())
            .with_system_prompt("Answer with one word.")
            .with_protocol(Protocol::Responses);
        let mut session = ChatSession::new(client, config);

        let reply = session.send("Say 'ok'.").await;
        assert!(reply.is_ok(), "turn should succeed: {reply:?}");
        assert_eq!(session.history().len(), 3);
    }
}
