use axum::{extract::State, Json};
use bytes::Bytes;

use crate::intent;
use crate::routes::AppState;
use crate::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, SimpleChatReply,
    SimpleChatRequest, Usage,
};

/// Substituted when the inbound body is missing or doesn't parse
const DEFAULT_MESSAGE: &str = "Hello";

/// `POST /v1/chat/completions`, the OpenAI-compatible surface.
pub async fn chat_completions(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<ChatCompletionResponse> {
    let user_message = extract_completion_message(&body);
    let reply = answer(&state, &user_message).await;

    let created = chrono::Utc::now().timestamp();
    Json(ChatCompletionResponse {
        id: format!("chatcmpl-{created}"),
        object: "chat.completion".to_string(),
        created,
        choices: vec![Choice {
            index: 0,
            message: ChatMessage {
                role: "assistant".to_string(),
                content: reply.clone(),
            },
            finish_reason: "stop".to_string(),
        }],
        usage: Usage::estimate(&user_message, &reply),
    })
}

/// `POST /chat`: plain `{message}` in, `{reply}` out.
pub async fn simple_chat(State(state): State<AppState>, body: Bytes) -> Json<SimpleChatReply> {
    let user_message = match serde_json::from_slice::<SimpleChatRequest>(&body) {
        Ok(request) => request.message,
        Err(e) => {
            tracing::warn!("failed to parse /chat body, defaulting message: {e}");
            DEFAULT_MESSAGE.to_string()
        }
    };

    let reply = answer(&state, &user_message).await;
    Json(SimpleChatReply { reply })
}

/// Classify the message and produce the reply text. Monitor errors become
/// the reply itself; every chat request answers with 200.
async fn answer(state: &AppState, message: &str) -> String {
    let intent = intent::classify(message);
    tracing::debug!("classified message as {:?}", intent);

    match state.monitor.summarize(intent, message).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!("monitor query failed: {e}");
            e.to_string()
        }
    }
}

/// Pull the last message's content out of an OpenAI-style body, tolerating
/// any shape failure.
fn extract_completion_message(body: &Bytes) -> String {
    match serde_json::from_slice::<ChatCompletionRequest>(body) {
        Ok(request) => match request.messages.last() {
            Some(last) => last.content.clone(),
            None => {
                tracing::warn!("chat completion request had no messages, defaulting");
                DEFAULT_MESSAGE.to_string()
            }
        },
        Err(e) => {
            tracing::warn!("failed to parse chat completion body, defaulting message: {e}");
            DEFAULT_MESSAGE.to_string()
        }
    }
}
