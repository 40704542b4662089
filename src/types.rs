use serde::{Deserialize, Serialize};

/// OpenAI-style chat completion request body
#[derive(Debug, Deserialize)]
pub struct ChatCompletionRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Simple chat request body for the `/chat` route
#[derive(Debug, Deserialize)]
pub struct SimpleChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SimpleChatReply {
    pub reply: String,
}

/// OpenAI-compatible chat completion response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Choice {
    pub index: u32,
    pub message: ChatMessage,
    pub finish_reason: String,
}

/// Token accounting on the response envelope.
///
/// Counts are a `chars / 4` estimate, not tokenizer output; clients should
/// treat them as indicative only.
#[derive(Debug, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl Usage {
    pub fn estimate(prompt: &str, completion: &str) -> Self {
        let prompt_tokens = estimate_tokens(prompt);
        let completion_tokens = estimate_tokens(completion);
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

fn estimate_tokens(text: &str) -> u32 {
    (text.chars().count() / 4) as u32
}

/// UptimeRobot `getMonitors` response envelope
#[derive(Debug, Deserialize)]
pub struct GetMonitorsResponse {
    pub stat: String,
    #[serde(default)]
    pub monitors: Vec<Monitor>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// A single watched endpoint as UptimeRobot reports it
#[derive(Debug, Deserialize)]
pub struct Monitor {
    #[serde(default)]
    pub friendly_name: String,
    #[serde(default)]
    pub url: String,
    pub status: i64,
    /// Seconds spent in the current status, when the provider includes it
    #[serde(default)]
    pub duration: Option<u64>,
}

/// Decoded monitor status code: 2 = up, 9 = down, 0 = paused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Up,
    Down,
    Paused,
    Unknown,
}

impl MonitorState {
    pub fn from_code(code: i64) -> Self {
        match code {
            2 => MonitorState::Up,
            9 => MonitorState::Down,
            0 => MonitorState::Paused,
            _ => MonitorState::Unknown,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            MonitorState::Up => "✅",
            MonitorState::Down => "🔴",
            MonitorState::Paused => "⏸️",
            MonitorState::Unknown => "❓",
        }
    }
}

impl Monitor {
    pub fn state(&self) -> MonitorState {
        MonitorState::from_code(self.status)
    }
}
