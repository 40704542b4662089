use thiserror::Error;

use crate::intent::Intent;
use crate::types::{GetMonitorsResponse, Monitor, MonitorState};

const DEFAULT_API_BASE: &str = "https://api.uptimerobot.com";

/// How many monitors a list reply names before cutting over to "...and N more"
const LIST_LIMIT: usize = 5;

/// Everything that can go wrong answering a chat query.
///
/// All variants are recoverable: the display text is the reply shown to the
/// user, and the HTTP layer returns it with status 200.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("⚠️ API key not set. Add UPTIMEROBOT_API_KEY to the environment to enable monitor queries.")]
    MissingApiKey,
    #[error("UptimeRobot returned an error: {0}")]
    Provider(String),
    #[error("Could not reach UptimeRobot: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from UptimeRobot: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Client for the UptimeRobot v2 `getMonitors` endpoint.
///
/// One outbound POST per `summarize` call; no retries, no pagination.
#[derive(Clone)]
pub struct MonitorClient {
    http: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
}

impl MonitorClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_api_base(api_key, DEFAULT_API_BASE)
    }

    /// Point the client at a different provider base URL (used by tests to
    /// target a local mock server).
    pub fn with_api_base(api_key: Option<String>, api_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Fetch the monitor list and render the summary for `intent`.
    ///
    /// `message` is the original user text; the overview reply echoes it.
    pub async fn summarize(&self, intent: Intent, message: &str) -> Result<String, MonitorError> {
        let api_key = self.api_key.as_deref().ok_or(MonitorError::MissingApiKey)?;
        let monitors = self.fetch_monitors(api_key).await?;

        Ok(match intent {
            Intent::ListMonitors => render_monitor_list(&monitors),
            Intent::Incidents => render_incidents(&monitors),
            Intent::Overview => render_overview(&monitors, message),
        })
    }

    async fn fetch_monitors(&self, api_key: &str) -> Result<Vec<Monitor>, MonitorError> {
        let response = self
            .http
            .post(format!("{}/v2/getMonitors", self.api_base))
            .form(&[("api_key", api_key), ("format", "json"), ("logs", "1")])
            .send()
            .await?;

        let body = response.text().await?;
        let envelope: GetMonitorsResponse = serde_json::from_str(&body)?;

        if envelope.stat != "ok" {
            return Err(MonitorError::Provider(provider_error_text(
                envelope.error.as_ref(),
            )));
        }

        Ok(envelope.monitors)
    }
}

/// The `error` field comes back either as a bare string or as an object with
/// a `message` key, depending on the failure.
fn provider_error_text(error: Option<&serde_json::Value>) -> String {
    match error {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(serde_json::Value::Object(fields)) => fields
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| serde_json::Value::Object(fields.clone()).to_string()),
        Some(other) => other.to_string(),
        None => "unknown error".to_string(),
    }
}

fn render_monitor_list(monitors: &[Monitor]) -> String {
    let total = monitors.len();
    let up = count_state(monitors, MonitorState::Up);
    let down = count_state(monitors, MonitorState::Down);
    let paused = count_state(monitors, MonitorState::Paused);
    let unknown = total - up - down - paused;

    let mut header = format!("📡 {total} monitors: {up} up, {down} down, {paused} paused");
    if unknown > 0 {
        header.push_str(&format!(", {unknown} unknown"));
    }

    let mut lines = vec![header];
    for monitor in monitors.iter().take(LIST_LIMIT) {
        lines.push(format!(
            "{} {} ({})",
            monitor.state().glyph(),
            monitor.friendly_name,
            monitor.url
        ));
    }
    if total > LIST_LIMIT {
        lines.push(format!("...and {} more", total - LIST_LIMIT));
    }

    lines.join("\n")
}

fn render_incidents(monitors: &[Monitor]) -> String {
    let down: Vec<&Monitor> = monitors
        .iter()
        .filter(|m| m.state() == MonitorState::Down)
        .collect();

    if down.is_empty() {
        return "✅ No active incidents. All monitors are up.".to_string();
    }

    let mut lines = vec![format!("🚨 {} monitor(s) down:", down.len())];
    for monitor in down {
        let mut line = format!("🔴 {} ({})", monitor.friendly_name, monitor.url);
        if let Some(duration) = monitor.duration {
            line.push_str(&format!(". Down for {} minutes", duration / 60));
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn render_overview(monitors: &[Monitor], message: &str) -> String {
    let total = monitors.len();
    let up = count_state(monitors, MonitorState::Up);
    format!("{up} of {total} monitors are up. You said: \"{message}\"")
}

fn count_state(monitors: &[Monitor], state: MonitorState) -> usize {
    monitors.iter().filter(|m| m.state() == state).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn monitor(status: i64, name: &str, duration: Option<u64>) -> Monitor {
        Monitor {
            friendly_name: name.to_string(),
            url: format!("https://{}.example.com", name),
            status,
            duration,
        }
    }

    #[test]
    fn list_counts_each_status_class() {
        let monitors = vec![
            monitor(2, "web", None),
            monitor(9, "api", Some(600)),
            monitor(0, "staging", None),
        ];
        let summary = render_monitor_list(&monitors);
        assert!(summary.contains("3 monitors"), "{summary}");
        assert!(summary.contains("1 up, 1 down, 1 paused"), "{summary}");
        assert!(!summary.contains("unknown"), "{summary}");
    }

    #[test]
    fn list_truncates_after_five_entries() {
        let monitors: Vec<Monitor> = (0..7)
            .map(|i| monitor(2, &format!("site{i}"), None))
            .collect();
        let summary = render_monitor_list(&monitors);
        assert!(summary.contains("site4"), "{summary}");
        assert!(!summary.contains("site5"), "{summary}");
        assert!(summary.contains("...and 2 more"), "{summary}");
    }

    #[test]
    fn incidents_report_down_duration_in_whole_minutes() {
        let monitors = vec![monitor(2, "web", None), monitor(9, "api", Some(600))];
        let summary = render_incidents(&monitors);
        assert!(summary.contains("Down for 10 minutes"), "{summary}");
        assert!(summary.contains("api"), "{summary}");
        assert!(!summary.contains("web ("), "{summary}");
    }

    #[test]
    fn incidents_all_clear_when_nothing_is_down() {
        let monitors = vec![monitor(2, "web", None)];
        let summary = render_incidents(&monitors);
        assert!(summary.contains("No active incidents"), "{summary}");
    }

    #[test]
    fn overview_echoes_the_original_message() {
        let monitors = vec![monitor(2, "web", None), monitor(9, "api", None)];
        let summary = render_overview(&monitors, "good morning");
        assert!(summary.contains("1 of 2 monitors are up"), "{summary}");
        assert!(summary.contains("good morning"), "{summary}");
    }

    #[test]
    fn provider_error_text_handles_both_wire_shapes() {
        assert_eq!(
            provider_error_text(Some(&json!("invalid key"))),
            "invalid key"
        );
        assert_eq!(
            provider_error_text(Some(&json!({"type": "invalid_parameter", "message": "api_key is wrong"}))),
            "api_key is wrong"
        );
        assert_eq!(provider_error_text(None), "unknown error");
    }
}
