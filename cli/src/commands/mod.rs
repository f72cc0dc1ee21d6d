//! Command implementations for the notepad CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod add;
pub mod delete;
pub mod list;
pub mod summarize;

use anyhow::Result;
use serde::Serialize;

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Build the HTTP client shared by all commands.
pub fn build_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().build()?)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Send a request and decode the JSON response, turning error envelopes
/// into [`CliError::Server`].
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.json::<T>().await?;
        Ok(body)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(CliError::Server {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Extract a readable message from an error response body.
///
/// Uses `message`, followed by the `error` detail when present, and falls
/// back to the raw body.
fn error_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };

    match (
        json.get("message").and_then(|v| v.as_str()),
        json.get("error").and_then(|v| v.as_str()),
    ) {
        (Some(message), Some(detail)) => format!("{} ({})", message, detail),
        (Some(message), None) => message.to_string(),
        (None, Some(detail)) => detail.to_string(),
        (None, None) => body.to_string(),
    }
}

/// Truncate a string for display, adding ellipsis if needed.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_message_and_detail() {
        assert_eq!(
            error_message(r#"{"message": "Error saving note!", "error": "db down"}"#),
            "Error saving note! (db down)"
        );
        assert_eq!(
            error_message(r#"{"message": "Title is required!", "code": "BAD_REQUEST"}"#),
            "Title is required!"
        );
        assert_eq!(error_message("plain text"), "plain text");
        assert_eq!(error_message(r#"{"other": 1}"#), r#"{"other": 1}"#);
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
        assert_eq!(truncate("ééééé", 4), "é...");
    }
}
