//! SUMMARIZE command - Summarize text through the server.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output};

/// Arguments for the summarize command.
#[derive(Args)]
pub struct SummarizeArgs {
    /// Text to summarize
    pub text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummarizeRequest<'a> {
    note_content: &'a str,
}

/// Response from the summarize endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

impl HumanReadable for SummarizeResponse {
    fn print_human(&self) {
        println!("{}", "Summary".green().bold());
        println!();
        println!("  {}", self.summary);
    }
}

/// Execute the summarize command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: SummarizeArgs,
) -> Result<()> {
    let response = summarize(client, base_url, &args.text).await?;
    output(&response, human)
}

async fn summarize(
    client: &reqwest::Client,
    base_url: &str,
    text: &str,
) -> Result<SummarizeResponse> {
    let url = format!("{}/api/summarize", base_url);
    Ok(make_request(client.post(&url).json(&SummarizeRequest { note_content: text })).await?)
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn sends_note_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/summarize"))
            .and(body_json(serde_json::json!({"noteContent": "long text"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"summary": "short"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = summarize(&reqwest::Client::new(), &server.uri(), "long text")
            .await
            .unwrap();
        assert_eq!(response.summary, "short");
    }
}
