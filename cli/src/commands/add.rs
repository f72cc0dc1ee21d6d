//! ADD command - Create a new note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Title of the new note
    pub title: String,

    /// Body text of the note
    #[arg(long, short = 'c')]
    pub content: Option<String>,
}

/// Request body for creating a note.
#[derive(Serialize)]
struct CreateNoteRequest {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

/// Response from creating a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateNoteResponse {
    pub message: String,
}

impl HumanReadable for CreateNoteResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
    }
}

/// Execute the add command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: AddArgs,
) -> Result<()> {
    let response = create(client, base_url, args).await?;
    output(&response, human)
}

async fn create(
    client: &reqwest::Client,
    base_url: &str,
    args: AddArgs,
) -> Result<CreateNoteResponse> {
    let url = format!("{}/api/notes", base_url);

    let request_body = CreateNoteRequest {
        title: args.title,
        content: args.content,
    };

    Ok(make_request(client.post(&url).json(&request_body)).await?)
}
