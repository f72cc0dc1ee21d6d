//! DELETE command - Delete a note by title.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Title of the note to delete (first match only)
    pub title: String,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Request body for deleting a note.
#[derive(Serialize)]
struct DeleteNoteRequest<'a> {
    title: &'a str,
}

/// Response from deleting a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteNoteResponse {
    pub message: String,
}

impl HumanReadable for DeleteNoteResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
    }
}

/// Execute the delete command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: DeleteArgs,
) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete note {:?}? [y/N] ",
            "Warning:".yellow().bold(),
            args.title
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let response = delete(client, base_url, &args.title).await?;
    output(&response, human)
}

async fn delete(
    client: &reqwest::Client,
    base_url: &str,
    title: &str,
) -> Result<DeleteNoteResponse> {
    let url = format!("{}/api/notes", base_url);
    Ok(make_request(client.delete(&url).json(&DeleteNoteRequest { title })).await?)
}
