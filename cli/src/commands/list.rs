//! LIST command - List every note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use notepad_core::Note;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output, truncate};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    // No additional arguments needed
}

/// Response from listing notes.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NoteList(pub Vec<Note>);

impl HumanReadable for NoteList {
    fn print_human(&self) {
        println!("{}", "Notes".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.0.is_empty() {
            println!("  {}", "(No notes)".dimmed());
            return;
        }

        for note in &self.0 {
            println!("  {}", note.title.bold());
            if !note.content.is_empty() {
                println!("    {}", truncate(&note.content, 76));
            }
            if !note.summary.is_empty() {
                println!("    {} {}", "Summary:".cyan(), truncate(&note.summary, 67));
            }
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.0.len());
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: ListArgs,
) -> Result<()> {
    let response = fetch(client, base_url).await?;
    output(&response, human)
}

async fn fetch(client: &reqwest::Client, base_url: &str) -> Result<NoteList> {
    let url = format!("{}/api/notes", base_url);
    Ok(make_request(client.get(&url)).await?)
}
