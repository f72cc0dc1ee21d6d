//! Command-line interface for the notepad service.
//!
//! Commands:
//! - list: List every note
//! - add: Create a note
//! - delete: Delete a note by title
//! - summarize: Summarize a piece of text
//!
//! Configuration via environment:
//! - NOTEPAD_URL: Base URL of the notepad server (default: http://localhost:5000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{add::AddArgs, delete::DeleteArgs, list::ListArgs, summarize::SummarizeArgs};

/// Notepad CLI
///
/// Manage notes from the command line. Prints JSON by default; pass
/// --human for formatted output.
#[derive(Parser)]
#[command(name = "notepad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Notepad server URL
    #[arg(
        long,
        env = "NOTEPAD_URL",
        default_value = "http://localhost:5000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every note
    List(ListArgs),

    /// Create a new note
    Add(AddArgs),

    /// Delete the first note with the given title
    Delete(DeleteArgs),

    /// Summarize text with the configured summarization service
    Summarize(SummarizeArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, url, cli.human, args).await,
        Commands::Add(args) => commands::add::execute(&client, url, cli.human, args).await,
        Commands::Delete(args) => commands::delete::execute(&client, url, cli.human, args).await,
        Commands::Summarize(args) => {
            commands::summarize::execute(&client, url, cli.human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_content() {
        let cli = Cli::try_parse_from([
            "notepad",
            "--url",
            "http://notes.local",
            "add",
            "Groceries",
            "--content",
            "milk, eggs",
        ])
        .unwrap();

        assert_eq!(cli.url, "http://notes.local");
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.title, "Groceries");
                assert_eq!(args.content.as_deref(), Some("milk, eggs"));
            }
            _ => panic!("expected add"),
        }
    }
}
