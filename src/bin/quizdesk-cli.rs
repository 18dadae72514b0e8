use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use color_eyre::{eyre::WrapErr, Result};
use quizdesk::{
    client::{ClientConfig, QuizClient, QuizListView},
    models::{Quiz, QuizPayload},
};

#[derive(Parser, Debug)]
#[command(version, about = "Command-line front end for a quizdesk server")]
struct Args {
    /// Base URL of the quizdesk server, e.g. `http://127.0.0.1:3001`.
    #[arg(long, env = "QUIZDESK_URL")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List quizzes, newest first.
    List,
    /// Show a quiz with all its questions.
    Show { id: String },
    /// Create a quiz from a `{title, questions}` JSON file.
    Create { file: PathBuf },
    /// Replace a quiz's title and questions from a JSON file.
    Edit { id: String, file: PathBuf },
    /// Print a quiz as an editable JSON payload.
    Export { id: String },
    /// Delete a quiz and all its questions.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "quizdesk=warn".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let client = QuizClient::new(ClientConfig::new(&args.base_url)?);

    match args.command {
        Command::List => {
            let view = QuizListView::load(&client).await?;
            if view.quizzes().is_empty() {
                println!("No quizzes found.");
            }
            for quiz in view.quizzes() {
                let noun = if quiz.question_count == 1 {
                    "question"
                } else {
                    "questions"
                };
                println!("{}  {}  ({} {noun})", quiz.id, quiz.title, quiz.question_count);
            }
        }
        Command::Show { id } => print_quiz(&client.get(&id).await?),
        Command::Create { file } => {
            let quiz = client.create(&read_payload(&file).await?).await?;
            println!("created quiz {}", quiz.id);
        }
        Command::Edit { id, file } => {
            let quiz = client.update(&id, &read_payload(&file).await?).await?;
            println!(
                "updated quiz {} ({} questions)",
                quiz.id,
                quiz.questions.len()
            );
        }
        Command::Export { id } => {
            let quiz = client.get(&id).await?;
            println!("{}", serde_json::to_string_pretty(&QuizPayload::from(&quiz))?);
        }
        Command::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete quiz {id}?"))? {
                println!("aborted");
                return Ok(());
            }
            client.delete(&id).await?;
            println!("deleted quiz {id}");
        }
    }

    Ok(())
}

async fn read_payload(file: &Path) -> Result<QuizPayload> {
    let text = tokio::fs::read_to_string(file)
        .await
        .wrap_err_with(|| format!("could not read {}", file.display()))?;
    serde_json::from_str(&text)
        .wrap_err_with(|| format!("{} is not a quiz payload", file.display()))
}

fn print_quiz(quiz: &Quiz) {
    println!("{} ({})", quiz.title, quiz.id);
    println!("created {}", quiz.created_at.to_rfc3339());
    for (idx, question) in quiz.questions.iter().enumerate() {
        println!("{:>3}. [{}] {}", idx + 1, question.kind, question.text);
        for option in question.options.iter().flatten() {
            println!("       - {option}");
        }
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
