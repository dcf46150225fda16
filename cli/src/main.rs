mod http;
mod render;

use std::cell::RefCell;
use std::time::Duration;

use clap::{Parser, Subcommand};
use kanban::{BoardController, BoardError, BoardState, ControllerOptions, DraftField, Status, StateCell};

use crate::http::ReqwestCardApi;
use crate::render::{render_board, render_card};


const DEFAULT_BASE_URL: &str = "https://trello-0xr7.onrender.com";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("card {0} not found")]
    CardNotFound(String),
}

#[derive(Parser, Debug)]
#[command(name = "trello-cli", about = "Kanban board card store CLI")]
struct Cli {
    #[arg(long, env = "TRELLO_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 15)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List cards grouped by column
    List {
        #[arg(long)]
        status: Option<Status>,
    },
    /// Create a card
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// low, medium or high
        #[arg(long)]
        priority: String,
        /// todo, inprogress or done (defaults to todo)
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a card by id
    Delete { id: String },
    /// Move a card to another column
    Move {
        id: String,
        to: Status,
        /// Column the card is expected to be in; defaults to its current one
        #[arg(long)]
        from: Option<Status>,
        /// Insert before this position within the target column
        #[arg(long)]
        position: Option<usize>,
        /// Preview the move without persisting it
        #[arg(long, default_value_t = false)]
        local_only: bool,
    },
}

type Controller = BoardController<ReqwestCardApi, RefCell<BoardState>>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let api = ReqwestCardApi::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;
    let controller = BoardController::new(api, RefCell::new(BoardState::default()));

    match cli.command {
        Command::List { status } => run_list(&controller, status).await,
        Command::Add { title, description, priority, status } => {
            run_add(&controller, title, description, priority, status).await
        }
        Command::Delete { id } => run_delete(&controller, &id).await,
        Command::Move { id, to, from, position, local_only } => {
            let controller = controller.with_options(ControllerOptions { persist_moves: !local_only });
            run_move(&controller, &id, to, from, position).await
        }
    }
}

async fn run_list(controller: &Controller, status: Option<Status>) -> Result<(), CliError> {
    controller.load().await?;
    let out = controller
        .state()
        .read(|s| render_board(s, status))
        .unwrap_or_default();
    print!("{out}");
    Ok(())
}

async fn run_add(
    controller: &Controller,
    title: String,
    description: String,
    priority: String,
    status: Option<String>,
) -> Result<(), CliError> {
    let column = Status::Todo;
    controller.edit_draft(column, DraftField::Title, title);
    controller.edit_draft(column, DraftField::Description, description);
    controller.edit_draft(column, DraftField::Priority, priority);
    controller.edit_draft(column, DraftField::Status, status.unwrap_or_default());

    if let Some(card) = controller.create(column).await? {
        print!("created\n{}", render_card(&card));
    }
    Ok(())
}

async fn run_delete(controller: &Controller, id: &str) -> Result<(), CliError> {
    controller.delete(id).await?;
    println!("deleted {id}");
    Ok(())
}

async fn run_move(
    controller: &Controller,
    id: &str,
    to: Status,
    from: Option<Status>,
    position: Option<usize>,
) -> Result<(), CliError> {
    controller.load().await?;
    let current = controller
        .state()
        .read(|s| s.card(id).map(|c| c.status))
        .flatten()
        .ok_or_else(|| CliError::CardNotFound(id.to_owned()))?;
    let from = from.unwrap_or(current);

    if controller.move_card(id, from, to, position).await? {
        let out = controller
            .state()
            .read(|s| render_board(s, Some(to)))
            .unwrap_or_default();
        print!("{out}");
    } else {
        println!("card {id} is in {current}, not {from}; nothing moved");
    }
    Ok(())
}
