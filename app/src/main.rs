use clap::{Parser, Subcommand};
use common::Config;
use deck::{DeckClient, DeckError, DeckResponse};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(author, version, about = "Create, draw from and shuffle remote card decks", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand, PartialEq)]
enum Command {
    /// Create a new deck.
    New,
    /// Draw cards from an existing deck.
    Draw {
        deck_id: String,
        #[arg(short, long, default_value_t = 1)]
        count: u32,
    },
    /// Shuffle the cards still left in a deck.
    Shuffle { deck_id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize Logging (stderr, stdout is reserved for JSON)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 2. Load Config from CLI args
    let cli = Cli::parse();
    tracing::debug!(base_url = %cli.config.base_url, "Using deck API");

    // 3. Build Client
    let client = DeckClient::new(&cli.config)?;

    // 4. Run
    let response = match run(&client, cli.command).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

async fn run(client: &DeckClient, command: Command) -> Result<DeckResponse, DeckError> {
    match command {
        Command::New => client.create_deck().await,
        Command::Draw { deck_id, count } => client.draw_cards(&deck_id, count).await,
        Command::Shuffle { deck_id } => client.shuffle_deck(&deck_id).await,
    }
}
