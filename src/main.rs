use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use mistral_chat::{ChatClient, ChatSession, MistralClient};

mod cli;

use cli::ChatRepl;

#[derive(Parser)]
#[command(name = "mistral-chat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at DEBUG instead of INFO
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mistral = MistralClient::new();
    debug!(
        "Using endpoint {} with model {}",
        mistral.config().endpoint,
        mistral.config().model
    );
    let client: Arc<dyn ChatClient> = Arc::new(mistral);

    let session = ChatSession::new(client);
    ChatRepl::new(session).run().await
}
