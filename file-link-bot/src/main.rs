//! file-link-bot binary. Loads `.env`, parses the CLI and runs the bot.

use anyhow::Result;
use clap::Parser;
use file_link_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, base_url } => {
            let config = load_config(token, base_url)?;
            run_bot(config).await
        }
    }
}
