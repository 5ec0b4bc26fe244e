use clap::Parser;
use dotenv::dotenv;
use spotify_to_youtube::env::Config;
use spotify_to_youtube::log::initialize_logger;
use spotify_to_youtube::run;
use tracing::{debug, warn};

#[derive(Debug, Parser)]
#[command(version, about = "Find YouTube links for songs in a Spotify playlist.")]
struct Cli {
    /// The URL of the Spotify playlist.
    playlist_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    initialize_logger()?;

    if let Err(error) = dotenv() {
        if !error.not_found() {
            warn!(%error, "could not load the .env file");
        }
    }

    let summary = run(&cli.playlist_url, Config::from_env()).await?;
    debug!(
        found = summary.links.len(),
        not_found = summary.not_found.len(),
        failed = summary.failed,
        "done"
    );

    Ok(())
}
