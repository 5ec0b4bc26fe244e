pub mod driver;
pub mod env;
pub mod log;
pub mod model;
pub mod query;
pub mod youtube;

use anyhow::Context;
use driver::Summary;
use env::Config;
use std::io;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Looks up a YouTube link for every track of the playlist and prints the
/// report to stdout.
pub async fn run(playlist_url: &str, config: Config) -> anyhow::Result<Summary> {
    let http_client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("build the HTTP client")?;

    let resolver = query::spotify::playlist::Fetcher::new(config.spotify);
    let finder = youtube::Searcher::new(http_client, config.youtube);

    tracing::info!(version = VERSION, playlist_url, "starting");
    driver::run(&resolver, &finder, playlist_url, &mut io::stdout())
        .await
        .context("write the report")
}
