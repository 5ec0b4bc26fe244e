mod markup;

use crate::env::YoutubeConfig;
use crate::model::Track;
use crate::query::{Finder, SearchError};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

const SEARCH_PATH: &str = "/results";
const ENCODED_SLASH: &str = "%2F";

/// Finds videos by scraping the YouTube search results page.
pub struct Searcher {
    http_client: reqwest::Client,
    config: YoutubeConfig,
}

impl Searcher {
    pub fn new(http_client: reqwest::Client, config: YoutubeConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub(crate) fn search_url(&self, track: &Track) -> String {
        let query = format!("{} {}", track.label(), self.config.qualifier);
        format!(
            "{}{}?search_query={}",
            self.config.origin,
            SEARCH_PATH,
            urlencoding::encode(&query).replace(ENCODED_SLASH, "/")
        )
    }

    fn video_url(&self, html: &str) -> Result<Option<String>, SearchError> {
        let Some(href) = markup::first_watch_href(html) else {
            return Ok(None);
        };

        let link = format!("{}{}", self.config.origin, href);
        Url::parse(&link).map_err(|source| SearchError::InvalidLink {
            link: link.clone(),
            source,
        })?;

        Ok(Some(link))
    }
}

#[async_trait]
impl Finder for Searcher {
    async fn find(&self, track: &Track) -> Result<Option<String>, SearchError> {
        let search_url = self.search_url(track);
        debug!(%search_url, "searching YouTube");

        let response = self
            .http_client
            .get(&search_url)
            .send()
            .await?
            .error_for_status()?;
        let html = response.text().await?;

        let link = self.video_url(&html)?;
        debug!(track = track.label(), ?link, "scanned the search results");

        Ok(link)
    }
}
