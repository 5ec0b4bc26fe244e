use crate::model::Track;
use async_trait::async_trait;
use thiserror::Error;

pub mod spotify;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("missing Spotify credential, set the {0} environment variable")]
    MissingCredential(&'static str),
    #[error("invalid playlist id {0:?}")]
    InvalidPlaylistId(String),
    #[error("Spotify authentication failed: {0}")]
    Authentication(#[source] rspotify::ClientError),
    #[error("Spotify request failed: {0}")]
    Request(#[source] rspotify::ClientError),
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("invalid video link {link:?}: {source}")]
    InvalidLink {
        link: String,
        #[source]
        source: url::ParseError,
    },
}

/// Turns a playlist URL into its track labels, in playlist order.
///
/// `Ok` with an empty list means the playlist has no resolvable tracks, any
/// failure along the way is an `Err`.
#[async_trait]
pub trait Resolver {
    async fn resolve(&self, playlist_url: &str) -> Result<Vec<Track>, ResolveError>;
}

/// Given a track, returns the first matching video URL, or `None` when the
/// search yields nothing.
#[async_trait]
pub trait Finder {
    async fn find(&self, track: &Track) -> Result<Option<String>, SearchError>;
}
