use std::env;

pub(crate) const SPOTIFY_API_CLIENT_ID: &str = "SPOTIPY_CLIENT_ID";
pub(crate) const SPOTIFY_API_CLIENT_SECRET: &str = "SPOTIPY_CLIENT_SECRET";
const YOUTUBE_ORIGIN: &str = "YOUTUBE_ORIGIN";
const YOUTUBE_SEARCH_QUALIFIER: &str = "YOUTUBE_SEARCH_QUALIFIER";

const DEFAULT_YOUTUBE_ORIGIN: &str = "https://www.youtube.com";
const DEFAULT_YOUTUBE_SEARCH_QUALIFIER: &str = "official music video";

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub spotify: SpotifyConfig,
    pub youtube: YoutubeConfig,
}

/// Client credentials for the Spotify Web API.
///
/// Missing values are kept as `None` instead of failing the load, the resolver
/// reports them when it tries to authenticate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpotifyConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YoutubeConfig {
    /// Scheme and host prepended to search paths and to scraped `/watch?v=` links.
    pub origin: String,
    /// Appended to every track label to form the search query.
    pub qualifier: String,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_YOUTUBE_ORIGIN.to_owned(),
            qualifier: DEFAULT_YOUTUBE_SEARCH_QUALIFIER.to_owned(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = YoutubeConfig::default();

        Self {
            spotify: SpotifyConfig {
                client_id: lookup(SPOTIFY_API_CLIENT_ID),
                client_secret: lookup(SPOTIFY_API_CLIENT_SECRET),
            },
            youtube: YoutubeConfig {
                origin: lookup(YOUTUBE_ORIGIN)
                    .map(|origin| origin.trim_end_matches('/').to_owned())
                    .unwrap_or(defaults.origin),
                qualifier: lookup(YOUTUBE_SEARCH_QUALIFIER).unwrap_or(defaults.qualifier),
            },
        }
    }
}
