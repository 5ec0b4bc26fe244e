use crate::env::{SpotifyConfig, SPOTIFY_API_CLIENT_ID, SPOTIFY_API_CLIENT_SECRET};
use crate::model::{PlaylistReference, Track};
use crate::query::spotify::page_tracks;
use crate::query::{ResolveError, Resolver};
use async_trait::async_trait;
use rspotify::clients::BaseClient;
use rspotify::model::PlaylistId;
use rspotify::{ClientCredsSpotify, Credentials};
use tracing::debug;

/// Resolves playlists through the Spotify Web API using the client
/// credentials flow. Only the first page of playlist items is read.
pub struct Fetcher {
    config: SpotifyConfig,
}

impl Fetcher {
    pub fn new(config: SpotifyConfig) -> Self {
        Self { config }
    }

    fn credentials(&self) -> Result<Credentials, ResolveError> {
        let client_id = self
            .config
            .client_id
            .as_deref()
            .ok_or(ResolveError::MissingCredential(SPOTIFY_API_CLIENT_ID))?;
        let client_secret = self
            .config
            .client_secret
            .as_deref()
            .ok_or(ResolveError::MissingCredential(SPOTIFY_API_CLIENT_SECRET))?;

        Ok(Credentials::new(client_id, client_secret))
    }

    async fn authenticated_client(&self) -> Result<ClientCredsSpotify, ResolveError> {
        let spotify_client = ClientCredsSpotify::new(self.credentials()?);
        spotify_client
            .request_token()
            .await
            .map_err(ResolveError::Authentication)?;

        Ok(spotify_client)
    }
}

fn parse_id(reference: &PlaylistReference) -> Result<PlaylistId<'_>, ResolveError> {
    let invalid = || ResolveError::InvalidPlaylistId(reference.id().to_owned());
    if reference.id().is_empty() {
        return Err(invalid());
    }

    PlaylistId::from_id_or_uri(reference.id()).map_err(|_| invalid())
}

#[async_trait]
impl Resolver for Fetcher {
    async fn resolve(&self, playlist_url: &str) -> Result<Vec<Track>, ResolveError> {
        let spotify_client = self.authenticated_client().await?;

        let reference = PlaylistReference::parse(playlist_url);
        let id = parse_id(&reference)?;
        debug!(playlist_id = reference.id(), "fetching playlist items");

        let page = spotify_client
            .playlist_items_manual(id, None, None, None, None)
            .await
            .map_err(ResolveError::Request)?;
        debug!(
            items = page.items.len(),
            total = page.total,
            "fetched the first page of playlist items"
        );

        Ok(page_tracks(page))
    }
}
