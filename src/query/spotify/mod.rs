use crate::model::Track;
use rspotify::model::{FullTrack, Page, PlayableItem, PlaylistItem};

pub mod playlist;

trait ToTrack {
    fn title(&self) -> impl AsRef<str>;
    fn artist_name(&self) -> Option<impl AsRef<str>>;

    fn to_track(&self) -> Track {
        let artist_name = self.artist_name();
        let title = self.title();
        Track::new(
            artist_name.as_ref().map(|name| name.as_ref()),
            title.as_ref(),
        )
    }
}

impl ToTrack for FullTrack {
    fn title(&self) -> impl AsRef<str> {
        self.name.as_str()
    }

    fn artist_name(&self) -> Option<impl AsRef<str>> {
        self.artists.first().map(|artist| artist.name.as_str())
    }
}

/// Only the `Track` variant of an item counts, removed tracks and podcast
/// episodes yield `None`.
fn playable_track(item: PlaylistItem) -> Option<FullTrack> {
    match item.track {
        Some(PlayableItem::Track(track)) => Some(track),
        _ => None,
    }
}

fn page_tracks(page: Page<PlaylistItem>) -> Vec<Track> {
    to_tracks(page.items.into_iter().map(playable_track))
}

fn to_tracks<T: ToTrack>(items: impl IntoIterator<Item = Option<T>>) -> Vec<Track> {
    items
        .into_iter()
        .flatten()
        .map(|item| item.to_track())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        artists: Vec<&'static str>,
        name: &'static str,
    }

    impl ToTrack for Item {
        fn title(&self) -> impl AsRef<str> {
            self.name
        }

        fn artist_name(&self) -> Option<impl AsRef<str>> {
            self.artists.first().copied()
        }
    }

    fn item(artists: &[&'static str], name: &'static str) -> Option<Item> {
        Some(Item {
            artists: artists.to_vec(),
            name,
        })
    }

    #[test]
    fn formats_first_artist_and_title() {
        let tracks = to_tracks([item(&["Queen", "David Bowie"], "Under Pressure")]);

        assert_eq!(tracks, vec![Track::from("Queen - Under Pressure")]);
    }

    #[test]
    fn skips_missing_tracks_keeping_order() {
        let tracks = to_tracks([
            None,
            item(&["Daft Punk"], "One More Time"),
            None,
            None,
            item(&["Queen"], "Bohemian Rhapsody"),
            None,
        ]);

        assert_eq!(
            tracks,
            vec![
                Track::from("Daft Punk - One More Time"),
                Track::from("Queen - Bohemian Rhapsody"),
            ]
        );
    }

    #[test]
    fn track_without_artists_uses_title() {
        assert_eq!(to_tracks([item(&[], "Intro")]), vec![Track::from("Intro")]);
    }

    const PLAYLIST_ITEMS: &str = include_str!("testdata/playlist_items.json");

    #[test]
    fn page_keeps_only_tracks_in_order() {
        let page: Page<PlaylistItem> = serde_json::from_str(PLAYLIST_ITEMS).unwrap();
        assert_eq!(page.items.len(), 4);

        assert_eq!(
            page_tracks(page),
            vec![
                Track::from("Daft Punk - One More Time"),
                Track::from("Queen - Under Pressure"),
            ]
        );
    }

    #[test]
    fn no_items_no_tracks() {
        assert!(to_tracks(Vec::<Option<Item>>::new()).is_empty());
    }
}
