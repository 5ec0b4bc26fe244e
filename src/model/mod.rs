use std::fmt;

/// A playlist entry as shown to the user and used to seed the video search:
/// `"Artist - Title"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Track {
    label: String,
}

impl Track {
    pub fn new(artist_name: Option<&str>, title: &str) -> Self {
        let label = match artist_name {
            Some(artist_name) => format!("{} - {}", artist_name, title),
            None => title.to_owned(),
        };

        Self { label }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl From<&str> for Track {
    fn from(label: &str) -> Self {
        Self {
            label: label.to_owned(),
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// The catalog identifier taken from a playlist URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaylistReference {
    id: String,
}

impl PlaylistReference {
    /// Takes the last `/` segment of the URL and drops everything from the
    /// first `?` on. A bare id parses to itself.
    pub fn parse(url: &str) -> Self {
        let last_segment = url.rsplit('/').next().unwrap_or(url);
        let id = last_segment
            .split_once('?')
            .map_or(last_segment, |(id, _)| id);

        Self { id: id.to_owned() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Found links keyed by track, in the order the tracks were first inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultMap {
    entries: Vec<(Track, String)>,
}

impl ResultMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-inserting a track replaces its link but keeps its original position.
    pub fn insert(&mut self, track: Track, link: String) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == track) {
            Some((_, existing_link)) => *existing_link = link,
            None => self.entries.push((track, link)),
        }
    }

    pub fn get(&self, track: &Track) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == track)
            .map(|(_, link)| link.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Track, &str)> {
        self.entries.iter().map(|(track, link)| (track, link.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
