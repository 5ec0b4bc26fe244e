use crate::model::{ResultMap, Track};
use crate::query::{Finder, Resolver, SearchError};
use std::io::{self, Write};
use tracing::warn;

const REPORT_HEADER: &str = "--- All YouTube Links ---";

/// What a run produced. Request failures are counted apart from searches that
/// simply found nothing, although both print the same "not found" line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub resolve_failed: bool,
    pub links: ResultMap,
    pub not_found: Vec<Track>,
    pub failed: usize,
}

/// Resolves the playlist, searches a video for every track in order and
/// writes progress followed by the link report to `out`.
///
/// Lookup failures never abort the run; only writing to `out` can fail.
pub async fn run<R, F, W>(
    resolver: &R,
    finder: &F,
    playlist_url: &str,
    out: &mut W,
) -> io::Result<Summary>
where
    R: Resolver + ?Sized,
    F: Finder + ?Sized,
    W: Write,
{
    let mut summary = Summary::default();

    let tracks = match resolver.resolve(playlist_url).await {
        Ok(tracks) => tracks,
        Err(error) => {
            warn!(%error, "could not resolve the playlist");
            writeln!(out, "Error retrieving playlist tracks: {}", error)?;
            summary.resolve_failed = true;
            Vec::new()
        }
    };

    if tracks.is_empty() {
        writeln!(out, "Could not retrieve any tracks from the playlist.")?;
        return Ok(summary);
    }

    for track in tracks {
        writeln!(out, "Searching for: {}", track)?;

        let link = match finder.find(&track).await {
            Ok(link) => link,
            Err(error) => {
                warn!(%error, track = track.label(), "video search failed");
                match &error {
                    SearchError::Request(_) => {
                        writeln!(out, "Error making request to YouTube: {}", error)?
                    }
                    _ => writeln!(out, "An error occurred while searching YouTube: {}", error)?,
                }
                summary.failed += 1;
                None
            }
        };

        match link {
            Some(link) => {
                writeln!(out, "  Found: {}", link)?;
                summary.links.insert(track, link);
            }
            None => {
                writeln!(out, "  Could not find a YouTube link.")?;
                summary.not_found.push(track);
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", REPORT_HEADER)?;
    for (track, link) in summary.links.iter() {
        writeln!(out, "{}: {}", track, link)?;
    }

    Ok(summary)
}
