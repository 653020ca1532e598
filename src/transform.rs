use super::*;

/// Hard cap on the number of playlists offered as seasons.
pub(super) const MAX_PLAYLISTS: usize = 7;

/// A normalized catalog entry. The id is only unique within the list it came
/// from; the title is a positional label, never the raw upstream title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct CatalogItem {
    pub(super) id: String,
    pub(super) title: String,
}

pub(super) fn normalize_playlists(raw: Vec<RawPlaylist>, prefix: &str) -> Vec<CatalogItem> {
    // TODO: confirm with the channel owner whether the oldest or the newest
    // seven matches should win once the channel has more than seven matching
    // playlists; today the first seven returned by the API are kept and then
    // reversed, and season numbering depends on that order.
    let mut kept: Vec<RawPlaylist> = raw
        .into_iter()
        .filter(|playlist| playlist.snippet.title.starts_with(prefix))
        .take(MAX_PLAYLISTS)
        .collect();
    kept.reverse();
    kept.into_iter()
        .enumerate()
        .map(|(index, playlist)| {
            debug!("season {}: {} ({})", index + 1, playlist.id, playlist.snippet.title);
            CatalogItem {
                id: playlist.id,
                title: format!("Season {}", index + 1),
            }
        })
        .collect()
}

pub(super) fn normalize_videos(pages: Vec<Vec<RawVideo>>) -> Vec<CatalogItem> {
    pages
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(index, video)| CatalogItem {
            id: video.snippet.resource_id.video_id,
            title: format!("Episode {}", index + 1),
        })
        .collect()
}
