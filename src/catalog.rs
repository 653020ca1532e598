use super::*;

use std::future::Future;

use futures::stream::{self, Stream, StreamExt};

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";
const PAGE_MAX_RESULTS: &str = "50";

#[derive(Debug, Deserialize)]
pub(super) struct RawPlaylist {
    pub(super) id: String,
    pub(super) snippet: PlaylistSnippet,
}

#[derive(Debug, Deserialize)]
pub(super) struct PlaylistSnippet {
    pub(super) title: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawVideo {
    pub(super) snippet: VideoSnippet,
}

#[derive(Debug, Deserialize)]
pub(super) struct VideoSnippet {
    #[serde(rename = "resourceId")]
    pub(super) resource_id: VideoResource,
}

#[derive(Debug, Deserialize)]
pub(super) struct VideoResource {
    #[serde(rename = "videoId")]
    pub(super) video_id: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    id: SearchHitId,
}

#[derive(Deserialize)]
struct SearchHitId {
    #[serde(rename = "channelId")]
    channel_id: Option<String>,
}

#[derive(Deserialize)]
struct PlaylistsResponse {
    #[serde(default)]
    items: Vec<RawPlaylist>,
}

#[derive(Deserialize)]
struct PlaylistItemsResponse {
    #[serde(default)]
    items: Vec<RawVideo>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

pub(super) struct CatalogClient {
    http: reqwest::Client,
    api_key: String,
}

impl CatalogClient {
    pub(super) fn new(api_key: String) -> Self {
        CatalogClient {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Channel id for the first channel matching the query, or `None` when
    /// the search comes back empty.
    pub(super) async fn resolve_channel(&self, query: &str) -> Result<Option<String>> {
        let response: SearchResponse = self
            .http
            .get(format!("{}/search", API_BASE))
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "channel"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("request channel search")?
            .error_for_status()
            .context("channel search rejected")?
            .json()
            .await
            .context("parse channel search response")?;
        Ok(response.items.into_iter().find_map(|hit| hit.id.channel_id))
    }

    /// One page of playlists is enough at this scale.
    pub(super) async fn list_playlists(&self, channel_id: &str) -> Result<Vec<RawPlaylist>> {
        let response: PlaylistsResponse = self
            .http
            .get(format!("{}/playlists", API_BASE))
            .query(&[
                ("part", "snippet"),
                ("channelId", channel_id),
                ("maxResults", PAGE_MAX_RESULTS),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("request playlists")?
            .error_for_status()
            .context("playlists request rejected")?
            .json()
            .await
            .context("parse playlists response")?;
        Ok(response.items)
    }

    pub(super) async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<String>,
    ) -> Result<(Vec<RawVideo>, Option<String>)> {
        let mut request = self
            .http
            .get(format!("{}/playlistItems", API_BASE))
            .query(&[
                ("part", "snippet"),
                ("playlistId", playlist_id),
                ("maxResults", PAGE_MAX_RESULTS),
                ("key", self.api_key.as_str()),
            ]);
        if let Some(token) = page_token.as_deref() {
            request = request.query(&[("pageToken", token)]);
        }
        let response: PlaylistItemsResponse = request
            .send()
            .await
            .context("request playlist items")?
            .error_for_status()
            .context("playlist items request rejected")?
            .json()
            .await
            .context("parse playlist items response")?;
        Ok((response.items, response.next_page_token))
    }

    /// Lazy sequence of raw video pages for one playlist; see [`page_feed`].
    pub(super) fn episode_pages<'a>(
        &'a self,
        playlist_id: &'a str,
    ) -> impl Stream<Item = Vec<RawVideo>> + 'a {
        page_feed(move |token| self.list_playlist_items(playlist_id, token))
    }

    /// Collects every page the feed produces. Infallible: a failed page
    /// simply ends the feed with whatever was already fetched.
    pub(super) async fn fetch_episode_pages(&self, playlist_id: &str) -> Vec<Vec<RawVideo>> {
        self.episode_pages(playlist_id).collect().await
    }
}

enum PageCursor {
    Start,
    Next(String),
    Done,
}

/// Drives a page-token fetch loop as a finite, non-restartable stream of
/// pages. The stream ends at natural end of data (an empty page counts) and
/// at the first error. Pages already yielded stay yielded, so a transient
/// failure on page three keeps pages one and two.
pub(super) fn page_feed<F, Fut>(fetch: F) -> impl Stream<Item = Vec<RawVideo>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<(Vec<RawVideo>, Option<String>)>>,
{
    stream::unfold(
        (PageCursor::Start, fetch),
        |(cursor, mut fetch)| async move {
            let page_token = match cursor {
                PageCursor::Start => None,
                PageCursor::Next(token) => Some(token),
                PageCursor::Done => return None,
            };
            match fetch(page_token).await {
                Ok((items, _)) if items.is_empty() => None,
                Ok((items, Some(token))) => Some((items, (PageCursor::Next(token), fetch))),
                Ok((items, None)) => Some((items, (PageCursor::Done, fetch))),
                Err(err) => {
                    warn!("episode page fetch failed: {:#}", err);
                    None
                }
            }
        },
    )
}

pub(super) fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}
