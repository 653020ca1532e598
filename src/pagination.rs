use super::*;

/// Episodes shown on one page of the grid.
pub(super) const PAGE_CAPACITY: usize = 15;
/// Buttons per keyboard row, for grid cells and page selectors alike.
pub(super) const ROW_WIDTH: usize = 5;

/// One button per playlist, one playlist per row.
pub(super) fn playlist_keyboard(playlists: &[CatalogItem]) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = playlists
        .iter()
        .map(|playlist| {
            vec![InlineKeyboardButton::callback(
                playlist.title.clone(),
                encode(&NavigationIntent::SelectPlaylist {
                    id: playlist.id.clone(),
                }),
            )]
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// The episode buttons for one page, chunked into rows. A page index past the
/// end of the list yields no rows rather than an error.
pub(super) fn episode_grid(items: &[CatalogItem], page: usize) -> Vec<Vec<InlineKeyboardButton>> {
    let start = page * PAGE_CAPACITY;
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + PAGE_CAPACITY).min(items.len());
    items[start..end]
        .chunks(ROW_WIDTH)
        .map(|row| {
            row.iter()
                .map(|item| {
                    InlineKeyboardButton::callback(
                        item.title.clone(),
                        encode(&NavigationIntent::SelectVideo {
                            id: item.id.clone(),
                            pg: page,
                        }),
                    )
                })
                .collect()
        })
        .collect()
}

/// One selector button per page, labeled with the 1-based inclusive episode
/// range it covers, wrapped into rows of `ROW_WIDTH`.
pub(super) fn page_selectors(
    items: &[CatalogItem],
    playlist_id: &str,
) -> Vec<Vec<InlineKeyboardButton>> {
    let total_pages = (items.len() + PAGE_CAPACITY - 1) / PAGE_CAPACITY;

    let mut rows = Vec::new();
    let mut current_row = Vec::new();
    for page in 0..total_pages {
        let first = page * PAGE_CAPACITY + 1;
        let last = ((page + 1) * PAGE_CAPACITY).min(items.len());
        current_row.push(InlineKeyboardButton::callback(
            format!("{}...{}", first, last),
            encode(&NavigationIntent::SelectPage {
                id: playlist_id.to_string(),
                pg: page,
            }),
        ));
        if current_row.len() == ROW_WIDTH {
            rows.push(std::mem::take(&mut current_row));
        }
    }
    if !current_row.is_empty() {
        rows.push(current_row);
    }
    rows
}

/// Full episode layout: grid rows, a spacing row, then the page selectors.
pub(super) fn episode_keyboard(
    items: &[CatalogItem],
    page: usize,
    playlist_id: &str,
) -> InlineKeyboardMarkup {
    let mut rows = episode_grid(items, page);
    rows.push(vec![InlineKeyboardButton::callback(
        "—",
        SEPARATOR_TOKEN.to_string(),
    )]);
    rows.extend(page_selectors(items, playlist_id));
    InlineKeyboardMarkup::new(rows)
}
