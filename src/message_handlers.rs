use super::*;

const HELP_TEXT: &str = "Use /start to browse seasons. Pick a season, then an episode; the numbered buttons under the grid switch pages.";

pub(super) async fn handle_message(
    bot: Bot,
    msg: Message,
    state: std::sync::Arc<AppState>,
) -> Result<()> {
    let text = match msg.text() {
        Some(text) => text,
        None => return Ok(()),
    };

    match parse_command(text) {
        Some("start") => send_season_menu(&bot, msg.chat.id, &state).await?,
        Some("help") => {
            bot.send_message(msg.chat.id, HELP_TEXT).await?;
        }
        _ => {
            // Not a command for us; nothing to do.
        }
    }

    Ok(())
}

pub(super) async fn send_season_menu(
    bot: &Bot,
    chat_id: ChatId,
    state: &std::sync::Arc<AppState>,
) -> Result<()> {
    let seasons = load_seasons(state).await;
    if seasons.is_empty() {
        bot.send_message(chat_id, "No seasons found.").await?;
        return Ok(());
    }

    bot.send_message(chat_id, "Choose a season:")
        .reply_markup(playlist_keyboard(&seasons))
        .await?;
    Ok(())
}

async fn load_seasons(state: &std::sync::Arc<AppState>) -> Vec<CatalogItem> {
    let Some(channel_id) = state.channel_id.as_deref() else {
        return Vec::new();
    };
    match state.catalog.list_playlists(channel_id).await {
        Ok(raw) => normalize_playlists(raw, &state.config.playlist_prefix),
        Err(err) => {
            error!("playlist fetch failed: {:#}", err);
            Vec::new()
        }
    }
}
