use super::*;

pub(super) async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    state: std::sync::Arc<AppState>,
) -> Result<()> {
    let Some(message) = q.message.clone() else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };
    let Some(data) = q.data.as_deref() else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    match decode(data) {
        Ok(NavigationIntent::SelectPlaylist { id }) => {
            let episodes = load_episodes(&state, &id).await;
            let keyboard = episode_keyboard(&episodes, 0, &id);
            let _ = bot.delete_message(message.chat.id, message.id).await;
            bot.send_message(message.chat.id, "Choose an episode:")
                .reply_markup(keyboard)
                .await?;
        }
        Ok(NavigationIntent::SelectPage { id, pg }) => {
            let episodes = load_episodes(&state, &id).await;
            let keyboard = episode_keyboard(&episodes, pg, &id);
            bot.edit_message_reply_markup(message.chat.id, message.id)
                .reply_markup(keyboard)
                .await?;
        }
        Ok(NavigationIntent::SelectVideo { id, .. }) => {
            bot.send_message(message.chat.id, watch_url(&id)).await?;
        }
        Ok(NavigationIntent::Separator) => {
            // Spacing button; nothing to do.
        }
        Err(err) => {
            warn!("ignoring callback press: {}", err);
        }
    }

    bot.answer_callback_query(q.id).await?;
    Ok(())
}

async fn load_episodes(state: &std::sync::Arc<AppState>, playlist_id: &str) -> Vec<CatalogItem> {
    normalize_videos(state.catalog.fetch_episode_pages(playlist_id).await)
}
