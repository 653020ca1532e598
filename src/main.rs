use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info, warn};
use serde::Deserialize;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, Message};

mod callback_handlers;
mod catalog;
mod intent;
mod message_handlers;
mod pagination;
mod transform;


use callback_handlers::handle_callback;
use catalog::{watch_url, CatalogClient, RawPlaylist, RawVideo};
use intent::{decode, encode, NavigationIntent, SEPARATOR_TOKEN};
use message_handlers::handle_message;
use pagination::{episode_keyboard, playlist_keyboard};
use transform::{normalize_playlists, normalize_videos, CatalogItem};

#[derive(Debug, Deserialize, Clone)]
struct Config {
    token: String,
    youtube_api_key: String,
    channel_query: String,
    playlist_prefix: String,
}

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: PathBuf,
}

struct AppState {
    config: Config,
    channel_id: Option<String>,
    catalog: CatalogClient,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args.config)?;

    let catalog = CatalogClient::new(config.youtube_api_key.clone());
    let channel_id = match catalog.resolve_channel(&config.channel_query).await {
        Ok(Some(id)) => {
            info!("resolved channel {} for query {:?}", id, config.channel_query);
            Some(id)
        }
        Ok(None) => {
            warn!("no channel found for query {:?}", config.channel_query);
            None
        }
        Err(err) => {
            warn!("channel lookup failed: {:#}", err);
            None
        }
    };

    let state = std::sync::Arc::new(AppState {
        config: config.clone(),
        channel_id,
        catalog,
    });

    let bot = Bot::new(config.token);

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config: Config = toml::from_str(&contents).context("parse config")?;
    Ok(config)
}

fn parse_command(text: &str) -> Option<&str> {
    let first = text.split_whitespace().next()?;
    if !first.starts_with('/') {
        return None;
    }
    let cmd = first.trim_start_matches('/');
    Some(cmd.split('@').next().unwrap_or(cmd))
}
