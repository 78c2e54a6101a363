//! Page rendering loops
//!
//! Each loop fully rebuilds its fragments from fresh snapshots, so an in-flight cycle
//! superseded by the next one simply gets overwritten. A failed page never stops the
//! other pages from rendering.
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::time::{self, Duration};
use tracing::{info, warn};

use config::Config;
use snapshot::events::{StatusEvent, StatusSignal};
use snapshot::Sources;
use util::ctx;
use util::string::normalize_name;
use view::class::ClassNames;
use view::{game, items, ladder, profile};

use crate::pages;

/// Start the page rendering loop and the d2gs status fragment loop
pub async fn start_loops(client: Client, config: Arc<Config>, signal: StatusSignal) {
    let shared_client = client.clone();
    let shared_config = Arc::clone(&config);
    tokio::spawn(async move {
        info!("Starting page rendering loop");
        let mut interval = time::interval(Duration::from_secs(shared_config.page_refresh_secs));
        loop {
            interval.tick().await;
            render_pages(&shared_client, &shared_config).await;
        }
    });

    tokio::spawn(async move {
        info!("Starting d2gs status fragment loop");
        let mut recv = signal.connect();
        loop {
            let event = match recv.recv().await {
                Ok(event) => event,
                Err(why) => {
                    warn!("Failed to receive status event: {}", why);
                    continue;
                }
            };
            if let StatusEvent::D2gsDown { reason } = event.as_ref() {
                warn!("D2gs status poll reported: {}", reason);
            }
            write_fragment(&config.out_dir, "d2gs_status.html", &pages::status_fragment(event.as_ref()));
        }
    });
}

async fn render_pages(client: &Client, config: &Config) {
    let sources = Sources::new(&config.data_url);
    let classes = ClassNames::with_aliases(&config.class_aliases);

    render_index(client, config, &sources, &classes).await;
    let _ = ctx!(render_ladder(client, config, &sources).await, "Failed to render ladder page");
    let _ = ctx!(render_items(client, config, &sources).await, "Failed to render items page");
    let _ = ctx!(
        render_characters(client, config, &sources, &classes).await,
        "Failed to render character pages"
    );
}

/// Rebuild the index fragment. Sections degrade independently, a missing source leaves
/// its section empty instead of killing the page.
async fn render_index(client: &Client, config: &Config, sources: &Sources, classes: &ClassNames) {
    let servers = match snapshot::load_server_status(client, sources).await {
        Ok(doc) => doc.servers,
        Err(why) => {
            warn!("{:#}", why);
            Vec::new()
        }
    };
    let server_uptime = snapshot::load_server_uptime(client, sources).await.ok();
    let d2gs_uptime = snapshot::load_d2gs_uptime(client, sources).await.ok();

    let mut records = match snapshot::load_games(client, sources).await {
        Ok(records) => records,
        Err(why) => {
            warn!("{:#}", why);
            Vec::new()
        }
    };

    // Roster lines fall back to the game log's own fields when a profile is missing
    for record in &mut records {
        for entry in &mut record.characters {
            let character = match snapshot::load_character(client, sources, &entry.name).await {
                Ok(character) => character,
                Err(_) => continue,
            };
            if let Some(info) = &character.character_info {
                if let Some(class) = &info.stats.class {
                    entry.class = class.clone();
                }
                if let Some(level) = info.stats.level {
                    entry.level = level.to_string();
                }
                if let Some(account) = &info.account_name {
                    entry.account = Some(account.clone());
                }
            }
        }
    }

    let cards: Vec<_> = records.iter().map(|record| game::game_card(record, classes)).collect();
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let html = pages::index_page(
        &servers,
        server_uptime,
        d2gs_uptime,
        &cards,
        config.long_uptime_format,
        &stamp,
    );
    write_fragment(&config.out_dir, "index.html", &html);
}

async fn render_ladder(client: &Client, config: &Config, sources: &Sources) -> Result<()> {
    let doc = snapshot::load_ladder(client, sources).await.context("Failed to load ladder snapshot")?;
    let (mode, standings) = ladder::ranking(&doc, config.ranking_ladder_type);
    write_fragment(&config.out_dir, "ladder.html", &pages::ladder_page(mode.as_deref(), &standings));
    Ok(())
}

async fn render_items(client: &Client, config: &Config, sources: &Sources) -> Result<()> {
    let doc = snapshot::load_items(client, sources).await.context("Failed to load items snapshot")?;
    write_fragment(&config.out_dir, "charitems.html", &pages::items_table(&doc));
    Ok(())
}

/// Rebuild one page per known character.
///
/// Every character fans out its three fetches concurrently and joins before merging.
/// A character whose primary profile is missing renders the not-found message and the
/// loop moves on to the next one.
async fn render_characters(
    client: &Client, config: &Config, sources: &Sources, classes: &ClassNames,
) -> Result<()> {
    let known = snapshot::load_items(client, sources).await.context("Failed to load items snapshot")?;

    for row in &known.rows {
        if row.charname.is_empty() {
            continue;
        }
        let name = normalize_name(&row.charname);
        let bundle = snapshot::load_character_bundle(client, sources, &name).await;

        let items_row = bundle.items.as_ref().and_then(|doc| items::find_row(doc, &name));
        let ladder_exp = bundle
            .ladder
            .as_ref()
            .and_then(|doc| ladder::best_experience(doc, &name, config.expansion_types));

        let html = match profile::merge(&name, bundle.character.as_ref().ok(), items_row, ladder_exp, classes)
        {
            Ok(profile) => pages::character_page(&profile),
            Err(why) => {
                warn!("{:#}", why);
                pages::character_not_found(&name)
            }
        };
        write_fragment(&config.out_dir, &format!("chars/{}.html", name), &html);
    }
    Ok(())
}

/// Replace a fragment file, logging io failures instead of bubbling them
fn write_fragment(dir: &str, file: &str, html: &str) {
    let path = Path::new(dir).join(file);
    if let Some(parent) = path.parent() {
        let _ = ctx!(std::fs::create_dir_all(parent), "Failed to create '{}'", parent.display());
    }
    let _ = ctx!(std::fs::write(&path, html), "Failed to write fragment '{}'", path.display());
}
