//! Functions and event loop used to load the portal's snapshot sources
//!
//! The backend periodically drops a set of static files (xml server status, json game
//! list, per-character json, xml ladder, aggregated items json, d2gs status json and two
//! bare-integer uptime counters). This crate knows where they live, fetches them cache
//! busted, and parses them into the models of [`model`] and [`xml`].
pub mod error;
pub mod events;
pub mod fetch;
pub mod loops;
pub mod model;
pub mod xml;

use reqwest::Client;

use crate::error::SnapshotError;
use crate::model::{CharacterJson, D2gsStatus, GameRecord, ItemsDoc};
use crate::xml::{LadderDoc, ServerStatusDoc};
use util::string::normalize_name;

/// Resolves snapshot source urls from the configured base url
/// ```
/// # use snapshot::Sources;
/// let sources = Sources::new("http://example.net/data/");
/// assert!(sources.games() == "http://example.net/data/all_games.json");
/// assert!(sources.character("  MfAmazon ") == "http://example.net/data/mfamazon.json");
/// ```
#[derive(Debug, Clone)]
pub struct Sources {
    base: String,
}

impl Sources {
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_string() }
    }

    fn url(&self, file: &str) -> String {
        format!("{}/{}", self.base, file)
    }

    pub fn games(&self) -> String {
        self.url("all_games.json")
    }

    pub fn server_status(&self) -> String {
        self.url("games.txt")
    }

    pub fn ladder(&self) -> String {
        self.url("d2ladder.xml")
    }

    pub fn items(&self) -> String {
        self.url("all_items.json")
    }

    /// Per-character profiles are stored under the normalized character name
    pub fn character(&self, name: &str) -> String {
        self.url(&format!("{}.json", normalize_name(name)))
    }

    pub fn d2gs_status(&self) -> String {
        self.url("d2gs_status_latest.json")
    }

    pub fn server_uptime(&self) -> String {
        self.url("server_uptime.txt")
    }

    pub fn d2gs_uptime(&self) -> String {
        self.url("d2gs_uptime.txt")
    }
}

/// Load the pvpgn server status document
pub async fn load_server_status(client: &Client, sources: &Sources) -> Result<ServerStatusDoc, SnapshotError> {
    fetch::fetch_xml(client, &sources.server_status(), "server status").await
}

/// Load the aggregated game list
pub async fn load_games(client: &Client, sources: &Sources) -> Result<Vec<GameRecord>, SnapshotError> {
    fetch::fetch_json(client, &sources.games(), "game list").await
}

/// Load the ladder document
pub async fn load_ladder(client: &Client, sources: &Sources) -> Result<LadderDoc, SnapshotError> {
    fetch::fetch_xml(client, &sources.ladder(), "ladder").await
}

/// Load the aggregated items dataset
pub async fn load_items(client: &Client, sources: &Sources) -> Result<ItemsDoc, SnapshotError> {
    fetch::fetch_json(client, &sources.items(), "items dataset").await
}

/// Load the d2gs status document
pub async fn load_d2gs_status(client: &Client, sources: &Sources) -> Result<D2gsStatus, SnapshotError> {
    fetch::fetch_json(client, &sources.d2gs_status(), "d2gs status").await
}

/// Load the host's uptime counter in seconds
pub async fn load_server_uptime(client: &Client, sources: &Sources) -> Result<u64, SnapshotError> {
    fetch::fetch_seconds(client, &sources.server_uptime(), "server uptime").await
}

/// Load the d2gs uptime counter in seconds
pub async fn load_d2gs_uptime(client: &Client, sources: &Sources) -> Result<u64, SnapshotError> {
    fetch::fetch_seconds(client, &sources.d2gs_uptime(), "d2gs uptime").await
}

/// Load a character's profile json.
///
/// The profile is the primary source of a character page: transport and parse failures
/// both count as the character not being found, unlike the enrichment sources which
/// degrade softly.
pub async fn load_character(client: &Client, sources: &Sources, name: &str) -> Result<CharacterJson, SnapshotError> {
    let character: CharacterJson = fetch::fetch_json(client, &sources.character(name), "character profile")
        .await
        .map_err(|_| SnapshotError::NotFound(name.to_string()))?;
    if character.character_info.is_none() {
        return Err(SnapshotError::NotFound(name.to_string()));
    }
    Ok(character)
}

/// The joined fan-out of everything one character page needs
#[derive(Debug)]
pub struct CharacterBundle {
    pub character: Result<CharacterJson, SnapshotError>,
    pub items: Option<ItemsDoc>,
    pub ladder: Option<LadderDoc>,
}

/// Fetch a character's three sources concurrently and join.
///
/// The enrichment sources collapse to `None` on any failure; what that means for the
/// merged record is decided by the view layer, not here.
pub async fn load_character_bundle(client: &Client, sources: &Sources, name: &str) -> CharacterBundle {
    let (character, items, ladder) = tokio::join!(
        load_character(client, sources, name),
        load_items(client, sources),
        load_ladder(client, sources),
    );
    CharacterBundle { character, items: items.ok(), ladder: ladder.ok() }
}
