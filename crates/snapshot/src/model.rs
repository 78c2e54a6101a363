//! Snapshot json models
//!
//! Every struct here mirrors a file the backend drops for the portal. The producer is a
//! chain of log scrapers, so numeric fields arrive as numbers or digit strings depending
//! on its version; the lenient deserializers below accept both.
use serde::{Deserialize, Deserializer};

/// Accept an integer, a digit string, or null. Garbage strings become `None`.
fn opt_lenient_int<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Str(String),
    }

    Ok(match Option::<Raw>::deserialize(de)? {
        Some(Raw::Int(v)) => Some(v),
        Some(Raw::Float(v)) => Some(v as i64),
        Some(Raw::Str(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Same as [`opt_lenient_int`] but absent/garbage values collapse to 0.
fn lenient_int<'de, D>(de: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_lenient_int(de)?.unwrap_or(0))
}

/// One entry of "all_games.json"
#[derive(Debug, Deserialize, Clone)]
pub struct GameRecord {
    #[serde(rename = "GameInfo")]
    pub info: GameInfo,
    #[serde(rename = "Characters", default)]
    pub characters: Vec<CharacterRef>,
}

/// Header block of a game record
#[derive(Debug, Deserialize, Clone, Default)]
pub struct GameInfo {
    #[serde(rename = "GameID")]
    pub id: Option<String>,
    #[serde(rename = "GameName")]
    pub name: Option<String>,
    #[serde(rename = "Difficult")]
    pub difficulty: Option<String>,
    #[serde(rename = "GameVer")]
    pub version: Option<String>,
    #[serde(rename = "GameType")]
    pub game_type: Option<String>,
    #[serde(rename = "IsLadder")]
    pub is_ladder: Option<String>,
    #[serde(rename = "UserCount", default, deserialize_with = "lenient_int")]
    pub user_count: i64,
    #[serde(rename = "CreateTime")]
    pub create_time: Option<String>,
    #[serde(rename = "Disable")]
    pub disable: Option<String>,
    #[serde(rename = "CreatorAcct")]
    pub creator_account: Option<String>,
    #[serde(rename = "CreatorChar")]
    pub creator_character: Option<String>,
}

/// Roster entry carried inside a game record.
///
/// Minimal identity only, the full character record lives in the per-character json.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CharacterRef {
    #[serde(rename = "AcctName")]
    pub account: Option<String>,
    #[serde(rename = "CharName", default)]
    pub name: String,
    #[serde(rename = "IPAddress")]
    pub ip: Option<String>,
    #[serde(rename = "Class", default)]
    pub class: String,
    #[serde(rename = "Level", default)]
    pub level: String,
    #[serde(rename = "EnterTime", default)]
    pub enter_time: String,
}

/// Per-character profile json, fetched by normalized character name
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CharacterJson {
    pub character_info: Option<CharacterInfo>,
    #[serde(default)]
    pub item_stats: ItemStats,
    /// Raw attribute map, only present in newer snapshots
    #[serde(default)]
    pub attributes: Option<serde_json::Value>,
}

/// The `character_info` block of a character profile
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CharacterInfo {
    pub name: Option<String>,
    pub account_name: Option<String>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub experience: Option<i64>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub gold_stash: Option<i64>,
    pub last_played: Option<String>,
    pub expansion_type: Option<String>,
    pub mode: Option<String>,
    #[serde(flatten)]
    pub stats: StatBlock,
}

/// Stat fields shared between `character_info` and an items row's `char_stats`.
///
/// The merge prefers the items row block field by field, see the view crate.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StatBlock {
    pub class: Option<String>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub level: Option<i64>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub strength: Option<i64>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub dexterity: Option<i64>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub vitality: Option<i64>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub energy: Option<i64>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub life: Option<i64>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub max_life: Option<i64>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub mana: Option<i64>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub max_mana: Option<i64>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub gold: Option<i64>,
}

/// Item counters of a character profile
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ItemStats {
    #[serde(default, deserialize_with = "lenient_int")]
    pub total_items: i64,
    #[serde(default, deserialize_with = "lenient_int")]
    pub normal: i64,
    #[serde(default, deserialize_with = "lenient_int")]
    pub magic: i64,
    #[serde(default, deserialize_with = "lenient_int")]
    pub set: i64,
    #[serde(default, deserialize_with = "lenient_int")]
    pub unique: i64,
}

/// The aggregated items dataset ("all_items.json")
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ItemsDoc {
    #[serde(default)]
    pub rows: Vec<ItemsRow>,
}

/// One character's row of the aggregated items dataset.
///
/// Item lists are already categorized by the producer, this side never re-derives
/// categories from raw item data.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ItemsRow {
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub charname: String,
    #[serde(default)]
    pub char_stats: Option<StatBlock>,
    #[serde(default)]
    pub unique_set: Vec<TaggedItem>,
    #[serde(default)]
    pub runes: Vec<String>,
    #[serde(default)]
    pub amulets: Vec<String>,
    #[serde(default)]
    pub rings: Vec<String>,
    #[serde(default)]
    pub belts: Vec<String>,
    #[serde(default)]
    pub charms_small: Vec<String>,
    #[serde(default)]
    pub charms_large: Vec<String>,
    #[serde(default)]
    pub charms_grand: Vec<String>,
    #[serde(default)]
    pub weapons: Vec<String>,
    #[serde(default)]
    pub armors: Vec<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

/// Unique/set item descriptor, the `kind` tag ("unique" or "set") only drives styling
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TaggedItem {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// D2gs realm status json ("d2gs_status_latest.json")
#[derive(Debug, Deserialize, Clone, Default)]
pub struct D2gsStatus {
    #[serde(default)]
    pub status: String,
    pub message: Option<String>,
    #[serde(default)]
    pub data: D2gsData,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct D2gsData {
    pub uptime: Option<D2gsUptime>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct D2gsUptime {
    pub uptime_duration: Option<String>,
}

impl D2gsStatus {
    /// The reported uptime duration, if the document reports success.
    /// ```
    /// # use snapshot::model::D2gsStatus;
    /// let doc: D2gsStatus = serde_json::from_str(
    ///     r#"{"status":"success","data":{"uptime":{"uptime_duration":"4d 1h"}}}"#,
    /// ).unwrap();
    /// assert!(doc.uptime() == Some("4d 1h"));
    ///
    /// let doc: D2gsStatus = serde_json::from_str(r#"{"status":"error","message":"down"}"#).unwrap();
    /// assert!(doc.uptime().is_none());
    /// ```
    pub fn uptime(&self) -> Option<&str> {
        if self.status != "success" {
            return None;
        }
        self.data.uptime.as_ref()?.uptime_duration.as_deref()
    }
}
