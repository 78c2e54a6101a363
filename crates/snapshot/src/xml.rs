//! Snapshot xml models
//!
//! The server status and ladder snapshots are xml. Element text is kept as-is and
//! coerced at the accessors, entries with a missing element simply deserialize to "".
use serde::Deserialize;

use util::string::coerce_seconds;

/// Pvpgn server status document ("games.txt"), repeated `<server>` elements
/// ```
/// # use snapshot::xml::ServerStatusDoc;
/// let doc: ServerStatusDoc = quick_xml::de::from_str(
///     "<status>
///        <server><location>EU</location><users>3</users><uptime>3600</uptime></server>
///        <server><location>US</location><uptime>oops</uptime></server>
///      </status>",
/// ).unwrap();
/// assert!(doc.servers.len() == 2);
/// assert!(doc.servers[0].uptime_seconds() == 3600);
/// assert!(doc.servers[1].uptime_seconds() == 0);
/// ```
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServerStatusDoc {
    #[serde(rename = "server", default)]
    pub servers: Vec<ServerEntry>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServerEntry {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub users: String,
    #[serde(default)]
    pub games: String,
    #[serde(default)]
    pub total_games: String,
    #[serde(default)]
    pub logins: String,
    #[serde(default)]
    pub uptime: String,
}

impl ServerEntry {
    /// Uptime in seconds, garbage counts as 0
    pub fn uptime_seconds(&self) -> u64 {
        coerce_seconds(&self.uptime)
    }
}

/// Ladder document ("d2ladder.xml"), repeated `<ladder>` groups of `<char>` entries
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LadderDoc {
    #[serde(rename = "ladder", default)]
    pub ladders: Vec<LadderGroup>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LadderGroup {
    #[serde(rename = "type", default)]
    pub ladder_type: String,
    #[serde(default)]
    pub mode: String,
    #[serde(rename = "char", default)]
    pub chars: Vec<LadderChar>,
}

impl LadderGroup {
    /// Numeric ladder type, `None` when the element is missing or not a number
    pub fn type_id(&self) -> Option<i64> {
        self.ladder_type.trim().parse().ok()
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LadderChar {
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub prefix: String,
}

impl LadderChar {
    /// Numeric rank, entries without one never place
    /// ```
    /// # use snapshot::xml::LadderChar;
    /// let entry = LadderChar { rank: " 3 ".to_string(), ..Default::default() };
    /// assert!(entry.rank_num() == Some(3));
    /// assert!(LadderChar::default().rank_num().is_none());
    /// ```
    pub fn rank_num(&self) -> Option<i64> {
        self.rank.trim().parse().ok()
    }

    /// Numeric experience, garbage counts as 0
    pub fn experience_num(&self) -> i64 {
        self.experience.trim().parse().unwrap_or(0)
    }
}
