//! Merged character profile view
//!
//! A character page pulls from three sources: the per-character json (primary), the
//! character's row of the aggregated items dataset, and its best ladder placement.
//! [`merge`] folds them into one record with a fixed field precedence.
use snapshot::error::SnapshotError;
use snapshot::model::{CharacterJson, ItemStats, ItemsRow, StatBlock};

use crate::class::ClassNames;
use crate::items::{self, ItemGroup};
use crate::ladder;

/// One character's merged display record
#[derive(Debug, Clone)]
pub struct CharacterProfile {
    pub name: String,
    pub account: Option<String>,
    /// Resolved full class name
    pub class: String,
    pub level: Option<i64>,
    /// Already formatted, "-" when untracked
    pub experience: String,
    pub strength: Option<i64>,
    pub dexterity: Option<i64>,
    pub vitality: Option<i64>,
    pub energy: Option<i64>,
    pub life: Option<i64>,
    pub mana: Option<i64>,
    pub gold: Option<i64>,
    pub gold_stash: Option<i64>,
    pub last_played: Option<String>,
    pub expansion_type: String,
    pub mode: String,
    pub item_stats: ItemStats,
    pub groups: Vec<ItemGroup>,
}

/// A stat's current value, falling back to its max when the tracked current is 0.
///
/// A character snapshot showing 0 current life/mana is stale tracking data, not a dead
/// character.
fn current_or_max(current: Option<i64>, max: Option<i64>) -> Option<i64> {
    match current {
        Some(v) if v > 0 => Some(v),
        _ => max,
    }
}

/// First present value wins
fn pick(primary: &Option<i64>, fallback: &Option<i64>) -> Option<i64> {
    primary.or(*fallback)
}

/// Merge a character's sources into one [`CharacterProfile`].
///
/// Precedence: stats prefer the items row's `char_stats` over `character_info`,
/// experience prefers the live ladder value, and life/mana fall back from current to
/// max. A missing primary profile is a hard [`SnapshotError::NotFound`]; missing
/// enrichment sources just leave their fields absent.
/// ```
/// # use snapshot::model::{CharacterInfo, CharacterJson, ItemsRow, StatBlock};
/// # use view::class::ClassNames;
/// # use view::profile::merge;
/// let classes = ClassNames::new();
///
/// let character = CharacterJson {
///     character_info: Some(CharacterInfo {
///         name: Some("MfAmazon".to_string()),
///         experience: Some(500),
///         stats: StatBlock {
///             class: Some("AMA".to_string()),
///             life: Some(0),
///             max_life: Some(600),
///             mana: Some(50),
///             max_mana: Some(200),
///             ..Default::default()
///         },
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
///
/// // Zero current life is stale data, the max steps in; tracked mana stays
/// let profile = merge("mfamazon", Some(&character), None, None, &classes).unwrap();
/// assert!(profile.life == Some(600));
/// assert!(profile.mana == Some(50));
/// assert!(profile.class == "Amazon");
/// assert!(profile.experience == "500");
///
/// // The ladder is live and wins over the profile's experience
/// let profile = merge("mfamazon", Some(&character), None, Some(1234567), &classes).unwrap();
/// assert!(profile.experience == "1,234,567");
///
/// // The items row's stat block outranks character_info
/// let row = ItemsRow {
///     char_stats: Some(StatBlock { level: Some(93), ..Default::default() }),
///     ..Default::default()
/// };
/// let profile = merge("mfamazon", Some(&character), Some(&row), None, &classes).unwrap();
/// assert!(profile.level == Some(93));
///
/// // No primary profile is a hard miss, enrichment can't save it
/// assert!(merge("mfamazon", None, Some(&row), Some(1), &classes).is_err());
/// ```
pub fn merge(
    requested: &str,
    character: Option<&CharacterJson>,
    items_row: Option<&ItemsRow>,
    ladder_experience: Option<i64>,
    classes: &ClassNames,
) -> Result<CharacterProfile, SnapshotError> {
    let character = character.ok_or_else(|| SnapshotError::NotFound(requested.to_string()))?;
    let info = character
        .character_info
        .as_ref()
        .ok_or_else(|| SnapshotError::NotFound(requested.to_string()))?;

    let empty = StatBlock::default();
    let row_stats = items_row.and_then(|row| row.char_stats.as_ref()).unwrap_or(&empty);
    let base = &info.stats;

    let class_code = row_stats
        .class
        .clone()
        .or_else(|| base.class.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    let experience = match ladder_experience.or(info.experience) {
        Some(exp) => ladder::fmt_experience(exp),
        None => "-".to_string(),
    };

    Ok(CharacterProfile {
        name: info.name.clone().unwrap_or_else(|| requested.to_string()),
        account: info.account_name.clone(),
        class: classes.resolve(&class_code),
        level: pick(&row_stats.level, &base.level),
        experience,
        strength: pick(&row_stats.strength, &base.strength),
        dexterity: pick(&row_stats.dexterity, &base.dexterity),
        vitality: pick(&row_stats.vitality, &base.vitality),
        energy: pick(&row_stats.energy, &base.energy),
        life: current_or_max(
            pick(&row_stats.life, &base.life),
            pick(&row_stats.max_life, &base.max_life),
        ),
        mana: current_or_max(
            pick(&row_stats.mana, &base.mana),
            pick(&row_stats.max_mana, &base.max_mana),
        ),
        gold: pick(&row_stats.gold, &base.gold),
        gold_stash: info.gold_stash,
        last_played: info.last_played.clone(),
        expansion_type: info.expansion_type.clone().unwrap_or_else(|| "Classic".to_string()),
        mode: info.mode.clone().unwrap_or_else(|| "Softcore".to_string()),
        item_stats: character.item_stats.clone(),
        groups: items_row.map(items::categorize).unwrap_or_default(),
    })
}
