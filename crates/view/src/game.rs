//! Game list display records
use snapshot::model::{CharacterRef, GameRecord};
use util::string::{normalize_name, or_dash};

use crate::class::ClassNames;

/// Display record of one live game
#[derive(Debug, Clone)]
pub struct GameCard {
    pub id: String,
    pub name: String,
    pub difficulty: String,
    /// Css class the card is styled with
    pub difficulty_class: &'static str,
    pub version: String,
    pub game_type: String,
    pub is_ladder: String,
    pub create_time: String,
    /// "account / character"
    pub creator: String,
    pub user_count: i64,
    pub xp_bonus: String,
    pub roster: Vec<RosterRow>,
}

/// One roster line of a game card
#[derive(Debug, Clone)]
pub struct RosterRow {
    pub name: String,
    /// Normalized name, used for the character page link
    pub link: String,
    /// Resolved full class name
    pub class: String,
    pub level: String,
    pub enter_time: String,
    pub account: String,
    pub ip: String,
}

/// Css class for a difficulty label, anything unrecognized renders as normal
/// ```
/// # use view::game::difficulty_class;
/// assert!(difficulty_class("Hell") == "hell");
/// assert!(difficulty_class("NIGHTMARE") == "nightmare");
/// assert!(difficulty_class("???") == "normal");
/// ```
pub fn difficulty_class(difficulty: &str) -> &'static str {
    let d = difficulty.to_lowercase();
    if d.contains("night") {
        "nightmare"
    } else if d.contains("hell") {
        "hell"
    } else {
        "normal"
    }
}

/// Party xp multiplier, `(players + 1) / 2` with a floor of 1
/// ```
/// # use view::game::xp_rate;
/// assert!(xp_rate(7) == 4.0);
/// assert!(xp_rate(1) == 1.0);
/// assert!(xp_rate(0) == 1.0);
/// ```
pub fn xp_rate(user_count: i64) -> f64 {
    if user_count >= 1 {
        (user_count as f64 + 1.0) / 2.0
    } else {
        1.0
    }
}

/// Xp bonus over base, as a display percentage
/// ```
/// # use view::game::xp_bonus;
/// assert!(xp_bonus(7) == "+300%");
/// assert!(xp_bonus(0) == "+0%");
/// ```
pub fn xp_bonus(user_count: i64) -> String {
    format!("+{:.0}%", (xp_rate(user_count) - 1.0) * 100.0)
}

/// Build the display record of one game
pub fn game_card(record: &GameRecord, classes: &ClassNames) -> GameCard {
    let info = &record.info;
    let difficulty = info.difficulty.clone().unwrap_or_default();

    GameCard {
        id: or_dash(info.id.clone()),
        name: or_dash(info.name.clone()),
        difficulty_class: difficulty_class(&difficulty),
        difficulty,
        version: or_dash(info.version.clone()),
        game_type: or_dash(info.game_type.clone()),
        is_ladder: or_dash(info.is_ladder.clone()),
        create_time: or_dash(info.create_time.clone()),
        creator: format!(
            "{} / {}",
            or_dash(info.creator_account.clone()),
            or_dash(info.creator_character.clone())
        ),
        user_count: info.user_count,
        xp_bonus: xp_bonus(info.user_count),
        roster: record.characters.iter().map(|c| roster_row(c, classes)).collect(),
    }
}

fn roster_row(entry: &CharacterRef, classes: &ClassNames) -> RosterRow {
    RosterRow {
        link: normalize_name(&entry.name),
        name: entry.name.clone(),
        class: classes.resolve(&entry.class),
        level: entry.level.clone(),
        enter_time: entry.enter_time.clone(),
        account: or_dash(entry.account.clone()),
        ip: or_dash(entry.ip.clone()),
    }
}
