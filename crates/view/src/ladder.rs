//! Ladder aggregation
//!
//! A character can place on several sub-ladders at once, so the raw document contains
//! duplicates. Only the best (lowest) rank per normalized name is ever shown.
use std::collections::HashMap;

use snapshot::xml::{LadderChar, LadderDoc};
use util::string::{fmt_num, normalize_name};

/// One retained ladder placement
#[derive(Debug, Clone)]
pub struct Standing {
    pub rank: i64,
    pub name: String,
    pub level: String,
    pub experience: i64,
    pub class: String,
    pub status: String,
    pub prefix: String,
}

fn standing(entry: &LadderChar, rank: i64) -> Standing {
    Standing {
        rank,
        name: entry.name.clone(),
        level: entry.level.clone(),
        experience: entry.experience_num(),
        class: entry.class.clone(),
        status: entry.status.clone(),
        prefix: entry.prefix.clone(),
    }
}

/// Collapse all groups within the inclusive type bracket to each character's best
/// placement, sorted ascending by rank.
///
/// Entries without a name or a numeric rank never place. The sort is stable, so rank
/// ties keep document order.
/// ```
/// # use snapshot::xml::{LadderChar, LadderDoc, LadderGroup};
/// # use view::ladder::best_standings;
/// let doc = LadderDoc {
///     ladders: vec![
///         LadderGroup {
///             ladder_type: "27".to_string(),
///             chars: vec![
///                 LadderChar { rank: "5".to_string(), name: "MfAmazon".to_string(), ..Default::default() },
///                 LadderChar { rank: "9".to_string(), name: "Hoarder".to_string(), ..Default::default() },
///             ],
///             ..Default::default()
///         },
///         LadderGroup {
///             ladder_type: "29".to_string(),
///             chars: vec![
///                 LadderChar { rank: "3".to_string(), name: " mfamazon ".to_string(), ..Default::default() },
///             ],
///             ..Default::default()
///         },
///         // Classic bracket, never counted
///         LadderGroup {
///             ladder_type: "1".to_string(),
///             chars: vec![
///                 LadderChar { rank: "1".to_string(), name: "Hoarder".to_string(), ..Default::default() },
///             ],
///             ..Default::default()
///         },
///     ],
/// };
///
/// let standings = best_standings(&doc, (27, 34));
/// assert!(standings.len() == 2);
/// assert!(standings[0].rank == 3 && standings[0].name == " mfamazon ");
/// assert!(standings[1].rank == 9 && standings[1].name == "Hoarder");
/// ```
pub fn best_standings(doc: &LadderDoc, bracket: (i64, i64)) -> Vec<Standing> {
    let (lo, hi) = bracket;
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut standings: Vec<Standing> = Vec::new();

    for ladder in &doc.ladders {
        match ladder.type_id() {
            Some(id) if id >= lo && id <= hi => {}
            _ => continue,
        }
        for entry in &ladder.chars {
            if entry.name.is_empty() {
                continue;
            }
            let rank = match entry.rank_num() {
                Some(rank) => rank,
                None => continue,
            };
            let key = normalize_name(&entry.name);
            match index.get(&key) {
                Some(&at) => {
                    if rank < standings[at].rank {
                        standings[at] = standing(entry, rank);
                    }
                }
                None => {
                    index.insert(key, standings.len());
                    standings.push(standing(entry, rank));
                }
            }
        }
    }

    standings.sort_by_key(|s| s.rank);
    standings
}

/// The single-type variant used by the ranking page.
///
/// Only groups with exactly the given type count, and the matched group's mode name is
/// reported alongside the standings for the page heading.
pub fn ranking(doc: &LadderDoc, ladder_type: i64) -> (Option<String>, Vec<Standing>) {
    let mode = doc
        .ladders
        .iter()
        .find(|l| l.type_id() == Some(ladder_type))
        .map(|l| l.mode.clone());
    (mode, best_standings(doc, (ladder_type, ladder_type)))
}

/// A character's experience at its best placement within the bracket
/// ```
/// # use snapshot::xml::{LadderChar, LadderDoc, LadderGroup};
/// # use view::ladder::best_experience;
/// let doc = LadderDoc {
///     ladders: vec![LadderGroup {
///         ladder_type: "28".to_string(),
///         chars: vec![
///             LadderChar {
///                 rank: "2".to_string(),
///                 name: "MfAmazon".to_string(),
///                 experience: "1000".to_string(),
///                 ..Default::default()
///             },
///             LadderChar {
///                 rank: "8".to_string(),
///                 name: "mfamazon".to_string(),
///                 experience: "900".to_string(),
///                 ..Default::default()
///             },
///         ],
///         ..Default::default()
///     }],
/// };
/// assert!(best_experience(&doc, "  MfAmazon ", (27, 34)) == Some(1000));
/// assert!(best_experience(&doc, "Nobody", (27, 34)).is_none());
/// ```
pub fn best_experience(doc: &LadderDoc, name: &str, bracket: (i64, i64)) -> Option<i64> {
    let (lo, hi) = bracket;
    let key = normalize_name(name);
    let mut best: Option<(i64, i64)> = None;

    for ladder in &doc.ladders {
        match ladder.type_id() {
            Some(id) if id >= lo && id <= hi => {}
            _ => continue,
        }
        for entry in &ladder.chars {
            if normalize_name(&entry.name) != key {
                continue;
            }
            let rank = match entry.rank_num() {
                Some(rank) => rank,
                None => continue,
            };
            if best.map_or(true, |(r, _)| rank < r) {
                best = Some((rank, entry.experience_num()));
            }
        }
    }

    best.map(|(_, exp)| exp)
}

/// Format an experience value for display, 0 means untracked
/// ```
/// # use view::ladder::fmt_experience;
/// assert!(fmt_experience(1234567) == "1,234,567");
/// assert!(fmt_experience(0) == "-");
/// ```
pub fn fmt_experience(exp: i64) -> String {
    if exp == 0 {
        "-".to_string()
    } else {
        fmt_num(exp, false)
    }
}
