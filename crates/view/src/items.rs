//! Item category display groups
//!
//! The items dataset arrives already categorized; this module only projects a row into
//! the fixed display categories and escapes the names for markup.
use snapshot::model::{ItemsDoc, ItemsRow};
use util::html::escape;
use util::string::normalize_name;

/// A fixed display category of the items dataset
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub key: &'static str,
    pub title: &'static str,
    pub style: &'static str,
}

/// Display categories in page order. Keys match the dataset's field names.
pub const CATEGORIES: [Category; 11] = [
    Category { key: "unique_set", title: "Unique & Set", style: "unique-set-item" },
    Category { key: "runes", title: "Runes", style: "rune-item" },
    Category { key: "amulets", title: "Amulets", style: "" },
    Category { key: "rings", title: "Rings", style: "" },
    Category { key: "belts", title: "Belts", style: "" },
    Category { key: "charms_small", title: "Charms (Small)", style: "charm-item" },
    Category { key: "charms_large", title: "Charms (Large)", style: "charm-item" },
    Category { key: "charms_grand", title: "Charms (Grand)", style: "charm-item" },
    Category { key: "weapons", title: "Weapons", style: "" },
    Category { key: "armors", title: "Armor/Helms", style: "" },
    Category { key: "other", title: "Other/Potions", style: "potion-item" },
];

/// One item of a display group, name already html escaped
#[derive(Debug, Clone)]
pub struct GroupEntry {
    pub name: String,
    pub style: String,
}

/// A non-empty display category of one character
#[derive(Debug, Clone)]
pub struct ItemGroup {
    pub title: &'static str,
    pub entries: Vec<GroupEntry>,
}

impl ItemGroup {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

fn plain_list<'a>(row: &'a ItemsRow, key: &str) -> &'a [String] {
    match key {
        "runes" => &row.runes,
        "amulets" => &row.amulets,
        "rings" => &row.rings,
        "belts" => &row.belts,
        "charms_small" => &row.charms_small,
        "charms_large" => &row.charms_large,
        "charms_grand" => &row.charms_grand,
        "weapons" => &row.weapons,
        "armors" => &row.armors,
        "other" => &row.other,
        _ => &[],
    }
}

/// Project a row into its non-empty display groups.
///
/// Unique/set entries are styled by their own rarity tag, everything else by the
/// category. An all-empty row yields no groups, the renderer shows a single placeholder
/// instead of eleven empty boxes.
/// ```
/// # use snapshot::model::{ItemsRow, TaggedItem};
/// # use view::items::categorize;
/// let row = ItemsRow {
///     unique_set: vec![TaggedItem { name: "Harlequin Crest".to_string(), kind: "unique".to_string() }],
///     runes: vec!["Ist".to_string(), "Vex".to_string()],
///     ..Default::default()
/// };
/// let groups = categorize(&row);
/// assert!(groups.len() == 2);
/// assert!(groups[0].title == "Unique & Set" && groups[0].entries[0].style == "unique");
/// assert!(groups[1].title == "Runes" && groups[1].count() == 2);
///
/// assert!(categorize(&ItemsRow::default()).is_empty());
/// ```
pub fn categorize(row: &ItemsRow) -> Vec<ItemGroup> {
    let mut groups = Vec::new();

    for cat in &CATEGORIES {
        let entries: Vec<GroupEntry> = if cat.key == "unique_set" {
            row.unique_set
                .iter()
                .map(|item| GroupEntry { name: escape(&item.name), style: item.kind.clone() })
                .collect()
        } else {
            plain_list(row, cat.key)
                .iter()
                .map(|name| GroupEntry { name: escape(name), style: cat.style.to_string() })
                .collect()
        };

        if !entries.is_empty() {
            groups.push(ItemGroup { title: cat.title, entries });
        }
    }

    groups
}

/// Small/large/grand charm counts for the summary cell
/// ```
/// # use snapshot::model::ItemsRow;
/// # use view::items::charm_counts;
/// let row = ItemsRow { charms_small: vec!["Small Charm".to_string()], ..Default::default() };
/// assert!(charm_counts(&row) == (1, 0, 0));
/// ```
pub fn charm_counts(row: &ItemsRow) -> (usize, usize, usize) {
    (row.charms_small.len(), row.charms_large.len(), row.charms_grand.len())
}

/// Find a character's items row by normalized name
/// ```
/// # use snapshot::model::{ItemsDoc, ItemsRow};
/// # use view::items::find_row;
/// let doc = ItemsDoc {
///     rows: vec![ItemsRow { charname: "MfAmazon".to_string(), ..Default::default() }],
/// };
/// assert!(find_row(&doc, " mfamazon ").is_some());
/// assert!(find_row(&doc, "nobody").is_none());
/// ```
pub fn find_row<'a>(doc: &'a ItemsDoc, name: &str) -> Option<&'a ItemsRow> {
    let key = normalize_name(name);
    doc.rows.iter().find(|row| normalize_name(&row.charname) == key)
}
