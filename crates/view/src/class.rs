//! Class abbreviation resolution
use std::collections::HashMap;

/// The canonical abbreviation table, as emitted by a well behaved snapshot
const CLASS_NAMES: [(&str, &str); 8] = [
    ("AMA", "Amazon"),
    ("BAR", "Barbarian"),
    ("NEC", "Necromancer"),
    ("PAL", "Paladin"),
    ("SOR", "Sorceress"),
    ("DRU", "Druid"),
    ("AS", "Assassin"),
    ("ASS", "Assassin"),
];

/// Uppercase with all whitespace stripped, the form class codes are matched in
fn normalize_code(code: &str) -> String {
    code.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_uppercase()
}

/// Maps class abbreviations to full display names.
///
/// Unknown codes pass through unchanged, the table never errors.
/// ```
/// # use view::class::ClassNames;
/// let classes = ClassNames::new();
/// assert!(classes.resolve("sor") == "Sorceress");
/// assert!(classes.resolve(" Ass ") == "Assassin");
/// assert!(classes.resolve("XYZ") == "XYZ");
/// ```
#[derive(Debug, Clone)]
pub struct ClassNames {
    table: HashMap<String, String>,
}

impl ClassNames {
    /// The canonical table only
    pub fn new() -> Self {
        let table = CLASS_NAMES
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();
        Self { table }
    }

    /// The canonical table extended with configured aliases.
    ///
    /// Aliases exist for corrupted codes observed in live data, they are configured
    /// rather than baked in so new corruptions don't need a code change.
    /// ```
    /// # use std::collections::HashMap;
    /// # use view::class::ClassNames;
    /// let mut aliases = HashMap::new();
    /// aliases.insert("SORSI SOR".to_string(), "Sorceress".to_string());
    /// aliases.insert("ZGANSASIN".to_string(), "Assassin".to_string());
    ///
    /// let classes = ClassNames::with_aliases(&aliases);
    /// assert!(classes.resolve("sorsi sor") == "Sorceress");
    /// assert!(classes.resolve("ZgAnSasin") == "Assassin");
    /// ```
    pub fn with_aliases(aliases: &HashMap<String, String>) -> Self {
        let mut classes = Self::new();
        for (code, name) in aliases {
            classes.table.insert(normalize_code(code), name.clone());
        }
        classes
    }

    /// Resolve a class code into its display name, passing unknown codes through
    pub fn resolve(&self, code: &str) -> String {
        match self.table.get(&normalize_code(code)) {
            Some(name) => name.clone(),
            None => code.to_string(),
        }
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self::new()
    }
}
