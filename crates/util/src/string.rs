//! String related functions
use num_format::{Locale, ToFormattedString};

use crate::div_rem;

/// Format seconds into user friendly string.
///
/// The month bucket (30 days) is only used if `include_months` is `true`, it is meant for
/// long running counters such as server uptime.
/// Units with a zero quotient are skipped, except seconds which are always emitted.
/// ```
/// # use util::string::fmt_duration;
/// assert!(fmt_duration(0, false) == "0s");
/// assert!(fmt_duration(90061, false) == "1d 1h 1m 1s");
/// assert!(fmt_duration(90061, true) == "1d 1h 1m 1s");
/// assert!(fmt_duration(3 * 2592000 + 5, true) == "3mo 5s");
/// assert!(fmt_duration(3 * 2592000 + 5, false) == "90d 5s");
/// ```
pub fn fmt_duration(seconds: u64, include_months: bool) -> String {
    let mut parts = Vec::new();

    let seconds = if include_months {
        let (months, seconds) = div_rem!(seconds, 30 * 86400);
        if months > 0 {
            parts.push(format!("{}mo", months));
        }
        seconds
    } else {
        seconds
    };

    let (days, seconds) = div_rem!(seconds, 86400);
    let (hours, seconds) = div_rem!(seconds, 3600);
    let (minutes, seconds) = div_rem!(seconds, 60);

    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    parts.push(format!("{}s", seconds));

    parts.join(" ")
}

/// Coerce a string into a seconds count.
///
/// The uptime snapshot files contain a bare integer, but may be missing or hold garbage, in
/// which case this returns 0.
/// ```
/// # use util::string::coerce_seconds;
/// assert!(coerce_seconds(" 3600\n") == 3600);
/// assert!(coerce_seconds("N/A") == 0);
/// assert!(coerce_seconds("") == 0);
/// ```
pub fn coerce_seconds(s: &str) -> u64 {
    s.trim().parse().unwrap_or(0)
}

/// Normalize a character name into a lookup key.
///
/// Lower-cased with all whitespace stripped, the same rule every snapshot source is matched
/// with.
/// ```
/// # use util::string::normalize_name;
/// assert!(normalize_name("  MfAmazon ") == "mfamazon");
/// assert!(normalize_name("mfamazon") == "mfamazon");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_lowercase()
}

/// Format a number into String.
/// If `shorthand` is `true`, and number >= 1M, it is then formatted in shorthand up to billions.
/// ```
/// # use util::string::fmt_num;
/// assert!(fmt_num(10_000, false) == "10,000");
/// assert!(fmt_num(12_345_000, false) == "12,345,000");
/// assert!(fmt_num(12_345_000, true) == "12.34M");
/// ```
pub fn fmt_num(num: i64, shorthand: bool) -> String {
    if shorthand && num >= 1_000_000 {
        return if num >= 1_000_000_000 {
            let mut num = (num / 10_000_000) as f64;
            num /= 100.0;
            format!("{}B", num)
        } else {
            let mut num = (num / 10_000) as f64;
            num /= 100.0;
            format!("{}M", num)
        };
    }
    num.to_formatted_string(&Locale::en)
}

/// Display a value, or "-" if it is absent.
/// ```
/// # use util::string::or_dash;
/// assert!(or_dash(Some(42)) == "42");
/// assert!(or_dash(None::<i64>) == "-");
/// ```
pub fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Deserialize content of file into `Option<...>`.
///
/// Takes the path to the json file, and an optional default value.
/// If the file doesn't exists and default value is provided, then returns that default value.
/// ```no_run
/// # use util::read_json;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Cache;
///
/// let cache: Option<Cache> = read_json!("cache.json");
/// let names: Option<Vec<String>> = read_json!("names.json", Vec::new());
/// ```
#[macro_export]
macro_rules! read_json {
    ($path:expr) => {
        match ::std::fs::read_to_string($path) {
            Ok(s) => match ::serde_json::from_str(&s) {
                Ok(json) => Some(json),
                Err(why) => {
                    ::tracing::error!("Failed to parse json file '{}': {:#}", $path, why);
                    None
                }
            },
            Err(why) => {
                ::tracing::error!("Failed to open file '{}': {:#}", $path, why);
                None
            }
        }
    };
    ($path:expr, $default:expr) => {
        match ::std::fs::read_to_string($path) {
            Ok(s) => match ::serde_json::from_str(&s) {
                Ok(json) => Some(json),
                Err(why) => {
                    ::tracing::error!("Failed to parse json file '{}': {:#}", $path, why);
                    None
                }
            },
            Err(why) => {
                if let ::std::io::ErrorKind::NotFound = why.kind() {
                    Some($default)
                } else {
                    ::tracing::error!("Failed to open file '{}': {:#}", $path, why);
                    None
                }
            }
        }
    };
}

/// Serialize a value into String and write to file
/// ```no_run
/// # use util::write_json;
/// let data = vec![1, 2, 3];
/// write_json!("data", &data, "user data");
/// ```
/// This macro takes a string that describes the value, and is used in error logging.
#[macro_export]
macro_rules! write_json {
    ($path:expr, $data:expr, $ctx:expr) => {
        match ::serde_json::to_string($data) {
            Ok(s) => match ::std::fs::write($path, s) {
                Ok(_) => {}
                Err(why) => ::tracing::error!("Failed to save {} to {}: {}", $ctx, $path, why),
            },
            Err(why) => ::tracing::error!("Failed to covert {} to string: {}", $ctx, why),
        }
    };
}
