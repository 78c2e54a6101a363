//! HTML escaping for rendered fragments
//!
//! Item and character names come from player controlled data, so everything interpolated
//! into markup goes through [`escape`] first.

/// Escape the five characters with meaning in HTML.
/// ```
/// # use util::html::escape;
/// assert!(escape("Mara's <Kaleidoscope>") == "Mara&#39;s &lt;Kaleidoscope&gt;");
/// assert!(escape("R&B \"ring\"") == "R&amp;B &quot;ring&quot;");
/// assert!(escape("plain") == "plain");
/// ```
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
