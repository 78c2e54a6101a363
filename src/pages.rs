//! Html fragment rendering
//!
//! The portal's pages are static shells that include the fragments produced here. Every
//! value that originates from snapshot data goes through [`escape`] before it lands in
//! markup.
use snapshot::events::StatusEvent;
use snapshot::model::{ItemsDoc, ItemsRow, TaggedItem};
use snapshot::xml::ServerEntry;
use util::html::escape;
use util::string::{fmt_duration, normalize_name, or_dash};
use view::game::GameCard;
use view::items::{self, ItemGroup};
use view::ladder::{self, Standing};
use view::profile::CharacterProfile;
use view::table::compare_cells;

/// Row background palette keyed by account, so one account's characters read as a block
const ACCOUNT_PALETTE: [&str; 6] = ["#ffffff", "#fffbe6", "#f7fff2", "#eef7ff", "#fff0f6", "#f9f5ff"];

fn text_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

/// One pvpgn server's summary card
pub fn server_card(server: &ServerEntry, long_uptime: bool) -> String {
    format!(
        concat!(
            "<div class=\"card\">\n",
            "  <strong>{}</strong>\n",
            "  <span>Users: {}</span>\n",
            "  <span>Games: {}</span>\n",
            "  <span>Total: {}</span>\n",
            "  <span>Logins: {}</span>\n",
            "  <span>Uptime: {}</span>\n",
            "</div>\n"
        ),
        escape(text_or(&server.location, "-")),
        escape(text_or(&server.users, "0")),
        escape(text_or(&server.games, "0")),
        escape(text_or(&server.total_games, "0")),
        escape(text_or(&server.logins, "0")),
        fmt_duration(server.uptime_seconds(), long_uptime),
    )
}

/// One live game's card, roster table included when the game has players
pub fn game_card(card: &GameCard) -> String {
    let mut s = format!(
        "<div class=\"game-card {}\">\n<div class=\"game-title\">{} [ID: {}] ({}) - {} player(s), XP {}</div>\n",
        card.difficulty_class,
        escape(&card.name),
        escape(&card.id),
        escape(&card.difficulty),
        card.user_count,
        card.xp_bonus,
    );

    s.push_str(&format!(
        concat!(
            "<table class=\"game-info\">\n",
            "<tr><th>GameVer</th><td>{}</td></tr>\n",
            "<tr><th>GameType</th><td>{}</td></tr>\n",
            "<tr><th>IsLadder</th><td>{}</td></tr>\n",
            "<tr><th>CreateTime</th><td>{}</td></tr>\n",
            "<tr><th>Creator</th><td>{}</td></tr>\n",
            "</table>\n"
        ),
        escape(&card.version),
        escape(&card.game_type),
        escape(&card.is_ladder),
        escape(&card.create_time),
        escape(&card.creator),
    ));

    if !card.roster.is_empty() {
        s.push_str(concat!(
            "<table class=\"players-table\">\n",
            "<tr><th>Name</th><th>Account</th><th>Class</th><th>Level</th><th>IP</th><th>EnterTime</th></tr>\n"
        ));
        for row in &card.roster {
            s.push_str(&format!(
                concat!(
                    "<tr><td><a href=\"charinfo.html?name={}\" target=\"_blank\">{}</a></td>",
                    "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n"
                ),
                escape(&row.link),
                escape(&row.name),
                escape(&row.account),
                escape(&row.class),
                escape(&row.level),
                escape(&row.ip),
                escape(&row.enter_time),
            ));
        }
        s.push_str("</table>\n");
    }

    s.push_str("</div>\n");
    s
}

/// The index fragment: uptime summary, server cards, game cards, update stamp
pub fn index_page(
    servers: &[ServerEntry],
    server_uptime: Option<u64>,
    d2gs_uptime: Option<u64>,
    games: &[GameCard],
    long_uptime: bool,
    stamp: &str,
) -> String {
    let pvpgn_uptime = servers.first().map(|s| s.uptime_seconds());
    let fmt_opt = |sec: Option<u64>| match sec {
        Some(sec) => fmt_duration(sec, long_uptime),
        None => "N/A".to_string(),
    };

    let mut s = format!(
        concat!(
            "<div id=\"server-summary\">\n",
            "  <span>Server Uptime: <b id=\"server-uptime\">{}</b></span>\n",
            "  <span>PvPGN Uptime: <b id=\"pvpgn-uptime\">{}</b></span>\n",
            "  <span>D2GS Uptime: <b id=\"d2gs-uptime\">{}</b></span>\n",
            "</div>\n"
        ),
        fmt_opt(server_uptime),
        fmt_opt(pvpgn_uptime),
        fmt_opt(d2gs_uptime),
    );

    s.push_str("<div id=\"servers-container\">\n");
    for server in servers {
        s.push_str(&server_card(server, long_uptime));
    }
    s.push_str("</div>\n<div id=\"games-container\">\n");
    for game in games {
        s.push_str(&game_card(game));
    }
    s.push_str(&format!(
        "</div>\n<div id=\"last-updated\">{}</div>\n",
        escape(stamp)
    ));
    s
}

/// The live d2gs uptime fragment, rewritten on every poll
pub fn status_fragment(event: &StatusEvent) -> String {
    match event {
        StatusEvent::D2gsUp { uptime } => {
            format!("<span id=\"d2gs-uptime\">{}</span>\n", escape(uptime))
        }
        StatusEvent::D2gsDown { reason } => format!(
            "<span id=\"d2gs-uptime\" class=\"offline\" title=\"{}\">Error/Offline</span>\n",
            escape(reason)
        ),
    }
}

fn stat_item(label: &str, value: &str) -> String {
    format!("<div class=\"stat-item\"><span>{}</span><span>{}</span></div>\n", label, value)
}

/// A merged character's full page fragment
pub fn character_page(profile: &CharacterProfile) -> String {
    let mut s = format!(
        "<h1 id=\"char-name\">{}</h1>\n<div id=\"char-summary\">{} — Level {} ({} / {})</div>\n",
        escape(&profile.name),
        escape(&profile.class),
        or_dash(profile.level),
        escape(&profile.expansion_type),
        escape(&profile.mode),
    );

    let ists = &profile.item_stats;
    s.push_str(&format!(
        "<div id=\"item-stats-summary\">Total Items: {} | Normal: {} | Magic: {} | Set: {} | Unique: {}</div>\n",
        ists.total_items, ists.normal, ists.magic, ists.set, ists.unique,
    ));

    s.push_str("<div class=\"details-grid\" id=\"char-details\">\n");
    s.push_str(&stat_item("Account", &escape(&or_dash(profile.account.clone()))));
    s.push_str(&stat_item("Experience", &profile.experience));
    s.push_str(&stat_item("Level", &or_dash(profile.level)));
    s.push_str(&stat_item("Gold (Inv)", &or_dash(profile.gold)));
    s.push_str(&stat_item("Gold (Stash)", &or_dash(profile.gold_stash)));
    s.push_str(&stat_item("Last Played", &escape(&or_dash(profile.last_played.clone()))));
    s.push_str("</div>\n");

    s.push_str("<div class=\"details-grid\" id=\"attributes\">\n");
    s.push_str(&stat_item("Strength", &or_dash(profile.strength)));
    s.push_str(&stat_item("Dexterity", &or_dash(profile.dexterity)));
    s.push_str(&stat_item("Vitality", &or_dash(profile.vitality)));
    s.push_str(&stat_item("Energy", &or_dash(profile.energy)));
    s.push_str(&stat_item(
        "Life / Mana",
        &format!("{} / {}", or_dash(profile.life), or_dash(profile.mana)),
    ));
    s.push_str("</div>\n");

    s.push_str("<div id=\"categorized-items-list\">\n");
    s.push_str(&item_groups(&profile.groups));
    s.push_str("</div>\n");
    s
}

/// The message shown when a character's primary profile is missing
pub fn character_not_found(name: &str) -> String {
    format!("<h1 id=\"char-name\">Error: Data for {} not found.</h1>\n", escape(name))
}

/// Categorized item groups, or a single placeholder when the character has none.
/// ```
/// # use d2portal::pages::item_groups;
/// assert!(item_groups(&[]).contains("No classified items found"));
/// ```
pub fn item_groups(groups: &[ItemGroup]) -> String {
    if groups.is_empty() {
        return "<p class=\"no-items\">No classified items found in inventory/stash.</p>\n".to_string();
    }

    let mut s = "<div class=\"details-grid item-details-grid\">\n".to_string();
    for group in groups {
        s.push_str(&format!(
            "<div class=\"details-card category-card\">\n<h3>{} ({})</h3>\n<ul class=\"item-list\">\n",
            group.title,
            group.count(),
        ));
        for entry in &group.entries {
            // entry names arrive pre-escaped from the categorizer
            s.push_str(&format!("<li><span class=\"{}\">{}</span></li>\n", escape(&entry.style), entry.name));
        }
        s.push_str("</ul>\n</div>\n");
    }
    s.push_str("</div>\n");
    s
}

/// The ranking page fragment
pub fn ladder_page(mode: Option<&str>, standings: &[Standing]) -> String {
    let mut s = String::new();
    if let Some(mode) = mode {
        s.push_str(&format!("<h2>Ladder Type: {}</h2>\n", escape(mode)));
    }

    if standings.is_empty() {
        s.push_str("<p>No ladder entries found.</p>\n");
        return s;
    }

    s.push_str(concat!(
        "<table class=\"ladder-table\">\n",
        "<tr><th>Rank</th><th>Name</th><th>Level</th><th>Experience</th>",
        "<th>Class</th><th>Status</th><th>Prefix</th></tr>\n"
    ));
    for entry in standings {
        s.push_str(&format!(
            concat!(
                "<tr><td>{}</td>",
                "<td><a href=\"charinfo.html?name={}\" target=\"_blank\">{}</a></td>",
                "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n"
            ),
            entry.rank,
            escape(&normalize_name(&entry.name)),
            escape(&entry.name),
            escape(&entry.level),
            ladder::fmt_experience(entry.experience),
            escape(&entry.class),
            escape(&entry.status),
            escape(&entry.prefix),
        ));
    }
    s.push_str("</table>\n");
    s
}

fn join_spans(names: &[String], style: &str) -> String {
    if names.is_empty() {
        return "<span class=\"empty\">—</span>".to_string();
    }
    names
        .iter()
        .map(|name| format!("<span class=\"{}\">{}</span>", style, escape(name)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_tagged(items: &[TaggedItem]) -> String {
    if items.is_empty() {
        return "<span class=\"empty\">—</span>".to_string();
    }
    items
        .iter()
        .map(|item| format!("<span class=\"{}\">{}</span>", escape(&item.kind), escape(&item.name)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn items_row(row: &ItemsRow, color: &str) -> String {
    let (small, large, grand) = items::charm_counts(row);
    format!(
        concat!(
            "<tr class=\"account-row\" data-account=\"{}\" style=\"background:{}\">",
            "<td>{}</td>",
            "<td><a href=\"charinfo.html?name={}\" target=\"_blank\">{}</a></td>",
            "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
            "<td>S:{}, L:{}, G:{}</td>",
            "<td>{}</td><td>{}</td><td>{}</td></tr>\n"
        ),
        escape(&row.account),
        color,
        escape(&row.account),
        escape(&normalize_name(&row.charname)),
        escape(&row.charname),
        join_tagged(&row.unique_set),
        join_spans(&row.runes, "rune"),
        join_spans(&row.rings, ""),
        join_spans(&row.belts, ""),
        join_spans(&row.amulets, ""),
        small,
        large,
        grand,
        join_spans(&row.weapons, ""),
        join_spans(&row.armors, ""),
        join_spans(&row.other, ""),
    )
}

/// The aggregated items table fragment.
///
/// Rows come out in the page's default order (by account), each account keeping a stable
/// background color from the palette.
pub fn items_table(doc: &ItemsDoc) -> String {
    let mut accounts: Vec<&str> = doc.rows.iter().map(|r| r.account.as_str()).collect();
    accounts.sort_unstable();
    accounts.dedup();

    let mut rows: Vec<&ItemsRow> = doc.rows.iter().collect();
    rows.sort_by(|a, b| compare_cells(&a.account, &b.account));

    let mut s = concat!(
        "<table id=\"itemsTable\">\n",
        "<tr><th>Account</th><th>Character</th><th>Unique &amp; Set</th><th>Runes</th>",
        "<th>Rings</th><th>Belts</th><th>Amulets</th><th>Charms</th>",
        "<th>Weapons</th><th>Armors</th><th>Other</th></tr>\n"
    )
    .to_string();
    for row in rows {
        let color = accounts
            .iter()
            .position(|acc| *acc == row.account)
            .map(|at| ACCOUNT_PALETTE[at % ACCOUNT_PALETTE.len()])
            .unwrap_or("#ffffff");
        s.push_str(&items_row(row, color));
    }
    s.push_str("</table>\n");
    s
}
