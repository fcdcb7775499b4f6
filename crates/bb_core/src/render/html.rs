//! HTML report renderer.
//!
//! Builds the report as a string: header, one card per player, the
//! roster summary table, team-management options, team special rules,
//! the rules appendix, and the position profile reference. All
//! document-derived text goes through [`escape`]. Rule text is
//! emitted as escaped plain paragraphs.

use std::fmt::Write as _;

use crate::models::player::Player;
use crate::models::profile::Profile;
use crate::models::roster::Rule;
use crate::render::context::{ReportContext, COLUMN_ORDER};

/// Stylesheet embedded when `include_css` is set.
const STYLESHEET: &str = "\
body { font-family: Georgia, serif; margin: 2em auto; max-width: 60em; color: #1a1a1a; }
h1 { border-bottom: 3px double #7a0000; padding-bottom: 0.2em; }
h2 { color: #7a0000; margin-bottom: 0.2em; }
table { border-collapse: collapse; width: 100%; margin: 0.5em 0 1.5em; }
th, td { border: 1px solid #999; padding: 0.3em 0.5em; text-align: left; }
th { background: #ececdf; }
.player-card { border: 1px solid #7a0000; border-radius: 4px; padding: 0.5em 1em; margin: 1em 0; }
.player-card .custom-name { font-style: italic; color: #555; }
.team-meta { margin: 0.2em 0; }
.rule-text { margin: 0.1em 0 0.6em; }
";

/// Escape text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render the full report document.
pub fn render(context: &ReportContext) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(&context.name));
    if context.include_css {
        out.push_str("<style>\n");
        out.push_str(STYLESHEET);
        out.push_str("</style>\n");
    }
    out.push_str("</head>\n<body>\n");

    render_header(&mut out, context);
    render_player_cards(&mut out, &context.players);
    render_summary_table(&mut out, &context.players);
    render_team_options(&mut out, context);
    if let Some(special_rules) = &context.special_rules {
        render_rule_section(&mut out, "Team Special Rules", special_rules);
    }
    render_rule_section(&mut out, "Rules", &context.rules);
    render_profile_reference(&mut out, &context.profiles);

    out.push_str("</body>\n</html>\n");
    out
}

fn render_header(out: &mut String, context: &ReportContext) {
    let _ = writeln!(out, "<h1>{}</h1>", escape(&context.name));
    let _ = writeln!(
        out,
        "<p class=\"team-meta\">Team Value: {}</p>",
        escape(&context.team_value)
    );
    if let Some(league) = &context.league {
        let _ = writeln!(out, "<p class=\"team-meta\">League: {}</p>", escape(league));
    }
}

fn render_player_cards(out: &mut String, players: &[Player]) {
    for player in players {
        out.push_str("<div class=\"player-card\">\n");
        let _ = writeln!(
            out,
            "<h2>#{} {}</h2>",
            player.number,
            escape(player.display_name())
        );
        if player.custom_name.is_some() {
            let _ = writeln!(
                out,
                "<p class=\"custom-name\">{}</p>",
                escape(&player.name)
            );
        }
        render_characteristics_row(out, player);
        if !player.rules.is_empty() {
            let names: Vec<String> =
                player.rules.iter().map(|r| escape(&r.name)).collect();
            let _ = writeln!(out, "<p>{}</p>", names.join(", "));
        }
        out.push_str("</div>\n");
    }
}

fn render_characteristics_row(out: &mut String, player: &Player) {
    out.push_str("<table>\n<tr>");
    for column in COLUMN_ORDER {
        let _ = write!(out, "<th>{}</th>", escape(column));
    }
    out.push_str("</tr>\n<tr>");
    for column in COLUMN_ORDER {
        let value = player.characteristics.get(column).map(String::as_str).unwrap_or("");
        let _ = write!(out, "<td>{}</td>", escape(value));
    }
    out.push_str("</tr>\n</table>\n");
}

fn render_summary_table(out: &mut String, players: &[Player]) {
    out.push_str("<h2>Roster</h2>\n<table>\n<tr><th>#</th>");
    for column in COLUMN_ORDER {
        let _ = write!(out, "<th>{}</th>", escape(column));
    }
    out.push_str("</tr>\n");
    for player in players {
        let _ = write!(out, "<tr><td>{}</td>", player.number);
        for column in COLUMN_ORDER {
            let value = player.characteristics.get(column).map(String::as_str).unwrap_or("");
            let _ = write!(out, "<td>{}</td>", escape(value));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
}

fn render_team_options(out: &mut String, context: &ReportContext) {
    if context.team_options.is_empty() {
        return;
    }
    out.push_str("<h2>Team Management</h2>\n<table>\n<tr><th>Option</th><th>Qty</th></tr>\n");
    for option in &context.team_options {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape(&option.name),
            option.quantity
        );
    }
    out.push_str("</table>\n");
}

fn render_rule_section(out: &mut String, title: &str, rules: &[Rule]) {
    if rules.is_empty() {
        return;
    }
    let _ = writeln!(out, "<h2>{}</h2>", escape(title));
    for rule in rules {
        let _ = writeln!(out, "<h3>{}</h3>", escape(&rule.name));
        let _ = writeln!(out, "<p class=\"rule-text\">{}</p>", escape(&rule.text));
    }
}

fn render_profile_reference(out: &mut String, profiles: &[Profile]) {
    if profiles.is_empty() {
        return;
    }
    out.push_str("<h2>Profiles</h2>\n<table>\n<tr><th>Profile</th>");
    for column in COLUMN_ORDER.iter().skip(1) {
        let _ = write!(out, "<th>{}</th>", escape(column));
    }
    out.push_str("</tr>\n");
    for profile in profiles {
        let _ = write!(out, "<tr><td>{}</td>", escape(&profile.name));
        for column in COLUMN_ORDER.iter().skip(1) {
            let value = profile.characteristics.get(*column).map(String::as_str).unwrap_or("");
            let _ = write!(out, "<td>{}</td>", escape(value));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
}
