//! Table and feedback rendering

use std::fmt::Write as _;
use std::io::IsTerminal;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

use rosterank_config::ColorMode;
use rosterank_core::StudentRecord;
use rosterank_ranking::RankingResult;

/// Empty-state line for the roster table.
pub const EMPTY_ROSTER: &str = "No students added yet.";

/// Empty-state line for the ranking table.
pub const RANKING_PENDING: &str = "Sorting pending…";

/// Resolves a configured color mode against the terminal.
pub fn colors_enabled(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Renders the roster in insertion order: index, name, score, short id.
pub fn render_roster(records: &[StudentRecord], colors: bool) -> String {
    if records.is_empty() {
        return EMPTY_ROSTER.to_string();
    }

    let name_width = column_width(records.iter().map(|r| r.name().len()));
    let mut out = String::new();
    let header = format!("  #  {:<name_width$}  Score  Id", "Name");
    push_header(&mut out, &header, colors);

    for (index, record) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<name_width$}  {:>5}  {}",
            index + 1,
            record.name(),
            format_score(record.score()),
            short_id(record),
        );
    }

    out.trim_end().to_string()
}

/// Renders a ranking: rank badge, name, score.
pub fn render_ranking(result: &RankingResult, colors: bool) -> String {
    if result.is_empty() {
        return RANKING_PENDING.to_string();
    }

    let name_width = column_width(result.ranked.iter().map(|r| r.name().len()));
    let mut out = String::new();
    let header = format!("  #  {:<name_width$}  Score", "Name");
    push_header(&mut out, &header, colors);

    for (index, record) in result.ranked.iter().enumerate() {
        let badge = format!("{:>3}", index + 1);
        let badge = if colors {
            badge.bright_cyan().to_string()
        } else {
            badge
        };
        let _ = writeln!(
            out,
            "{}  {:<name_width$}  {:>5}",
            badge,
            record.name(),
            format_score(record.score()),
        );
    }

    out.trim_end().to_string()
}

/// Renders the sort summary block: order label, passes, swaps, total.
pub fn render_summary(result: &RankingResult, colors: bool) -> String {
    let passes = result.stats.passes.to_formatted_string(&Locale::en);
    let swaps = result.stats.swaps.to_formatted_string(&Locale::en);
    let total = result.len().to_formatted_string(&Locale::en);

    let mut out = String::new();
    let _ = writeln!(out, "{} {}", label("Order:", colors), result.direction.label());
    let _ = writeln!(out, "{} {}", label("Passes:", colors), passes);
    let _ = writeln!(out, "{} {}", label("Swaps:", colors), swaps);
    let _ = write!(out, "{} {}", label("Total students:", colors), total);
    out
}

/// Renders a success feedback banner.
pub fn success(message: &str, colors: bool) -> String {
    if colors {
        format!("{} {}", "✔".green(), message.green())
    } else {
        format!("✔ {}", message)
    }
}

/// Renders an error feedback banner.
pub fn error(message: &str, colors: bool) -> String {
    if colors {
        format!("{} {}", "✖".red(), message.red())
    } else {
        format!("✖ {}", message)
    }
}

/// Formats a score without a trailing ".0" for whole values.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        score.to_string()
    }
}

fn short_id(record: &StudentRecord) -> String {
    let id = record.id().to_string();
    id.chars().take(8).collect()
}

fn column_width(lengths: impl Iterator<Item = usize>) -> usize {
    lengths.chain(std::iter::once("Name".len())).max().unwrap_or(4)
}

fn push_header(out: &mut String, header: &str, colors: bool) {
    if colors {
        let _ = writeln!(out, "{}", header.bold());
    } else {
        let _ = writeln!(out, "{}", header);
    }
}

fn label(text: &str, colors: bool) -> String {
    if colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterank_core::validate;
    use rosterank_ranking::{rank, Direction};

    fn student(name: &str, score: f64) -> StudentRecord {
        validate(name, &score.to_string()).unwrap()
    }

    #[test]
    fn test_empty_roster_renders_empty_state() {
        assert_eq!(render_roster(&[], false), EMPTY_ROSTER);
    }

    #[test]
    fn test_roster_rows_in_insertion_order() {
        let records = vec![student("Alice", 90.0), student("Bob", 70.0)];
        let out = render_roster(&records, false);

        let alice_at = out.find("Alice").unwrap();
        let bob_at = out.find("Bob").unwrap();
        assert!(alice_at < bob_at);
        assert!(out.contains("Score"));
    }

    #[test]
    fn test_empty_ranking_renders_pending_state() {
        let result = rank(&[], Direction::Descending);
        assert_eq!(render_ranking(&result, false), RANKING_PENDING);
    }

    #[test]
    fn test_summary_reports_engine_counts() {
        let records = vec![
            student("Alice", 90.0),
            student("Bob", 70.0),
            student("Cara", 85.0),
        ];
        let result = rank(&records, Direction::Descending);
        let out = render_summary(&result, false);

        assert!(out.contains("Order: High → Low"));
        assert!(out.contains("Passes: 2"));
        assert!(out.contains("Swaps: 1"));
        assert!(out.contains("Total students: 3"));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(90.0), "90");
        assert_eq!(format_score(85.5), "85.5");
        assert_eq!(format_score(0.0), "0");
    }

    #[test]
    fn test_feedback_banners_plain() {
        assert_eq!(success("Added Alice.", false), "✔ Added Alice.");
        assert_eq!(error("Score must be a number.", false), "✖ Score must be a number.");
    }
}
