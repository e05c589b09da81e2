//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Layout (width, truncation,
//! padding) is computed on plain strings with `unicode-width`; color is applied
//! last so tests can render without it.

use colored::{ColoredString, Colorize};
use habitz::api::{CmdMessage, IndexedHabit, MessageLevel};
use habitz::config::HabitzConfig;
use habitz::model::TrackedDate;
use habitz::streak::HabitStats;
use std::path::Path;
use std::time::Duration;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const STREAK_WIDTH: usize = 12;
pub const DONE_MARKER: &str = "✓";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

fn paint(text: ColoredString, use_color: Option<bool>) -> String {
    match use_color {
        Some(false) => text.clear().to_string(),
        _ => text.to_string(),
    }
}

/// Renders the habit table, one line per habit.
pub fn render_habit_list(habits: &[IndexedHabit], today: TrackedDate) -> String {
    render_habit_list_internal(habits, today, None)
}

fn render_habit_list_internal(
    habits: &[IndexedHabit],
    today: TrackedDate,
    use_color: Option<bool>,
) -> String {
    if habits.is_empty() {
        return "No habits yet. Add one with `habitz add <name>`.\n".to_string();
    }

    let idx_width = habits
        .iter()
        .map(|h| format!("{}.", h.index).width())
        .max()
        .unwrap_or(2);
    let short_width = habits
        .iter()
        .map(|h| h.habit.short_name.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for ih in habits {
        let stats = HabitStats::compute(&ih.habit, today);

        let idx = format!("{:>width$} ", format!("{}.", ih.index), width = idx_width);
        let short = if short_width > 0 {
            let pad = short_width.saturating_sub(ih.habit.short_name.width());
            format!("{}{} ", ih.habit.short_name, " ".repeat(pad))
        } else {
            String::new()
        };
        let marker = if stats.done_today { DONE_MARKER } else { " " };

        // "  " + marker + " " before the index
        let fixed = 4 + idx.width() + short.width() + STREAK_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let name = truncate_to_width(&ih.habit.name, available);
        let padding = " ".repeat(available.saturating_sub(name.width()));
        let streak = format!("{:>width$}", streak_label(&stats), width = STREAK_WIDTH);

        out.push_str(&format!(
            "  {} {}{}{}{}{}\n",
            paint(marker.green(), use_color),
            paint(idx.yellow(), use_color),
            paint(short.cyan(), use_color),
            name,
            padding,
            paint(streak.dimmed(), use_color),
        ));
    }
    out
}

fn streak_label(stats: &HabitStats) -> String {
    match stats.current_streak {
        0 => String::new(),
        1 => "1 day".to_string(),
        n => format!("{} days", n),
    }
}

/// Renders one habit with its statistics.
pub fn render_habit_detail(ih: &IndexedHabit, stats: &HabitStats, today: TrackedDate) -> String {
    render_habit_detail_internal(ih, stats, today, None)
}

fn render_habit_detail_internal(
    ih: &IndexedHabit,
    stats: &HabitStats,
    today: TrackedDate,
    use_color: Option<bool>,
) -> String {
    let mut out = format!(
        "{} {}\n",
        paint(format!("{}.", ih.index).yellow(), use_color),
        paint(ih.habit.name.bold(), use_color)
    );
    if ih.habit.has_short_name() {
        out.push_str(&format!("  Short name:     {}\n", ih.habit.short_name));
    }
    out.push_str(&format!("  Days tracked:   {}\n", stats.total));
    out.push_str(&format!("  Current streak: {}\n", stats.current_streak));
    out.push_str(&format!("  Longest streak: {}\n", stats.longest_streak));
    let last = match stats.last_done {
        Some(date) => format!("{} ({})", date, format_days_ago(date, today)),
        None => "never".to_string(),
    };
    out.push_str(&format!("  Last done:      {}\n", last));
    out
}

/// Renders the effective configuration and the data file in use.
pub fn render_config(config: &HabitzConfig, config_file: &Path, data_file: &Path) -> String {
    format!(
        "config_file     = {}\ndata_file       = {}\nauto_short_name = {}\n",
        config_file.display(),
        data_file.display(),
        config.auto_short_name
    )
}

fn format_days_ago(date: TrackedDate, today: TrackedDate) -> String {
    match date.days_until(today) {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        days if days < 0 => "in the future".to_string(),
        days => {
            let mut formatter = Formatter::new();
            formatter.num_items(1);
            formatter.convert(Duration::from_secs(days as u64 * 86_400))
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
