use chrono::{DateTime, Local, Utc};
use colored::*;
use sprout::api::{CmdMessage, MessageLevel};
use sprout::config::GardenConfig;
use sprout::index::DisplayPlant;
use sprout::status::{next_watering_day, Status};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;
const EVERY_WIDTH: usize = 14;
const DATE_FORMAT: &str = "%a %b %e";

pub const EMPTY_GARDEN: &str = "No plants yet. Add your first plant to get started!";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_config(config: &GardenConfig) {
    for key in sprout::config::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// One line per plant:
/// position, name, interval, last watered (date and time-ago), next date,
/// status badge.
pub fn print_plants(plants: &[DisplayPlant]) {
    for dp in plants {
        let idx = format!("{:>3}. ", dp.position);

        let name = truncate_to_width(&dp.plant.name, NAME_WIDTH);
        let name_pad = NAME_WIDTH.saturating_sub(name.width());

        let every = format!("every {}", days(i64::from(dp.plant.frequency)));
        let watered = watered_on(dp.plant.last_watered);
        let next = next_watering_day(&dp.plant, &Local).format(DATE_FORMAT);

        println!(
            "{}{}{} {:<ew$} {} {} {}  {}",
            idx.dimmed(),
            name.bold(),
            " ".repeat(name_pad),
            every,
            watered.dimmed(),
            "next".dimmed(),
            next,
            badge(dp.status),
            ew = EVERY_WIDTH,
        );
        println!(
            "{}{}",
            " ".repeat(idx.width()),
            due_hint(dp.days_until).dimmed()
        );
    }
}

fn badge(status: Status) -> ColoredString {
    let text = format!(" {} ", status.label());
    match status {
        Status::Due => text.white().on_red().bold(),
        Status::Today => text.black().on_yellow().bold(),
        Status::Upcoming => text.white().on_green().bold(),
    }
}

fn days(n: i64) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}

/// Human description of the distance to the next watering day.
pub fn due_hint(days_until: i64) -> String {
    match days_until {
        0 => "water today".to_string(),
        1 => "water tomorrow".to_string(),
        n if n > 1 => format!("water in {}", days(n)),
        n => format!("overdue by {}", days(-n)),
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

/// `watered Mon Jun  3 (2 days ago)`, with the date in local time.
fn watered_on(timestamp: DateTime<Utc>) -> String {
    let date = timestamp.with_timezone(&Local).format(DATE_FORMAT);
    format!("watered {} ({})", date, format_time_ago(timestamp))
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
