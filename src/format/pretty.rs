use crate::level::Level;
use crate::record::{Attrs, Record};
use chrono::Local;
use colored::{Color, Colorize};
use serde_json::Value;

/// Package label colors. Red is reserved for the error marker.
const PALETTE: [Color; 10] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::BrightCyan,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
];

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// 根据包名选择颜色
///
/// FNV-1a over the name bytes, so the same name gets the same color in
/// every process.
pub fn color_for(package: &str) -> Color {
    let hash = package.bytes().fold(0x811c_9dc5_u32, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193)
    });
    PALETTE[hash as usize % PALETTE.len()]
}

/// `<HH:MM:SS.mmm> <package><suffix>: <message>< key=value...>`
pub fn pretty_format(record: &Record) -> String {
    format!(
        "{} {} {}{}",
        record.time.with_timezone(&Local).format(TIME_FORMAT),
        pretty_label(record),
        record.message,
        pretty_attrs(record.attrs.as_ref())
    )
}

fn pretty_label(record: &Record) -> String {
    let color = color_for(&record.package);
    format!(
        "{}{}{}",
        record.package.color(color),
        pretty_label_ext(record, color),
        ":".color(color)
    )
}

fn pretty_label_ext(record: &Record, color: Color) -> String {
    match record.level {
        Level::Info => String::new(),
        Level::Error => format!("{}{}{}", "(".color(color), "!".red(), ")".color(color)),
        Level::Timer => format!(
            "{}{:?}{}",
            "(".color(color),
            record.elapsed(),
            ")".color(color)
        ),
    }
}

fn pretty_attrs(attrs: Option<&Attrs>) -> String {
    let Some(attrs) = attrs else {
        return String::new();
    };

    attrs
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!(" {}={}", key, s),
            other => format!(" {}={}", key, other),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_info_layout() {
        let line = strip_ansi(&pretty_format(&Record::new("users", Level::Info, "signed in")));

        // HH:MM:SS.mmm
        let (time, rest) = line.split_once(' ').unwrap();
        assert_eq!(time.len(), 12);
        assert_eq!(&time[2..3], ":");
        assert_eq!(&time[8..9], ".");
        assert_eq!(rest, "users: signed in");
    }

    #[test]
    fn test_error_marker() {
        let line = strip_ansi(&pretty_format(&Record::new("database", Level::Error, "bad 5")));
        assert!(line.ends_with(" database(!): bad 5"));
    }

    #[test]
    fn test_timer_shows_elapsed() {
        let record = Record::new("database", Level::Timer, "loaded rows")
            .with_elapsed(Duration::from_millis(1500));
        let line = strip_ansi(&pretty_format(&record));
        assert!(line.ends_with(" database(1.5s): loaded rows"));
    }

    #[test]
    fn test_attrs_rendering() {
        assert_eq!(pretty_attrs(None), "");
        assert_eq!(pretty_attrs(Some(&Attrs::new())), "");

        let mut attrs = Attrs::new();
        attrs.insert("id".to_string(), Value::from(7));
        attrs.insert("name".to_string(), Value::from("alice"));
        attrs.insert("admin".to_string(), Value::from(false));

        let record = Record::new("users", Level::Info, "created").with_attrs(attrs);
        let line = strip_ansi(&pretty_format(&record));
        assert!(line.ends_with("users: created admin=false id=7 name=alice"));
    }

    #[test]
    fn test_color_is_stable() {
        assert_eq!(color_for("database"), color_for("database"));
        assert_ne!(color_for("database"), Color::Red);
        // known FNV-1a value for "", keeps the hash stable across releases
        assert_eq!(color_for(""), PALETTE[0x811c_9dc5_usize % PALETTE.len()]);
    }

    #[test]
    fn test_same_package_same_color_marker() {
        colored::control::set_override(true);

        let first = pretty_format(&Record::new("server", Level::Info, "one"));
        let second = pretty_format(&Record::new("server", Level::Error, "two"));

        let label = "server".color(color_for("server")).to_string();
        assert!(label.starts_with('\u{1b}'));
        assert!(first.contains(&label));
        assert!(second.contains(&label));
    }
}
