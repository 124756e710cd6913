use super::PackageSettings;
use crate::level::{OutputSettings, parse_verbosity_level};

/// Parse a package list.
///
/// Accepts:
///   foo,bar,qux@timer
///   *
///   *@error
///   *@error,database@timer
///
/// Entries without a `@token` get `default`. A later entry for the same
/// name replaces an earlier one. An empty input yields a single entry named
/// `""`, since splitting the empty string still produces one item.
pub fn parse_package_settings(input: &str, default: OutputSettings) -> PackageSettings {
    let mut all = PackageSettings::new();

    for item in input.split(',') {
        let (name, verbosity) = parse_package_name(item);
        all.insert(name, verbosity.unwrap_or(default));
    }

    all
}

/// Parse one list item.
///
/// Accepts:
///   users
///   database@timer
///   server@error
///
/// Only the segment right after the first `@` is the token; anything after
/// a second `@` is ignored.
pub fn parse_package_name(input: &str) -> (String, Option<OutputSettings>) {
    let mut parsed = input.split('@');
    let name = parsed.next().unwrap_or_default().trim().to_string();

    (name, parsed.next().map(parse_verbosity_level))
}
