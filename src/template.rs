//! The stub template and day-file naming scheme
//!
//! Every generated file gets the same fixed content: a `part1`/`part2` pair
//! returning the default success value, plus an embedded self-check. The
//! template carries no parameters and no trailing newline.

/// First day in the series (inclusive)
pub const FIRST_DAY: u32 = 1;

/// Last day in the series (inclusive)
pub const LAST_DAY: u32 = 25;

/// Fixed filename prefix for generated stubs
pub const FILE_PREFIX: &str = "day";

/// Fixed filename extension for generated stubs
pub const FILE_EXT: &str = ".rs";

/// The stub written verbatim into every day file
pub const TEMPLATE: &str = r#"use crate::shared::AppResult;

pub fn part1(_input: &str) -> AppResult<u32> {
    Ok(0)
}


pub fn part2(_input: &str) -> AppResult<u32> {
    Ok(0)
}


#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_part1() {
        assert_eq!(part1("").unwrap(), 0);
    }
}"#;

/// Returns the range of day indices, in generation order
pub fn days() -> std::ops::RangeInclusive<u32> {
    FIRST_DAY..=LAST_DAY
}

/// Derives the filename for a day index, e.g. `1` -> `day01.rs`
pub fn day_filename(day: u32) -> String {
    format!("{FILE_PREFIX}{day:02}{FILE_EXT}")
}

/// Extracts the day index from a filename shaped like a day stub
///
/// Returns `Some` for any `day<NN>.rs` with a two-digit index, including
/// indices outside the generated range; callers decide whether an
/// out-of-range index is a stray file.
pub fn parse_day_filename(name: &str) -> Option<u32> {
    let digits = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_EXT)?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_filename_zero_padded() {
        assert_eq!(day_filename(1), "day01.rs");
        assert_eq!(day_filename(9), "day09.rs");
        assert_eq!(day_filename(10), "day10.rs");
        assert_eq!(day_filename(25), "day25.rs");
    }

    #[test]
    fn test_days_range_is_closed() {
        let all: Vec<u32> = days().collect();
        assert_eq!(all.len(), 25);
        assert_eq!(all.first(), Some(&1));
        assert_eq!(all.last(), Some(&25));
    }

    #[test]
    fn test_template_has_both_parts() {
        assert!(TEMPLATE.contains("pub fn part1"));
        assert!(TEMPLATE.contains("pub fn part2"));
        assert!(TEMPLATE.contains("Ok(0)"));
    }

    #[test]
    fn test_template_has_embedded_self_check() {
        assert!(TEMPLATE.contains("#[cfg(test)]"));
        assert!(TEMPLATE.contains("assert_eq!(part1(\"\").unwrap(), 0);"));
    }

    #[test]
    fn test_template_has_no_trailing_newline() {
        assert!(TEMPLATE.ends_with('}'));
    }

    #[test]
    fn test_parse_day_filename() {
        assert_eq!(parse_day_filename("day01.rs"), Some(1));
        assert_eq!(parse_day_filename("day25.rs"), Some(25));
        assert_eq!(parse_day_filename("day00.rs"), Some(0));
        assert_eq!(parse_day_filename("day26.rs"), Some(26));
    }

    #[test]
    fn test_parse_day_filename_rejects_other_shapes() {
        assert_eq!(parse_day_filename("day1.rs"), None);
        assert_eq!(parse_day_filename("day001.rs"), None);
        assert_eq!(parse_day_filename("dayXX.rs"), None);
        assert_eq!(parse_day_filename("day01.txt"), None);
        assert_eq!(parse_day_filename("shared.rs"), None);
    }
}
