//! Resolution of Polish relative date expressions
//!
//! Patterns are tried in a fixed order against the lower-cased, trimmed
//! input and the first match wins:
//!
//! | expression | result |
//! |---|---|
//! | `2024-03-20` | unchanged |
//! | `jutro` | +1 day |
//! | `pojutrze` | +2 days |
//! | `następnego dnia`, `następny dzień` | +2 days |
//! | `za N dni` | +N days |
//! | `za tydzień`, `za dwa tygodnie` | +7, +14 days |
//! | `w przyszły piątek` | the weekday 7 to 13 days ahead |
//! | `w piątek` | next occurrence, 1 to 7 days ahead |
//!
//! Anything else is returned as given.

use std::sync::LazyLock;

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use regex::Regex;

const WEEKDAY_PATTERN: &str =
    "(poniedziałek|wtorek|środ[aę]|czwartek|piątek|sobot[aę]|niedziel[aę])";

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid ISO date pattern"));

static TOMORROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bjutro\b").expect("valid tomorrow pattern"));

static IN_DAYS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bza\s+(\d+)\s+(?:dni|dzień)\b").expect("valid day offset pattern")
});

static NEXT_WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\bw\s+przyszł[yaą]\s+{}", WEEKDAY_PATTERN))
        .expect("valid next weekday pattern")
});

static ON_WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\bwe?\s+{}", WEEKDAY_PATTERN)).expect("valid weekday pattern")
});

/// Outcome of resolving a date expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateResolution {
    Resolved(NaiveDate),
    /// No pattern matched; holds the input as given
    Unresolved(String),
}

impl DateResolution {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DateResolution::Resolved(date) => Some(*date),
            DateResolution::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, DateResolution::Resolved(_))
    }
}

impl std::fmt::Display for DateResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateResolution::Resolved(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DateResolution::Unresolved(text) => f.write_str(text),
        }
    }
}

/// Resolve `text` against `reference` into an ISO date, or return it unchanged
pub fn resolve(text: &str, reference: NaiveDate) -> String {
    resolve_date(text, reference).to_string()
}

/// Resolve `text` against the current local date
pub fn resolve_from_today(text: &str) -> String {
    resolve(text, Local::now().date_naive())
}

/// Resolve `text` against `reference`
pub fn resolve_date(text: &str, reference: NaiveDate) -> DateResolution {
    match match_expression(&text.trim().to_lowercase(), reference) {
        Some(date) => DateResolution::Resolved(date),
        None => DateResolution::Unresolved(text.to_string()),
    }
}

fn match_expression(input: &str, reference: NaiveDate) -> Option<NaiveDate> {
    if ISO_DATE.is_match(input) {
        return NaiveDate::parse_from_str(input, "%Y-%m-%d").ok();
    }

    if TOMORROW.is_match(input) {
        return add_days(reference, 1);
    }
    if input.contains("pojutrze") {
        return add_days(reference, 2);
    }
    // Treated like "pojutrze", not +1.
    if input.contains("następnego dnia") || input.contains("następny dzień") {
        return add_days(reference, 2);
    }
    if let Some(caps) = IN_DAYS.captures(input) {
        return caps[1]
            .parse::<u64>()
            .ok()
            .and_then(|days| add_days(reference, days));
    }
    if input.contains("za tydzień") {
        return add_days(reference, 7);
    }
    if input.contains("za dwa tygodnie") || input.contains("za 2 tygodnie") {
        return add_days(reference, 14);
    }
    if let Some(caps) = NEXT_WEEKDAY.captures(input) {
        let target = parse_weekday(&caps[1])?;
        return add_days(reference, days_until(reference.weekday(), target) + 7);
    }
    if let Some(caps) = ON_WEEKDAY.captures(input) {
        let target = parse_weekday(&caps[1])?;
        let days = match days_until(reference.weekday(), target) {
            0 => 7,
            n => n,
        };
        return add_days(reference, days);
    }

    None
}

fn add_days(reference: NaiveDate, days: u64) -> Option<NaiveDate> {
    reference.checked_add_days(Days::new(days))
}

/// Days from `from` forward to `to`, 0 when they are the same weekday
fn days_until(from: Weekday, to: Weekday) -> u64 {
    let diff = i64::from(to.num_days_from_monday()) - i64::from(from.num_days_from_monday());
    diff.rem_euclid(7) as u64
}

/// Map a Polish weekday name, nominative or accusative, to a weekday
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.trim().to_lowercase().as_str() {
        "poniedziałek" => Some(Weekday::Mon),
        "wtorek" => Some(Weekday::Tue),
        "środa" | "środę" => Some(Weekday::Wed),
        "czwartek" => Some(Weekday::Thu),
        "piątek" => Some(Weekday::Fri),
        "sobota" | "sobotę" => Some(Weekday::Sat),
        "niedziela" | "niedzielę" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wednesday
    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> String {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .format("%Y-%m-%d")
            .to_string()
    }

    const WEEKDAYS: [(Weekday, &str); 7] = [
        (Weekday::Mon, "poniedziałek"),
        (Weekday::Tue, "wtorek"),
        (Weekday::Wed, "środę"),
        (Weekday::Thu, "czwartek"),
        (Weekday::Fri, "piątek"),
        (Weekday::Sat, "sobotę"),
        (Weekday::Sun, "niedzielę"),
    ];

    #[test]
    fn test_iso_date_unchanged() {
        assert_eq!(resolve("2024-03-20", reference()), "2024-03-20");
        assert_eq!(resolve("2025-12-01", reference()), "2025-12-01");
    }

    #[test]
    fn test_iso_date_idempotent() {
        let once = resolve("jutro", reference());
        assert_eq!(resolve(&once, reference()), once);
    }

    #[test]
    fn test_tomorrow() {
        assert_eq!(resolve("jutro", reference()), ymd(2024, 3, 21));
        assert_eq!(resolve("  Jutro rano ", reference()), ymd(2024, 3, 21));
    }

    #[test]
    fn test_day_after_tomorrow_is_not_tomorrow() {
        assert_eq!(resolve("pojutrze", reference()), ymd(2024, 3, 22));
    }

    #[test]
    fn test_next_day_is_two_days() {
        assert_eq!(resolve("następnego dnia", reference()), ymd(2024, 3, 22));
        assert_eq!(resolve("następny dzień", reference()), ymd(2024, 3, 22));
    }

    #[test]
    fn test_in_n_days() {
        assert_eq!(resolve("za 3 dni", reference()), ymd(2024, 3, 23));
        assert_eq!(resolve("dostawa za 14 dni", reference()), ymd(2024, 4, 3));
        assert_eq!(resolve("za 1 dzień", reference()), ymd(2024, 3, 21));
    }

    #[test]
    fn test_in_weeks() {
        assert_eq!(resolve("za tydzień", reference()), ymd(2024, 3, 27));
        assert_eq!(resolve("za dwa tygodnie", reference()), ymd(2024, 4, 3));
    }

    #[test]
    fn test_month_and_year_rollover() {
        let reference = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(resolve("jutro", reference), ymd(2025, 1, 1));
        let leap = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(resolve("jutro", leap), ymd(2024, 2, 29));
    }

    #[test]
    fn test_on_weekday() {
        assert_eq!(resolve("w piątek", reference()), ymd(2024, 3, 22));
        assert_eq!(resolve("we wtorek", reference()), ymd(2024, 3, 26));
        // Same weekday rolls a full week
        assert_eq!(resolve("w środę", reference()), ymd(2024, 3, 27));
    }

    #[test]
    fn test_next_weekday() {
        assert_eq!(resolve("w przyszły piątek", reference()), ymd(2024, 3, 29));
        assert_eq!(resolve("w przyszłą środę", reference()), ymd(2024, 3, 27));
        assert_eq!(resolve("w przyszły poniedziałek", reference()), ymd(2024, 4, 1));
    }

    #[test]
    fn test_on_weekday_all_combinations() {
        // 2024-03-18 is a Monday
        for offset in 0..7 {
            let reference = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap() + Days::new(offset);
            for (weekday, name) in WEEKDAYS {
                let resolved = resolve_date(&format!("w {}", name), reference)
                    .date()
                    .unwrap();
                let ahead = (resolved - reference).num_days();
                assert_eq!(resolved.weekday(), weekday, "{} from {}", name, reference);
                assert!((1..=7).contains(&ahead), "{} from {}: {}", name, reference, ahead);
            }
        }
    }

    #[test]
    fn test_next_weekday_all_combinations() {
        for offset in 0..7 {
            let reference = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap() + Days::new(offset);
            for (weekday, name) in WEEKDAYS {
                let on = resolve_date(&format!("w {}", name), reference).date().unwrap();
                let next = resolve_date(&format!("w przyszły {}", name), reference)
                    .date()
                    .unwrap();
                let ahead = (next - reference).num_days();
                assert_eq!(next.weekday(), weekday, "{} from {}", name, reference);
                assert!((7..=13).contains(&ahead), "{} from {}: {}", name, reference, ahead);
                if weekday != reference.weekday() {
                    assert_eq!((next - on).num_days(), 7, "{} from {}", name, reference);
                }
            }
        }
    }

    #[test]
    fn test_nominative_weekday() {
        assert_eq!(resolve("w przyszła sobota", reference()), ymd(2024, 3, 30));
        assert_eq!(parse_weekday("Niedziela"), Some(Weekday::Sun));
        assert_eq!(parse_weekday("weekend"), None);
    }

    #[test]
    fn test_unresolved_returned_verbatim() {
        assert_eq!(resolve("nonsense text", reference()), "nonsense text");
        assert_eq!(resolve("  Kiedyś ", reference()), "  Kiedyś ");
        assert_eq!(resolve("", reference()), "");
        assert!(!resolve_date("nonsense text", reference()).is_resolved());
    }

    #[test]
    fn test_invalid_iso_date_unresolved() {
        assert_eq!(resolve("2024-02-30", reference()), "2024-02-30");
    }

    #[test]
    fn test_resolve_from_today_tomorrow() {
        let expected = (Local::now().date_naive() + Days::new(1))
            .format("%Y-%m-%d")
            .to_string();
        assert_eq!(resolve_from_today("jutro"), expected);
    }
}
