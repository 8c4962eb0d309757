use chrono::{
    format::ParseErrorKind, DateTime, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime,
    TimeDelta, TimeZone, Utc,
};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref CLEAN_DATE: Regex = Regex::new(r"[^\w\d:.+\-]+").unwrap();
    static ref CLEAN_DATE_2: Regex = Regex::new(r"-{2,}").unwrap();
    static ref ORDINAL_NUMBER: Regex = Regex::new(r"(\d)(nd|st|rd|th)").unwrap();
    static ref DIGITS_ONLY: Regex = Regex::new(r"^\d+$").unwrap();
    static ref HAS_DIGITS: Regex = Regex::new(r"\d+").unwrap();
    static ref NONE_LETTER: Regex = Regex::new(r"\W").unwrap();
    /// Selects "1 year ago" -> "1y"
    static ref RELATIVE_DATE: Regex = Regex::new(r"(\d+)\s*(\w\w?)").unwrap();
}

const STRING_FOR_CURRENT_DATE: [&str; 6] = ["now", "latest", "hot", "today", "current", "while"];

const DEFAULT_DATE_FORMATS: [&str; 14] = [
    // 2022-01-30T09:10:11.123Z
    "%Y-%m-%dT%H:%M:%S%.fZ",
    // 2022-01-30T09:10:11.123+0800
    "%Y-%m-%dT%H:%M:%S%.f%z",
    // 2022-01-30T09:10:11+0800
    "%Y-%m-%dT%H:%M:%S%z",
    // 2022-01-30T09:10:11Z
    "%Y-%m-%dT%H:%M:%SZ",
    // 2022-01-30T09:10:11
    "%Y-%m-%dT%H:%M:%S",
    // 2022-01-30
    "%Y-%m-%d",
    // Juli 30 2022 09:10
    "%B-%d-%Y-%H:%M",
    // Oct 30 22 09:10:11
    "%b-%d-%y-%H:%M:%S",
    // Juli 30 2022
    "%B-%d-%Y",
    // Oct 30 22
    "%b-%d-%y",
    // 30 Juli 2022
    "%d-%B-%Y",
    // 2022.12.30
    "%Y.%m.%d",
    // 30 01 2022
    "%d-%m-%Y",
    // 30.01.2022
    "%d.%m.%Y",
];

/// Parse with [format], allowing the time part to be missing
fn parse_with_format(date: &str, format: &str) -> Option<DateTime<Utc>> {
    match NaiveDateTime::parse_from_str(date, format) {
        Ok(datetime) => Some(Utc.from_utc_datetime(&datetime)),
        Err(e) if e.kind() == ParseErrorKind::NotEnough => NaiveDate::parse_from_str(date, format)
            .ok()
            .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))),
        Err(_) => None,
    }
}

pub fn try_parse_date(date: &str, formats: &[String]) -> Option<DateTime<Utc>> {
    try_parse_date_at(date, formats, Utc::now())
}

/// Like [try_parse_date], with relative dates ("2 hours ago") counted back from [now]
pub fn try_parse_date_at(date: &str, formats: &[String], now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }

    for format in formats {
        if let Some(datetime) = parse_with_format(date, format) {
            return Some(datetime);
        }
    }

    // Check if epoch millis [digits only]
    if DIGITS_ONLY.is_match(date) {
        return date.parse().ok().and_then(DateTime::from_timestamp_millis);
    }

    // Check if text only
    if !HAS_DIGITS.is_match(date) {
        let date = NONE_LETTER.replace_all(date, "").to_ascii_lowercase();

        if date.contains("yesterday") {
            return now.checked_sub_signed(Duration::days(1));
        }
        for current_string in STRING_FOR_CURRENT_DATE {
            if date.contains(current_string) {
                return Some(now);
            }
        }
        if date.contains("week") {
            return now.checked_sub_signed(Duration::weeks(1));
        }
        if date.contains("month") {
            return now.checked_sub_months(Months::new(1));
        }
        if date.contains("year") {
            return now.checked_sub_signed(Duration::days(365));
        }
        return None;
    }

    // Check if date format (multiple digits)
    if HAS_DIGITS.find_iter(date).count() > 1 {
        let cleaned = CLEAN_DATE.replace_all(date, "-");
        let cleaned = CLEAN_DATE_2.replace_all(&cleaned, "-");
        let cleaned = ORDINAL_NUMBER.replace_all(&cleaned, |cap: &Captures| cap[1].to_owned());
        let cleaned = cleaned.trim_matches('-');
        for format in DEFAULT_DATE_FORMATS {
            if let Some(datetime) = parse_with_format(cleaned, format) {
                return Some(datetime);
            }
        }
    }

    // Check if relative
    // e.g. "1 year ago"
    let binding = date.to_ascii_lowercase();
    let captures = RELATIVE_DATE.captures(&binding)?;
    // Assume that it always is [number][type] ago
    // like 1 year ago
    let amount: i64 = captures[1].parse().ok()?;
    let rel_type = &captures[2];

    // Minutes
    let delta = if rel_type == "mi" {
        TimeDelta::try_minutes(amount)?
    } else {
        match rel_type.chars().next()? {
            's' => TimeDelta::try_seconds(amount)?,
            'h' => TimeDelta::try_hours(amount)?,
            'd' => TimeDelta::try_days(amount)?,
            'w' => TimeDelta::try_weeks(amount)?,
            'm' => return now.checked_sub_months(Months::new(u32::try_from(amount).ok()?)),
            'y' => TimeDelta::try_days(amount.checked_mul(365)?)?,
            _ => return None,
        }
    };
    now.checked_sub_signed(delta)
}
