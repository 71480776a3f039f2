//! Display helpers for the Indian locale (en-IN): short dates, rupee amounts,
//! and working-day counts for leave requests.

use crate::error::{HrDeskError, Result};
use chrono::{DateTime, Datelike, NaiveDate, Weekday};

const RUPEE: char = '₹';
const FRACTION_DIGITS: u32 = 3;

/// Parses `YYYY-MM-DD` or an RFC 3339 timestamp. Timestamps keep the calendar
/// date of their own offset.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.date_naive())
        .map_err(|_| HrDeskError::InvalidDate(input.to_string()))
}

/// en-IN short date: `D/M/YYYY`, no zero padding (`2024-03-05` -> `5/3/2024`).
pub fn format_date(input: &str) -> Result<String> {
    Ok(parse_date(input)?.format("%-d/%-m/%Y").to_string())
}

/// Rupee amount with Indian digit grouping: `1234567.5` -> `₹12,34,567.5`.
///
/// At most three fraction digits are kept, trailing zeros dropped. The sign
/// goes after the symbol (`₹-1,234`).
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{}", RUPEE, amount);
    }

    let scale = 10u128.pow(FRACTION_DIGITS);
    let scaled = (amount.abs() * scale as f64).round();
    if scaled >= u128::MAX as f64 {
        // Far past any fraction digit; print the full integer expansion.
        let sign = if amount < 0.0 { "-" } else { "" };
        let digits = format!("{:.0}", amount.abs());
        return format!("{}{}{}", RUPEE, sign, group_indian(&digits));
    }
    let scaled = scaled as u128;
    let whole = scaled / scale;
    let fraction = scaled % scale;

    let mut out = String::new();
    out.push(RUPEE);
    if amount < 0.0 && scaled != 0 {
        out.push('-');
    }
    out.push_str(&group_indian(&whole.to_string()));
    if fraction != 0 {
        let digits = format!("{:0width$}", fraction, width = FRACTION_DIGITS as usize);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Last three digits form one group, everything before it is grouped in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Monday-to-Friday dates in `start..=end`. Zero when `start` is after `end`.
pub fn working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as u32
}

/// [`working_days`] over two date strings.
pub fn working_days_between(start: &str, end: &str) -> Result<u32> {
    Ok(working_days(parse_date(start)?, parse_date(end)?))
}
