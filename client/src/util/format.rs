//! French-locale display formatting for dates and prices.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::macros::format_description;

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Thousands separator used by the French locale (narrow no-break space).
const GROUP_SEP: char = '\u{202f}';
/// Space between amount and currency sign (no-break space).
const CURRENCY_SEP: char = '\u{a0}';

/// Long French date, e.g. `"2026-10-17"` -> `"17 octobre 2026"`.
///
/// Accepts a bare date or anything starting with one (an RFC 3339 timestamp).
/// Returns `None` when no date can be read.
pub fn format_date(raw: &str) -> Option<String> {
    let head = raw.trim().get(..10)?;
    let date = Date::parse(head, format_description!("[year]-[month]-[day]")).ok()?;
    let month = MONTHS_FR[usize::from(u8::from(date.month())) - 1];
    Some(format!("{} {month} {}", date.day(), date.year()))
}

/// Euro amount in the French locale, e.g. `1234.5` -> `"1 234,50 €"`.
#[allow(clippy::cast_possible_truncation)]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("0,00{CURRENCY_SEP}€");
    }
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let units = group_thousands(cents / 100);
    format!("{sign}{units},{:02}{CURRENCY_SEP}€", cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEP);
        }
        out.push(ch);
    }
    out
}
