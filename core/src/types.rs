//! Shared primitive types used across the dashboard.

use crate::error::{SimError, SimResult};
use chrono::Month;

/// A readiness score. Always in [0, 100].
pub type Score = u8;

/// A map position as `[longitude, latitude]` in degrees.
pub type LonLat = [f64; 2];

/// Parse a month given as a name ("Mar", "march") or a number (1..=12).
pub fn parse_month(input: &str) -> SimResult<Month> {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<u8>() {
        return Month::try_from(n).map_err(|_| SimError::InvalidMonth {
            input: input.to_string(),
        });
    }
    trimmed.parse::<Month>().map_err(|_| SimError::InvalidMonth {
        input: input.to_string(),
    })
}

/// Three-letter chart label for a month ("Jan", "Feb", ...).
pub fn month_label(month: Month) -> &'static str {
    match month {
        Month::January   => "Jan",
        Month::February  => "Feb",
        Month::March     => "Mar",
        Month::April     => "Apr",
        Month::May       => "May",
        Month::June      => "Jun",
        Month::July      => "Jul",
        Month::August    => "Aug",
        Month::September => "Sep",
        Month::October   => "Oct",
        Month::November  => "Nov",
        Month::December  => "Dec",
    }
}
