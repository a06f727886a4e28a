//! Read-only view models derived from the store

use chrono::{DateTime, Datelike, Utc};

use crate::core::DashboardState;

/// Format cents as dollars, e.g. `600000` as `$6000.00`
pub fn cents_to_dollars(cents: i64) -> String {
    format!("${:.2}", cents as f64 / 100.0)
}

/// Share of earnings a satellite holds back, by month of node age
pub fn held_percentage(joined_at: DateTime<Utc>, now: DateTime<Utc>) -> u8 {
    match months_online(joined_at, now) {
        0..=3 => 75,
        4..=6 => 50,
        7..=9 => 25,
        _ => 0,
    }
}

/// 1-based month of node life `now` falls in
fn months_online(joined_at: DateTime<Utc>, now: DateTime<Utc>) -> i32 {
    if now <= joined_at {
        return 1;
    }

    let mut months = (now.year() - joined_at.year()) * 12 + now.month() as i32 - joined_at.month() as i32;
    if now.day() < joined_at.day() {
        months -= 1;
    }
    months + 1
}

/// Values behind the total held amount card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalHeldArea {
    pub total_held: String,
    pub held_returned: String,
    pub held_remaining: String,
    pub total_paid: String,
    /// `None` when no satellite is selected
    pub held_percentage: Option<u8>,
}

impl TotalHeldArea {
    pub fn from_state(state: &DashboardState, now: DateTime<Utc>) -> Self {
        let totals = state.total_payments();
        let satellite = state.selected_satellite();

        Self {
            total_held: cents_to_dollars(totals.held()),
            held_returned: cents_to_dollars(totals.disposed()),
            held_remaining: cents_to_dollars(totals.held_remaining()),
            total_paid: cents_to_dollars(totals.paid()),
            held_percentage: satellite
                .is_selected()
                .then(|| held_percentage(satellite.joined_at, now)),
        }
    }
}
