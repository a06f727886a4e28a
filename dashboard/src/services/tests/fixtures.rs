//! Test fixtures for dashboard service tests

use chrono::{TimeZone, Utc};

use crate::types::{Paystub, Satellite, SatelliteScores, Stamp};

pub fn create_test_satellite(id: &str) -> Satellite {
    Satellite {
        id: id.to_string(),
        storage_daily: vec![Stamp::default()],
        storage_summary: 111.0,
        bandwidth_summary: 222.0,
        egress_summary: 50.0,
        ingress_summary: 70.0,
        audits: SatelliteScores::new("", 1.0, 0.0, 0.0),
        joined_at: Utc.with_ymd_and_hms(2018, 1, 30, 0, 0, 0).unwrap(),
        ..Satellite::default()
    }
}

pub fn create_test_paystub(held: i64, disposed: i64, paid: i64) -> Paystub {
    Paystub {
        satellite_id: "3".to_string(),
        period: "2020-05".to_string(),
        held,
        disposed,
        paid,
    }
}
