//! Storage node domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Disk usage at rest for one interval
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stamp {
    pub at_rest_total: f64,
    pub interval_start: DateTime<Utc>,
}

impl Stamp {
    pub fn new(at_rest_total: f64, interval_start: DateTime<Utc>) -> Self {
        Self {
            at_rest_total,
            interval_start,
        }
    }
}

/// Bandwidth used in one interval, in bytes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BandwidthUsed {
    pub egress: u64,
    pub ingress: u64,
    pub interval_start: DateTime<Utc>,
}

impl BandwidthUsed {
    pub fn total(&self) -> u64 {
        self.egress + self.ingress
    }
}

/// Reputation scores a satellite keeps for the node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SatelliteScores {
    pub satellite_name: String,
    pub audit_score: f64,
    pub suspension_score: f64,
    pub online_score: f64,
}

impl SatelliteScores {
    pub fn new(satellite_name: impl Into<String>, audit_score: f64, suspension_score: f64, online_score: f64) -> Self {
        Self {
            satellite_name: satellite_name.into(),
            audit_score,
            suspension_score,
            online_score,
        }
    }
}

/// A satellite the node works for, as shown on the dashboard.
///
/// `Default` is the "nothing selected" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    pub id: String,
    #[serde(default)]
    pub storage_daily: Vec<Stamp>,
    #[serde(default)]
    pub bandwidth_daily: Vec<BandwidthUsed>,
    #[serde(default)]
    pub egress_daily: Vec<BandwidthUsed>,
    #[serde(default)]
    pub ingress_daily: Vec<BandwidthUsed>,
    pub storage_summary: f64,
    pub bandwidth_summary: f64,
    pub egress_summary: f64,
    pub ingress_summary: f64,
    pub audits: SatelliteScores,
    pub joined_at: DateTime<Utc>,
}

impl Satellite {
    pub fn is_selected(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Payout record for one satellite and one period. Amounts are in cents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paystub {
    #[serde(default)]
    pub satellite_id: String,
    /// `YYYY-MM`
    #[serde(default)]
    pub period: String,
    pub held: i64,
    pub disposed: i64,
    pub paid: i64,
}

/// Totals over a set of paystubs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TotalPayments {
    held: i64,
    disposed: i64,
    paid: i64,
}

impl TotalPayments {
    /// Sums every paystub. Amounts come from the node unchecked, so sums saturate at the `i64` bounds.
    pub fn new(paystubs: &[Paystub]) -> Self {
        paystubs.iter().fold(Self::default(), |totals, paystub| Self {
            held: totals.held.saturating_add(paystub.held),
            disposed: totals.disposed.saturating_add(paystub.disposed),
            paid: totals.paid.saturating_add(paystub.paid),
        })
    }

    pub fn held(&self) -> i64 {
        self.held
    }

    pub fn disposed(&self) -> i64 {
        self.disposed
    }

    pub fn paid(&self) -> i64 {
        self.paid
    }

    /// Held amount not yet returned to the node
    pub fn held_remaining(&self) -> i64 {
        self.held.saturating_sub(self.disposed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn paystub(held: i64, disposed: i64, paid: i64) -> Paystub {
        Paystub {
            held,
            disposed,
            paid,
            ..Paystub::default()
        }
    }

    #[test]
    fn test_total_payments_single_paystub() {
        let totals = TotalPayments::new(&[paystub(600000, 100000, 1000000)]);

        assert_eq!(totals.held(), 600000);
        assert_eq!(totals.disposed(), 100000);
        assert_eq!(totals.paid(), 1000000);
        assert_eq!(totals.held_remaining(), 500000);
    }

    #[test]
    fn test_total_payments_sums_paystubs() {
        let totals = TotalPayments::new(&[paystub(100, 0, 1000), paystub(50, 25, 2000), paystub(0, 75, 300)]);

        assert_eq!(totals.held(), 150);
        assert_eq!(totals.disposed(), 100);
        assert_eq!(totals.paid(), 3300);
    }

    #[test]
    fn test_total_payments_saturate_on_overflow() {
        let totals = TotalPayments::new(&[paystub(i64::MAX, 0, i64::MIN), paystub(1, 0, -1)]);

        assert_eq!(totals.held(), i64::MAX);
        assert_eq!(totals.paid(), i64::MIN);
    }

    #[test]
    fn test_held_remaining_saturates() {
        let totals = TotalPayments::new(&[paystub(i64::MIN, 1, 0)]);
        assert_eq!(totals.held_remaining(), i64::MIN);

        let totals = TotalPayments::new(&[paystub(i64::MAX, -1, 0)]);
        assert_eq!(totals.held_remaining(), i64::MAX);
    }

    #[test]
    fn test_total_payments_from_oversized_response() {
        let paystubs: Vec<Paystub> = serde_json::from_str(
            r#"[{"held": 9223372036854775807, "disposed": 0, "paid": 0}, {"held": 1, "disposed": 0, "paid": 0}]"#,
        )
        .unwrap();

        let totals = TotalPayments::new(&paystubs);
        assert_eq!(totals.held(), i64::MAX);
        assert_eq!(totals.held_remaining(), i64::MAX);
    }

    #[test]
    fn test_total_payments_empty() {
        assert_eq!(TotalPayments::new(&[]), TotalPayments::default());
    }

    #[test]
    fn test_default_satellite_is_unselected() {
        assert!(!Satellite::default().is_selected());
    }

    #[test]
    fn test_satellite_from_json() {
        let json = serde_json::json!({
            "id": "118UWpMCHzs6CvSgWd9BfFVjw5K9pZbJjkfZJexMtSkmKxvvAW",
            "storage_daily": [{ "at_rest_total": 1024.5, "interval_start": "2020-03-01T00:00:00Z" }],
            "bandwidth_daily": [{ "egress": 10, "ingress": 20, "interval_start": "2020-03-01T00:00:00Z" }],
            "storage_summary": 111.0,
            "bandwidth_summary": 222.0,
            "egress_summary": 50.0,
            "ingress_summary": 70.0,
            "audits": {
                "satellite_name": "us1",
                "audit_score": 1.0,
                "suspension_score": 1.0,
                "online_score": 0.98
            },
            "joined_at": "2018-01-30T00:00:00Z"
        });

        let satellite: Satellite = serde_json::from_value(json).unwrap();

        assert!(satellite.is_selected());
        assert_eq!(satellite.storage_daily.len(), 1);
        assert_eq!(satellite.bandwidth_daily[0].total(), 30);
        assert!(satellite.egress_daily.is_empty());
        assert_eq!(satellite.audits.satellite_name, "us1");
        assert_eq!(satellite.joined_at, Utc.with_ymd_and_hms(2018, 1, 30, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_paystub_from_json_without_optional_fields() {
        let paystub: Paystub = serde_json::from_str(r#"{"held": 1, "disposed": 2, "paid": 3}"#).unwrap();
        assert_eq!(paystub.held, 1);
        assert!(paystub.period.is_empty());
    }
}
