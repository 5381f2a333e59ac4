// Certificate Classifier - Expiry status relative to the warning window

use super::reader::ParsedCertificate;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expiry status of a certificate
///
/// Already expired certificates are reported as `Warning`; there is no
/// separate expired state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CertStatus {
    Okay,
    Warning,
}

impl fmt::Display for CertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertStatus::Okay => write!(f, "OKAY"),
            CertStatus::Warning => write!(f, "WARNING"),
        }
    }
}

/// Classify a certificate expiring at `not_after`.
///
/// `Warning` when `now` is strictly after `not_after - warning`. The exact
/// threshold instant is still `Okay`.
pub fn classify(not_after: DateTime<Utc>, now: DateTime<Utc>, warning: TimeDelta) -> CertStatus {
    match not_after.checked_sub_signed(warning) {
        Some(threshold) if now <= threshold => CertStatus::Okay,
        Some(_) => CertStatus::Warning,
        // threshold is before the earliest representable instant
        None => CertStatus::Warning,
    }
}

/// Expiry report for one certificate file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// Domain names covered by the certificate
    pub subjects: Vec<String>,

    /// Expiry time, RFC 3339 on the wire
    #[serde(rename = "expiry")]
    pub not_after: DateTime<Utc>,

    pub status: CertStatus,
}

impl CertificateRecord {
    /// Build the record for a parsed certificate as of `now`
    pub fn classify(cert: ParsedCertificate, now: DateTime<Utc>, warning: TimeDelta) -> Self {
        let status = classify(cert.not_after, now, warning);
        Self {
            subjects: cert.subjects,
            not_after: cert.not_after,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn week() -> TimeDelta {
        TimeDelta::days(7)
    }

    #[test]
    fn test_far_expiry_is_okay() {
        let now = Utc::now();
        let not_after = now + TimeDelta::days(30);
        assert_eq!(classify(not_after, now, week()), CertStatus::Okay);
    }

    #[test]
    fn test_inside_window_is_warning() {
        let now = Utc::now();
        let not_after = now + TimeDelta::days(2);
        assert_eq!(classify(not_after, now, week()), CertStatus::Warning);
    }

    #[test]
    fn test_expired_is_warning() {
        let now = Utc::now();
        let not_after = now - TimeDelta::days(90);
        assert_eq!(classify(not_after, now, week()), CertStatus::Warning);
    }

    #[test]
    fn test_threshold_boundary_is_strict() {
        let not_after = Utc.with_ymd_and_hms(2030, 1, 8, 12, 0, 0).unwrap();
        let threshold = not_after - week();

        assert_eq!(classify(not_after, threshold, week()), CertStatus::Okay);
        assert_eq!(
            classify(not_after, threshold + TimeDelta::nanoseconds(1), week()),
            CertStatus::Warning
        );
        assert_eq!(
            classify(not_after, threshold - TimeDelta::nanoseconds(1), week()),
            CertStatus::Okay
        );
    }

    #[test]
    fn test_zero_window() {
        let not_after = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(classify(not_after, not_after, TimeDelta::zero()), CertStatus::Okay);
        assert_eq!(
            classify(not_after, not_after + TimeDelta::seconds(1), TimeDelta::zero()),
            CertStatus::Warning
        );
    }

    #[test]
    fn test_threshold_underflow_is_warning() {
        let not_after = DateTime::<Utc>::MIN_UTC + TimeDelta::days(1);
        assert_eq!(
            classify(not_after, Utc::now(), TimeDelta::days(365)),
            CertStatus::Warning
        );
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&CertStatus::Okay).unwrap(), "\"OKAY\"");
        assert_eq!(serde_json::to_string(&CertStatus::Warning).unwrap(), "\"WARNING\"");
        assert_eq!(CertStatus::Warning.to_string(), "WARNING");
    }

    #[test]
    fn test_record_json_shape() {
        let cert = ParsedCertificate {
            subjects: vec!["example.com".to_string()],
            not_after: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
        };
        let now = Utc.with_ymd_and_hms(2029, 1, 1, 0, 0, 0).unwrap();

        let record = CertificateRecord::classify(cert, now, week());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["subjects"][0], "example.com");
        assert_eq!(json["expiry"], "2030-01-01T00:00:00Z");
        assert_eq!(json["status"], "OKAY");
    }

    #[test]
    fn test_record_without_subjects_has_empty_array() {
        let cert = ParsedCertificate {
            subjects: vec![],
            not_after: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        };

        let record = CertificateRecord::classify(cert, Utc::now(), week());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["subjects"], serde_json::json!([]));
        assert_eq!(json["status"], "WARNING");
    }
}
