use crate::domain::model::{Warning, WarningSeverity};

/// Substrings that mark an untagged warning as an alert.
const ALERT_MARKERS: [&str; 2] = ["⚠️", "경고"];

/// Severity of a warning. An explicit tag from the service wins; bare
/// strings fall back to the marker check.
pub fn classify(warning: &Warning) -> WarningSeverity {
    match warning {
        Warning::Tagged {
            severity: Some(severity @ (WarningSeverity::Alert | WarningSeverity::Info)),
            ..
        } => *severity,
        other => classify_text(other.message()),
    }
}

pub fn classify_text(message: &str) -> WarningSeverity {
    if ALERT_MARKERS.iter().any(|marker| message.contains(marker)) {
        WarningSeverity::Alert
    } else {
        WarningSeverity::Info
    }
}
