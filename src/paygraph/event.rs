//! Payment record parsing
//!
//! Turns one raw JSON line of the transaction feed into a validated
//! [`PaymentEvent`]. A record carries exactly three fields of interest:
//!
//! ```json
//! {"created_time": "2014-03-27T04:28:20Z", "target": "Jamie-Korn", "actor": "Jordan-Gruber"}
//! ```
//!
//! Records that fail to parse, or that are missing any field, surface as a
//! [`StreamError`] instead of a partially constructed event.

use crate::paygraph::error::{StreamError, StreamResult};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw shape of one feed line. Every field is optional so that incomplete
/// records deserialize cleanly and get rejected by validation, not by serde.
#[derive(Debug, Deserialize)]
struct RawPaymentRecord {
    actor: Option<String>,
    target: Option<String>,
    created_time: Option<String>,
}

/// One validated payment between two participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentEvent {
    /// Participant who initiated the payment
    pub actor: String,
    /// Participant who received the payment
    pub target: String,
    /// Event creation time from the feed
    pub created_time: DateTime<Utc>,
}

impl PaymentEvent {
    /// Construct an event directly from already-validated parts.
    pub fn new(
        actor: impl Into<String>,
        target: impl Into<String>,
        created_time: DateTime<Utc>,
    ) -> Self {
        PaymentEvent {
            actor: actor.into(),
            target: target.into(),
            created_time,
        }
    }

    /// Parse one JSON feed line into a validated event.
    ///
    /// # Errors
    ///
    /// * [`StreamError::MalformedRecord`] - line is not a JSON object
    /// * [`StreamError::MissingField`] - actor, target, or created_time is
    ///   absent or empty
    /// * [`StreamError::InvalidTimestamp`] - created_time is not a parseable
    ///   timestamp
    pub fn from_json(line: &str) -> StreamResult<Self> {
        let raw: RawPaymentRecord =
            serde_json::from_str(line).map_err(|e| StreamError::MalformedRecord {
                reason: e.to_string(),
            })?;

        let actor = require_field(raw.actor, "actor")?;
        let target = require_field(raw.target, "target")?;
        let created_time = parse_created_time(&require_field(raw.created_time, "created_time")?)?;

        Ok(PaymentEvent {
            actor,
            target,
            created_time,
        })
    }
}

fn require_field(value: Option<String>, field: &'static str) -> StreamResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(StreamError::MissingField { field }),
    }
}

/// Parse the feed's `%Y-%m-%dT%H:%M:%SZ` timestamps. RFC 3339 is a superset
/// of that format, so chrono's RFC 3339 parser handles it directly.
fn parse_created_time(value: &str) -> StreamResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StreamError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
