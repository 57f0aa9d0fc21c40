//! Active edge window
//!
//! Arrival-ordered log of the edges currently believed active. This log, not
//! the graph, is the authoritative record for eviction: every ingested edge
//! is appended here with its event time, and expiry scans compare each entry
//! against the current window floor.
//!
//! Entries arrive in input order, which is not timestamp order, so an expiry
//! scan walks the whole log rather than popping from the front. The window
//! floor only ever moves forward, so each entry is removed at most once.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// One edge instance with the event time that decides its expiry.
#[derive(Debug, Clone)]
struct LiveEdge {
    actor: String,
    target: String,
    timestamp: DateTime<Utc>,
}

/// Arrival-ordered log of active edges.
#[derive(Debug, Clone, Default)]
pub struct ActiveWindow {
    edges: VecDeque<LiveEdge>,
}

impl ActiveWindow {
    pub fn new() -> Self {
        ActiveWindow {
            edges: VecDeque::new(),
        }
    }

    /// Append one edge in arrival order.
    pub fn push(&mut self, actor: &str, target: &str, timestamp: DateTime<Utc>) {
        self.edges.push_back(LiveEdge {
            actor: actor.to_string(),
            target: target.to_string(),
            timestamp,
        });
    }

    /// Remove every entry whose timestamp is strictly below `floor` and
    /// return their endpoint pairs, one pair per expired entry. Repeated
    /// pairs come back once per instance so the graph can take multiplicity
    /// down one step at a time.
    pub fn drain_expired(&mut self, floor: DateTime<Utc>) -> Vec<(String, String)> {
        let mut expired = Vec::new();
        self.edges.retain(|edge| {
            if edge.timestamp < floor {
                expired.push((edge.actor.clone(), edge.target.clone()));
                false
            } else {
                true
            }
        });
        expired
    }

    /// Number of currently active edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
