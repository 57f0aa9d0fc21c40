//! Stream processor
//!
//! Consumes one validated payment event at a time and keeps the trailing
//! window and the graph in lockstep:
//!
//! 1. advance the maximum timestamp (never backward),
//! 2. recompute the window floor,
//! 3. insert the event's edge if it lands inside the window, then evict
//!    everything the new floor pushed out,
//! 4. emit the median degree of the resulting graph.
//!
//! An out-of-order event older than the floor mutates nothing but still
//! emits, so output lines stay one-to-one with valid input events.

use crate::paygraph::error::StreamResult;
use crate::paygraph::event::PaymentEvent;
use crate::paygraph::graph::WindowedGraph;
use crate::paygraph::median::{format_median, median_degree};
use crate::paygraph::window::ActiveWindow;
use chrono::{DateTime, Duration, Utc};
use log::trace;

/// Default trailing window length in seconds.
pub const DEFAULT_WINDOW_SECS: i64 = 60;

/// Windowed rolling-median-degree engine over one event stream.
///
/// Strictly sequential: each event is fully processed before the next. A
/// deployment with several independent streams runs one processor per
/// stream; nothing here is shared.
#[derive(Debug)]
pub struct StreamProcessor {
    window_secs: i64,
    max_timestamp: Option<DateTime<Utc>>,
    window: ActiveWindow,
    graph: WindowedGraph,
}

impl Default for StreamProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamProcessor {
    /// Processor with the standard 60-second trailing window.
    pub fn new() -> Self {
        Self::with_window_secs(DEFAULT_WINDOW_SECS)
    }

    /// Processor with a custom window length in seconds.
    pub fn with_window_secs(window_secs: i64) -> Self {
        StreamProcessor {
            window_secs,
            max_timestamp: None,
            window: ActiveWindow::new(),
            graph: WindowedGraph::new(),
        }
    }

    /// Ingest one valid event and return the formatted median degree.
    ///
    /// Exactly one output string per call, whether or not the event changed
    /// the graph.
    pub fn ingest(&mut self, event: &PaymentEvent) -> StreamResult<String> {
        let max = self.advance_max_timestamp(event.created_time);
        let floor = max - Duration::seconds(self.window_secs - 1);

        if event.created_time >= floor {
            self.window
                .push(&event.actor, &event.target, event.created_time);
            self.graph.add_node(&event.actor);
            self.graph.add_edge(&event.actor, &event.target);

            let expired = self.window.drain_expired(floor);
            if !expired.is_empty() {
                trace!(
                    "evicting {} edge(s) below window floor {}",
                    expired.len(),
                    floor
                );
                self.graph.remove_edges(&expired);
            }
        } else {
            trace!(
                "out-of-order event at {} below floor {}, graph unchanged",
                event.created_time,
                floor
            );
        }

        let median = median_degree(self.graph.degree_sequence())?;
        Ok(format_median(median))
    }

    /// First valid event sets the maximum unconditionally; afterwards it
    /// only moves strictly forward. Returns the maximum now in effect, which
    /// bounds the closed window `[max - (window - 1s), max]`.
    fn advance_max_timestamp(&mut self, timestamp: DateTime<Utc>) -> DateTime<Utc> {
        let max = match self.max_timestamp {
            Some(max) if timestamp <= max => max,
            _ => timestamp,
        };
        self.max_timestamp = Some(max);
        max
    }

    /// Highest event timestamp seen so far.
    pub fn max_timestamp(&self) -> Option<DateTime<Utc>> {
        self.max_timestamp
    }

    /// Edges currently inside the window.
    pub fn active_edge_count(&self) -> usize {
        self.window.len()
    }

    /// Current windowed graph.
    pub fn graph(&self) -> &WindowedGraph {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(actor: &str, target: &str, secs: i64) -> PaymentEvent {
        PaymentEvent::new(actor, target, Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[test]
    fn test_single_event_median() {
        let mut processor = StreamProcessor::new();
        let median = processor.ingest(&event("A", "B", 1000)).unwrap();

        assert_eq!(median, "1.00");
        assert_eq!(processor.graph().node_count(), 2);
    }

    #[test]
    fn test_three_node_chain_median() {
        let mut processor = StreamProcessor::new();
        processor.ingest(&event("A", "B", 1000)).unwrap();
        let median = processor.ingest(&event("A", "C", 1000)).unwrap();

        // degrees {A:2, B:1, C:1} -> sorted [1, 1, 2] -> median 1
        assert_eq!(median, "1.00");
    }

    #[test]
    fn test_event_exactly_59s_newer_keeps_old_edge() {
        let mut processor = StreamProcessor::new();
        processor.ingest(&event("A", "B", 1000)).unwrap();
        processor.ingest(&event("C", "D", 1059)).unwrap();

        // floor = 1059 - 59 = 1000, so the first edge survives
        assert_eq!(processor.active_edge_count(), 2);
        assert_eq!(processor.graph().node_count(), 4);
    }

    #[test]
    fn test_window_advance_evicts_old_edges() {
        let mut processor = StreamProcessor::new();
        processor.ingest(&event("A", "B", 1000)).unwrap();
        processor.ingest(&event("A", "B", 1030)).unwrap();
        let median = processor.ingest(&event("A", "B", 1090)).unwrap();

        // floor = 1090 - 59 = 1031: the t=1000 and t=1030 edges expire
        assert_eq!(median, "1.00");
        assert_eq!(processor.active_edge_count(), 1);
        assert_eq!(processor.graph().degree_of("A"), Some(1));
        assert_eq!(processor.graph().degree_of("B"), Some(1));
    }

    #[test]
    fn test_out_of_order_event_leaves_graph_unchanged() {
        let mut processor = StreamProcessor::new();
        processor.ingest(&event("A", "B", 1000)).unwrap();
        let before = processor.ingest(&event("C", "D", 1100)).unwrap();

        // t=900 is far below floor 1041: no insertion, no eviction
        let stale = processor.ingest(&event("X", "Y", 900)).unwrap();
        assert_eq!(stale, before);
        assert_eq!(processor.graph().node_count(), 2);
        assert!(processor.graph().degree_of("X").is_none());
    }

    #[test]
    fn test_max_timestamp_is_monotonic() {
        let mut processor = StreamProcessor::new();
        processor.ingest(&event("A", "B", 1000)).unwrap();
        processor.ingest(&event("C", "D", 1050)).unwrap();
        processor.ingest(&event("E", "F", 1020)).unwrap();

        let max = processor.max_timestamp().unwrap();
        assert_eq!(max, Utc.timestamp_opt(1050, 0).unwrap());
    }

    #[test]
    fn test_in_window_but_older_event_still_inserts() {
        let mut processor = StreamProcessor::new();
        processor.ingest(&event("A", "B", 1050)).unwrap();

        // t=1020 is older than max but inside [991, 1050]
        let median = processor.ingest(&event("C", "D", 1020)).unwrap();
        assert_eq!(median, "1.00");
        assert_eq!(processor.graph().node_count(), 4);
    }

    #[test]
    fn test_degree_sum_tracks_active_edges() {
        let mut processor = StreamProcessor::new();
        let events = [
            event("A", "B", 1000),
            event("A", "C", 1010),
            event("B", "C", 1065),
            event("A", "B", 1070),
        ];

        for e in &events {
            processor.ingest(e).unwrap();
            let degree_sum: usize = processor.graph().degree_sequence().iter().sum();
            assert_eq!(degree_sum, 2 * processor.active_edge_count());
        }
    }

    #[test]
    fn test_no_zero_degree_node_survives_eviction() {
        let mut processor = StreamProcessor::new();
        processor.ingest(&event("A", "B", 1000)).unwrap();
        processor.ingest(&event("C", "D", 1090)).unwrap();

        // A and B expired together with their only edge
        assert_eq!(processor.graph().node_count(), 2);
        assert!(processor.graph().degree_of("A").is_none());
        assert!(processor.graph().degree_of("B").is_none());
        assert!(processor
            .graph()
            .degree_sequence()
            .iter()
            .all(|&d| d >= 1));
    }

    #[test]
    fn test_self_loop_event() {
        let mut processor = StreamProcessor::new();
        let median = processor.ingest(&event("A", "A", 1000)).unwrap();

        // one node with two adjacency entries
        assert_eq!(median, "2.00");
        assert_eq!(processor.graph().node_count(), 1);
    }

    #[test]
    fn test_custom_window_length() {
        let mut processor = StreamProcessor::with_window_secs(10);
        processor.ingest(&event("A", "B", 1000)).unwrap();
        processor.ingest(&event("C", "D", 1010)).unwrap();

        // floor = 1010 - 9 = 1001: the first edge is out
        assert_eq!(processor.active_edge_count(), 1);
        assert_eq!(processor.graph().node_count(), 2);
    }
}
