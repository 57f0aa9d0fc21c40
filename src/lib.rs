//! # paygraph
//!
//! A streaming engine that maintains an undirected multigraph of payment
//! participants over a trailing 60-second window and emits the median degree
//! after every valid event.
//!
//! ## Features
//!
//! - **Time-Windowed Graph**: edges live exactly as long as their timestamp
//!   stays within 59 seconds of the newest timestamp seen
//! - **Multiplicity-Aware Degrees**: degree counts transactions, not distinct
//!   neighbors; repeated pairs and self-loops are preserved faithfully
//! - **Out-of-Order Tolerant**: late events older than the window floor leave
//!   the graph untouched but still emit the current median
//! - **Line-Stream Pipeline**: JSON-lines in, one two-decimal median out per
//!   valid record, in arrival order
//!
//! ## Quick Start
//!
//! ```rust
//! use paygraph::{PaymentEvent, StreamProcessor};
//!
//! let mut processor = StreamProcessor::new();
//! let event = PaymentEvent::from_json(
//!     r#"{"created_time": "2014-03-27T04:28:20Z", "target": "Jamie-Korn", "actor": "Jordan-Gruber"}"#,
//! )?;
//!
//! let median = processor.ingest(&event)?;
//! assert_eq!(median, "1.00");
//! # Ok::<(), paygraph::StreamError>(())
//! ```

pub mod paygraph;

// Re-export the main API at the crate root for easy access
pub use paygraph::{
    format_median, median_degree, process_stream, ActiveWindow, PaymentEvent, StreamError,
    StreamProcessor, StreamResult, StreamSummary, WindowedGraph, DEFAULT_WINDOW_SECS,
};
