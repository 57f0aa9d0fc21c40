//! Rolling-median-degree engine
//!
//! Module layout:
//! - `event` - raw JSON record parsing into validated payment events
//! - `graph` - windowed undirected multigraph with multiset adjacency
//! - `window` - arrival-ordered log of active edges, source of evictions
//! - `median` - median-of-degrees and two-decimal formatting
//! - `processor` - per-event window advance / insert / evict / emit cycle
//! - `pipeline` - line-stream driver connecting a reader to a writer
//! - `error` - stream error taxonomy and result alias

pub mod error;
pub mod event;
pub mod graph;
pub mod median;
pub mod pipeline;
pub mod processor;
pub mod window;

pub use error::{StreamError, StreamResult};
pub use event::PaymentEvent;
pub use graph::WindowedGraph;
pub use median::{format_median, median_degree};
pub use pipeline::{process_stream, StreamSummary};
pub use processor::{StreamProcessor, DEFAULT_WINDOW_SECS};
pub use window::ActiveWindow;
