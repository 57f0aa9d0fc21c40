//! Median-of-degrees computation and output formatting

use crate::paygraph::error::{StreamError, StreamResult};

/// Median of a degree sequence.
///
/// Sorts ascending; odd-length sequences take the middle value, even-length
/// sequences average the two middle values.
///
/// # Errors
///
/// [`StreamError::EmptyGraphMedian`] for an empty sequence. The stream
/// processor never produces one (every valid event leaves at least one edge
/// in the graph), but the boundary is defined rather than left to panic.
pub fn median_degree(mut degrees: Vec<usize>) -> StreamResult<f64> {
    if degrees.is_empty() {
        return Err(StreamError::EmptyGraphMedian);
    }

    degrees.sort_unstable();
    let lower = (degrees.len() - 1) / 2;

    let median = if degrees.len() % 2 == 1 {
        degrees[lower] as f64
    } else {
        (degrees[lower] + degrees[lower + 1]) as f64 / 2.0
    };
    Ok(median)
}

/// Format a median with exactly two digits after the decimal point.
pub fn format_median(median: f64) -> String {
    format!("{:.2}", median)
}
