//! Line-oriented stream pipeline
//!
//! Drives a [`StreamProcessor`] from any buffered line source and writes one
//! median per valid record to any sink. The CLI binary wires this to files;
//! tests wire it to in-memory buffers.

use crate::paygraph::error::StreamResult;
use crate::paygraph::event::PaymentEvent;
use crate::paygraph::processor::StreamProcessor;
use log::debug;
use std::io::{BufRead, Write};

/// Counters for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Valid records ingested (one output line each)
    pub processed: usize,
    /// Records skipped at the parse boundary
    pub skipped: usize,
}

/// Stream every line of `reader` through a fresh processor, writing one
/// newline-terminated median per valid record to `writer` in arrival order.
///
/// Malformed records are logged and skipped; they produce no output line and
/// never abort the run. Blank lines are ignored.
pub fn process_stream<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
) -> StreamResult<StreamSummary> {
    let mut processor = StreamProcessor::new();
    let mut summary = StreamSummary::default();

    for line in reader.lines() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        match PaymentEvent::from_json(record) {
            Ok(event) => {
                let median = processor.ingest(&event)?;
                writeln!(writer, "{}", median)?;
                summary.processed += 1;
            }
            Err(err) => {
                debug!("skipping record: {}", err);
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Vec<String>, StreamSummary) {
        let mut output = Vec::new();
        let summary = process_stream(Cursor::new(input), &mut output).unwrap();
        let lines = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        (lines, summary)
    }

    #[test]
    fn test_one_output_line_per_valid_record() {
        let input = concat!(
            r#"{"created_time": "2014-03-27T04:28:20Z", "target": "B", "actor": "A"}"#,
            "\n",
            r#"{"created_time": "2014-03-27T04:28:20Z", "target": "C", "actor": "A"}"#,
            "\n",
        );
        let (lines, summary) = run(input);

        assert_eq!(lines, vec!["1.00", "1.00"]);
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_malformed_record_between_valid_ones() {
        let input = concat!(
            r#"{"created_time": "2014-03-27T04:28:20Z", "target": "B", "actor": "A"}"#,
            "\n",
            "{ this is not json }\n",
            r#"{"created_time": "2014-03-27T04:28:21Z", "target": "C", "actor": "B"}"#,
            "\n",
        );
        let (lines, summary) = run(input);

        // two output lines, not three
        assert_eq!(lines.len(), 2);
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let input = concat!(
            "\n",
            r#"{"created_time": "2014-03-27T04:28:20Z", "target": "B", "actor": "A"}"#,
            "\n\n",
        );
        let (lines, summary) = run(input);

        assert_eq!(lines, vec!["1.00"]);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_empty_input_produces_no_output() {
        let (lines, summary) = run("");
        assert!(lines.is_empty());
        assert_eq!(summary, StreamSummary::default());
    }
}
