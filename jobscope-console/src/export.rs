//! History export
//!
//! Serializes a (filtered) history into a flat delimited text report.
//! Producing the text never fails; only delivery through a
//! [`jobscope_core::ports::FileSink`] can.

use jobscope_core::domain::log::LogEntry;
use jobscope_core::ports::FileSink;

use crate::classify::classify;

/// Column delimiter for exported reports. Multi-character on purpose, so an
/// accidental occurrence in free log text is vanishingly unlikely; any that
/// do occur are squashed to a space to keep columns aligned.
pub const EXPORT_DELIMITER: &str = "⚡⚡⚡";

/// Renders entries as a delimited report: a header line, then one line per
/// entry with the UTC timestamp, the classified outcome and the message.
pub fn export_history(entries: &[LogEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "ExecutedUtc{d}Status{d}Message\n",
        d = EXPORT_DELIMITER
    ));

    for entry in entries {
        let status = if classify(entry).is_success() {
            "Success"
        } else {
            "Failed"
        };
        let message = entry.message.replace(EXPORT_DELIMITER, " ");
        out.push_str(&format!(
            "{ts}{d}{status}{d}{message}\n",
            ts = entry.finished_at.format("%Y-%m-%d %H:%M:%S"),
            d = EXPORT_DELIMITER,
        ));
    }

    out
}

/// Renders entries and hands the report to the sink under `file_name`.
pub fn export_to_sink(sink: &dyn FileSink, file_name: &str, entries: &[LogEntry]) -> anyhow::Result<()> {
    let report = export_history(entries);
    sink.deliver(file_name, &report)
}
