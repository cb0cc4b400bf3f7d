//! Structured JSON logger
//!
//! - One log line = one event
//! - `event` first, then `severity`, then fields sorted by key
//! - Synchronous, no buffering
//! - ERROR and FATAL go to stderr, everything else to stdout

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Client-caused failures, recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
    /// Unrecoverable, process exits
    Fatal = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    fn uses_stderr(&self) -> bool {
        *self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that outputs JSON lines
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if severity.uses_stderr() {
            Self::log_to_writer(severity, event, fields, &mut io::stderr());
        } else {
            Self::log_to_writer(severity, event, fields, &mut io::stdout());
        }
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let line = Self::format_line(severity, event, fields);

        // Single write per line
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut output = String::with_capacity(256);

        output.push_str("{\"event\":\"");
        Self::escape_json_string(&mut output, event);
        output.push_str("\",\"severity\":\"");
        output.push_str(severity.as_str());
        output.push('"');

        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted_fields {
            output.push_str(",\"");
            Self::escape_json_string(&mut output, key);
            output.push_str("\":\"");
            Self::escape_json_string(&mut output, value);
            output.push('"');
        }

        output.push_str("}\n");
        output
    }

    fn escape_json_string(output: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => output.push_str("\\\""),
                '\\' => output.push_str("\\\\"),
                '\n' => output.push_str("\\n"),
                '\r' => output.push_str("\\r"),
                '\t' => output.push_str("\\t"),
                c if c.is_control() => {
                    output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => output.push(c),
            }
        }
    }
}

#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_stream_selection() {
        assert!(!Severity::Warn.uses_stderr());
        assert!(Severity::Error.uses_stderr());
        assert!(Severity::Fatal.uses_stderr());
    }

    #[test]
    fn test_log_json_format() {
        let output = capture_log(Severity::Info, "SCHEMA_CREATED", &[("object_id", "p1")]);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "SCHEMA_CREATED");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["object_id"], "p1");
    }

    #[test]
    fn test_log_deterministic_ordering() {
        let output1 = capture_log(
            Severity::Warn,
            "TEST",
            &[("zebra", "1"), ("apple", "2"), ("mango", "3")],
        );
        let output2 = capture_log(
            Severity::Warn,
            "TEST",
            &[("apple", "2"), ("mango", "3"), ("zebra", "1")],
        );
        assert_eq!(output1, output2);

        let apple_pos = output1.find("apple").unwrap();
        let zebra_pos = output1.find("zebra").unwrap();
        assert!(apple_pos < zebra_pos);
        assert!(output1.find("\"event\"").unwrap() < output1.find("\"severity\"").unwrap());
    }

    #[test]
    fn test_log_escapes_special_chars() {
        let output = capture_log(
            Severity::Info,
            "TEST",
            &[("message", "Invalid schema. 'copay' \"quoted\"\nline2\u{1}")],
        );

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["message"], "Invalid schema. 'copay' \"quoted\"\nline2\u{1}");
        assert_eq!(output.chars().filter(|c| *c == '\n').count(), 1);
    }
}
