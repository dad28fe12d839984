//! Log sanitization for personal and health data.
//!
//! Every formatted log line passes through [`SanitizingMakeWriter`], which
//! redacts:
//! - Email addresses and phone numbers (contact form)
//! - SSN- and MRN-like identifiers pasted into free text
//! - Raw health values written as `field=value` or `field: value`
//!
//! The primary protection is still to keep raw inputs out of logging calls;
//! this is a backstop for the free-text contact message and for mistakes.
//!
//! Input is capped at a configurable number of bytes (see
//! `HEARTCHECK_SANITIZE_MAX_BYTES`) so huge lines stay cheap to scan.

use regex::{Regex, RegexSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::DEFAULT_SANITIZE_MAX_BYTES;

/// Email addresses with bounded labels.
const EMAIL_PATTERN: &str = r"(?i)\b[a-z0-9](?:[a-z0-9._%+-]{0,62}[a-z0-9])?@(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,}\b";

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

static EMAIL: OnceLock<Regex> = OnceLock::new();

static MAX_BYTES: AtomicUsize = AtomicUsize::new(DEFAULT_SANITIZE_MAX_BYTES);

struct Pattern {
    regex: Regex,
    replacement: &'static str,
}

struct Patterns {
    set: RegexSet,
    patterns: Vec<Pattern>,
}

/// Set the per-call input cap. Zero is ignored.
pub fn set_max_bytes(max_bytes: usize) {
    if max_bytes > 0 {
        MAX_BYTES.store(max_bytes, Ordering::Relaxed);
    }
}

fn max_bytes() -> usize {
    MAX_BYTES.load(Ordering::Relaxed)
}

fn truncate_to_char_boundary(input: &str, max_bytes: usize) -> (&str, bool) {
    if input.len() <= max_bytes {
        return (input, false);
    }

    let mut end = max_bytes;
    while end > 0 && !input.is_char_boundary(end) {
        end -= 1;
    }
    (&input[..end], true)
}

/// The email regex used for redaction.
///
/// Forms accept only addresses this matches in full, so every accepted
/// address is redacted when logged.
pub fn email_regex() -> &'static Regex {
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Valid email regex"))
}

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| {
        let rules: Vec<(&'static str, &'static str)> = vec![
            // Email first, so digit runs in the local part are not split up
            (EMAIL_PATTERN, "[REDACTED-EMAIL]"),
            // Health values keyed by form or wire name
            (
                r"(?i)\b(age|resting[_ ]?bp|resting[_ ]?blood[_ ]?pressure|fasting[_ ]?bp|fasting[_ ]?blood[_ ]?pressure|cholesterol|max[_ ]?heart[_ ]?rate|max[_ ]?hr)\b\s*[:=]\s*-?\d+",
                "$1=[REDACTED]",
            ),
            // SSN-like (xxx-xx-xxxx)
            (r"\b\d{3}-\d{2}-\d{4}\b", "[REDACTED-SSN]"),
            // MRN-like
            (r"\bMRN[:\s]?\d{6,10}\b", "[REDACTED-MRN]"),
            // Phone
            (
                r"\b(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b",
                "[REDACTED-PHONE]",
            ),
        ];

        let set = RegexSet::new(rules.iter().map(|(p, _)| *p)).expect("Valid regex set");
        let patterns = rules
            .into_iter()
            .map(|(pattern, replacement)| Pattern {
                regex: Regex::new(pattern).expect("Valid regex"),
                replacement,
            })
            .collect();

        Patterns { set, patterns }
    })
}

/// Redact personal and health data from `input`.
#[must_use]
pub fn sanitize(input: &str) -> String {
    sanitize_with_limit(input, max_bytes())
}

fn sanitize_with_limit(input: &str, max_bytes: usize) -> String {
    let patterns = patterns();
    let (prefix, truncated) = truncate_to_char_boundary(input, max_bytes);

    let mut result = prefix.to_string();
    for idx in patterns.set.matches(prefix).into_iter() {
        let pattern = &patterns.patterns[idx];
        result = pattern
            .regex
            .replace_all(&result, pattern.replacement)
            .into_owned();
    }

    if truncated {
        result.push_str(" [TRUNCATED]");
        if input.ends_with('\n') {
            result.push('\n');
        }
    }
    result
}

/// A `tracing_subscriber` writer wrapper that sanitizes each formatted line
/// before it reaches the underlying sink.
#[derive(Debug)]
pub struct SanitizingMakeWriter<M> {
    inner: M,
}

impl<M> SanitizingMakeWriter<M> {
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: Clone> Clone for SanitizingMakeWriter<M> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

pub struct SanitizingWriter<W: std::io::Write> {
    inner: W,
    buffer: Vec<u8>,
    max_bytes: usize,
}

impl<W: std::io::Write> SanitizingWriter<W> {
    fn new(inner: W) -> Self {
        Self::with_limit(inner, max_bytes())
    }

    fn with_limit(inner: W, max_bytes: usize) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            max_bytes,
        }
    }

    fn write_sanitized(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        let sanitized = sanitize_with_limit(&String::from_utf8_lossy(bytes), self.max_bytes);
        self.inner.write_all(sanitized.as_bytes())
    }

    fn flush_lines(&mut self) -> std::io::Result<()> {
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            self.write_sanitized(&line)?;
        }
        Ok(())
    }
}

impl<W: std::io::Write> std::io::Write for SanitizingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        self.flush_lines()?;

        // A huge line with no newline must not buffer forever.
        if self.buffer.len() > self.max_bytes.saturating_mul(2) {
            let partial = std::mem::take(&mut self.buffer);
            self.write_sanitized(&partial)?;
            self.inner.write_all(b"\n")?;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_lines()?;

        if !self.buffer.is_empty() {
            let partial = std::mem::take(&mut self.buffer);
            self.write_sanitized(&partial)?;
        }

        self.inner.flush()
    }
}

impl<W: std::io::Write> Drop for SanitizingWriter<W> {
    fn drop(&mut self) {
        // fmt layers write whole events; push out a trailing partial line.
        let _ = std::io::Write::flush(self);
    }
}

impl<'a, M> MakeWriter<'a> for SanitizingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = SanitizingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        SanitizingWriter::new(self.inner.make_writer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sanitize_email() {
        let sanitized = sanitize("Contact message from jane.doe@example.org received");
        assert!(sanitized.contains("[REDACTED-EMAIL]"));
        assert!(!sanitized.contains("jane.doe"));
    }

    #[test]
    fn test_sanitize_phone() {
        let sanitized = sanitize("call me at 555-123-4567");
        assert!(sanitized.contains("[REDACTED-PHONE]"));
    }

    #[test]
    fn test_sanitize_ssn_and_mrn() {
        let sanitized = sanitize("SSN: 123-45-6789 and MRN:12345678");
        assert!(sanitized.contains("[REDACTED-SSN]"));
        assert!(sanitized.contains("[REDACTED-MRN]"));
        assert!(!sanitized.contains("6789"));
    }

    #[test]
    fn test_sanitize_health_values() {
        let sanitized = sanitize("profile age=52 cholesterol: 230 restingBloodPressure=141");
        assert!(sanitized.contains("age=[REDACTED]"));
        assert!(sanitized.contains("cholesterol=[REDACTED]"));
        assert!(sanitized.contains("restingBloodPressure=[REDACTED]"));
        assert!(!sanitized.contains("230"));
    }

    #[test]
    fn test_assessment_summary_untouched() {
        let line = "Assessment complete: score=14, risk=MODERATE, recommendations=3";
        assert_eq!(sanitize(line), line);
    }

    #[test]
    fn test_truncates_large_inputs() {
        let sanitized = sanitize_with_limit("héllo world, a long line", 2);
        assert!(sanitized.starts_with('h'));
        assert!(sanitized.ends_with("[TRUNCATED]"));

        let line = sanitize_with_limit("first event line that is long\n", 16);
        assert_eq!(line, "first event line [TRUNCATED]\n");
    }

    #[test]
    fn test_writer_keeps_lines_after_a_truncated_one() {
        let mut sink = Vec::new();
        {
            let mut writer = SanitizingWriter::with_limit(&mut sink, 16);
            writer
                .write_all(b"first event line that is long\nsecond event\n")
                .expect("write");
        }
        let out = String::from_utf8(sink).expect("utf8");
        assert_eq!(out, "first event line [TRUNCATED]\nsecond event\n");
    }

    #[test]
    fn test_writer_breaks_up_unterminated_runs() {
        let mut sink = Vec::new();
        {
            let mut writer = SanitizingWriter::with_limit(&mut sink, 4);
            writer.write_all(b"abcdefghij").expect("write");
            writer.write_all(b"done\n").expect("write");
        }
        let out = String::from_utf8(sink).expect("utf8");
        assert_eq!(out, "abcd [TRUNCATED]\ndone\n");
    }

    #[test]
    fn test_email_first_keeps_digit_local_parts_whole() {
        assert_eq!(
            sanitize("from=5551234567@clinic.org"),
            "from=[REDACTED-EMAIL]"
        );
    }

    #[test]
    fn test_writer_sanitizes_lines() {
        let mut sink = Vec::new();
        {
            let mut writer = SanitizingWriter::new(&mut sink);
            writer
                .write_all(b"from a@b.io\npartial age=70")
                .expect("write");
        }
        let out = String::from_utf8(sink).expect("utf8");
        assert_eq!(out, "from [REDACTED-EMAIL]\npartial age=[REDACTED]");
    }
}
