//! Parse failures are reported at debug level from both entry points.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io;
use std::sync::{Arc, Mutex};

use llace_parse::{parse_expression, parse_items, ParseError};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn logged<T>(parse: impl FnOnce() -> Result<T, ParseError>) -> (Result<T, ParseError>, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, parse);
    (result, logs.text())
}

#[test]
fn failed_expression_is_logged_with_its_code() {
    let (result, logs) = logged(|| parse_expression("x y", "logged.llace"));
    let error = result.unwrap_err();
    assert!(logs.contains("parse failed"), "{logs}");
    assert!(logs.contains("logged.llace"), "{logs}");
    assert!(logs.contains(&error.code.to_string()), "{logs}");
}

#[test]
fn failed_items_are_logged_with_their_code() {
    let (result, logs) = logged(|| parse_items("a: (1", "items.llace"));
    let error = result.unwrap_err();
    assert!(logs.contains("parse failed"), "{logs}");
    assert!(logs.contains(&error.code.to_string()), "{logs}");
}

#[test]
fn successful_parse_logs_no_failure() {
    let (result, logs) = logged(|| parse_expression("x + 1", "clean.llace"));
    assert!(result.is_ok());
    assert!(!logs.contains("parse failed"), "{logs}");
}

#[test]
fn lexical_errors_are_logged_by_the_scanner() {
    let (result, logs) = logged(|| parse_expression("x + %", "lexical.llace"));
    assert!(result.is_err());
    assert!(logs.contains("lexical error"), "{logs}");
    assert!(logs.contains("UnrecognizedChar"), "{logs}");
}
