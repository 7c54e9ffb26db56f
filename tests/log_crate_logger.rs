//! Diagnostics routed through the `log` facade.
//!
//! `logtest` installs a process-wide logger that can only be started once,
//! so this binary holds a single test that walks through each scenario in
//! turn, draining the queue between them.

use std::sync::Arc;

use envelope_transport::{
    DiagnosticLevel, DiagnosticLogger, Envelope, EventId, HttpTransportBuilder, LOG_TARGET,
    LogCrateLogger, RecordingSender,
};
use logtest::{Logger, Record};
use serde_json::json;

fn drain(logger: &mut Logger) -> Vec<Record> {
    std::iter::from_fn(|| logger.pop())
        .filter(|record| record.target() == LOG_TARGET)
        .collect()
}

fn renders_template_with_arguments(logs: &mut Logger) {
    let logger = LogCrateLogger::new(DiagnosticLevel::Info);

    logger.log(
        DiagnosticLevel::Warning,
        "Dropped {count} envelopes for {project}",
        None,
        &[&3, &"checkout"],
    );

    let records = drain(logs);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level(), log::Level::Warn);
    assert_eq!(records[0].args(), "Dropped 3 envelopes for checkout");
}

fn appends_error_to_message(logs: &mut Logger) {
    let logger = LogCrateLogger::new(DiagnosticLevel::Debug);
    let error = std::io::Error::other("socket closed");

    logger.log(DiagnosticLevel::Error, "Send failed", Some(&error), &[]);

    let records = drain(logs);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].args(), "Send failed: socket closed");
}

fn drops_entries_below_min_level(logs: &mut Logger) {
    let logger = LogCrateLogger::new(DiagnosticLevel::Warning);
    for (level, expected) in [
        (DiagnosticLevel::Debug, false),
        (DiagnosticLevel::Info, false),
        (DiagnosticLevel::Warning, true),
        (DiagnosticLevel::Error, true),
    ] {
        assert_eq!(logger.is_enabled(level), expected, "{level}");
        logger.log(level, "level check", None, &[]);
        assert_eq!(drain(logs).len(), usize::from(expected), "{level}");
    }
}

async fn debug_transport_logs_rejections(logs: &mut Logger) {
    let event_id = EventId::new();
    let transport = HttpTransportBuilder::new()
        .with_dsn("https://public@ingest.example.com/42")
        .with_debug(true)
        .with_sender(Arc::new(RecordingSender::responding_with_body(
            400,
            "bad envelope",
        )))
        .build()
        .expect("build transport");

    transport
        .send_envelope(&Envelope::from_event(event_id, json!({})), None)
        .await
        .expect("rejection is not an error");

    let records = drain(logs);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level(), log::Level::Error);
    assert_eq!(
        records[0].args(),
        format!(
            "Sentry rejected the envelope {event_id}. Status code: 400. Sentry response: bad envelope"
        )
    );
}

async fn transport_without_debug_stays_silent(logs: &mut Logger) {
    let transport = HttpTransportBuilder::new()
        .with_dsn("https://public@ingest.example.com/42")
        .with_sender(Arc::new(RecordingSender::responding(500)))
        .build()
        .expect("build transport");

    transport
        .send_envelope(&Envelope::from_event(EventId::new(), json!({})), None)
        .await
        .expect("rejection is not an error");

    assert!(drain(logs).is_empty());
}

#[tokio::test]
async fn diagnostics_reach_the_log_facade() {
    let mut logs = Logger::start();
    drain(&mut logs);

    renders_template_with_arguments(&mut logs);
    appends_error_to_message(&mut logs);
    drops_entries_below_min_level(&mut logs);
    debug_transport_logs_rejections(&mut logs).await;
    transport_without_debug_stays_silent(&mut logs).await;
}
