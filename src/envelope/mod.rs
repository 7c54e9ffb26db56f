//! Envelope model and wire serialisation.
//!
//! An [`Envelope`] bundles one or more items (events, transactions,
//! attachments) that are submitted together. On the wire it is a
//! newline-delimited document:
//!
//! ```text
//! {"event_id":"…","sent_at":"…"}
//! {"type":"event","length":41}
//! {"message":"hello","level":"error"}
//! ```
//!
//! The transport only reads envelopes: it asks for the event id and for the
//! serialised bytes, and never keeps a reference past a single send.

mod event_id;
mod item;
mod serialise;

use std::io::{self, Write};

use chrono::{DateTime, Utc};

pub use event_id::EventId;
pub use item::{EnvelopeItem, ItemPayload, ItemType};

/// Content type of a serialised envelope body.
pub const ENVELOPE_CONTENT_TYPE: &str = "application/x-sentry-envelope";

/// Container of items submitted as one unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Envelope {
    event_id: Option<EventId>,
    dsn: Option<String>,
    sent_at: Option<DateTime<Utc>>,
    items: Vec<EnvelopeItem>,
}

impl Envelope {
    /// Create an empty envelope carrying `event_id` in its header.
    pub fn new(event_id: Option<EventId>) -> Self {
        Self {
            event_id,
            ..Self::default()
        }
    }

    /// Wrap a single JSON event, stamping `event_id` into its payload.
    pub fn from_event(event_id: EventId, mut event: serde_json::Value) -> Self {
        if let Some(map) = event.as_object_mut() {
            map.insert(
                "event_id".to_owned(),
                serde_json::Value::String(event_id.to_string()),
            );
        }
        Self::new(Some(event_id)).with_item(EnvelopeItem::event(event))
    }

    /// Append an item.
    pub fn with_item(mut self, item: EnvelopeItem) -> Self {
        self.items.push(item);
        self
    }

    /// Record the DSN in the envelope header.
    pub fn with_dsn(mut self, dsn: impl Into<String>) -> Self {
        self.dsn = Some(dsn.into());
        self
    }

    /// Fix the `sent_at` header instead of stamping the serialisation time.
    pub fn with_sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.sent_at = Some(sent_at);
        self
    }

    /// Identifier of the event carried by this envelope, if any.
    pub fn event_id(&self) -> Option<EventId> {
        self.event_id
    }

    pub fn dsn(&self) -> Option<&str> {
        self.dsn.as_deref()
    }

    pub fn items(&self) -> &[EnvelopeItem] {
        &self.items
    }

    /// Serialise the envelope into its wire representation.
    pub fn try_serialize(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.serialize_to(&mut buf)?;
        Ok(buf)
    }

    /// Serialise the envelope into `writer`.
    pub fn serialize_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        serialise::write_envelope(self, writer)
    }
}
