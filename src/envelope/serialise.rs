//! Newline-delimited envelope encoding.
//!
//! Header structs borrow from the envelope so serialisation allocates only
//! the JSON payload buffers.

use std::io::{self, Write};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::{Envelope, EnvelopeItem, ItemPayload};

#[derive(Serialize)]
struct EnvelopeHeader<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dsn: Option<&'a str>,
    sent_at: String,
}

#[derive(Serialize)]
struct ItemHeader<'a> {
    #[serde(rename = "type")]
    item_type: &'a str,
    length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filename: Option<&'a str>,
}

pub(super) fn write_envelope<W: Write>(envelope: &Envelope, writer: &mut W) -> io::Result<()> {
    let sent_at = envelope.sent_at.unwrap_or_else(Utc::now);
    let header = EnvelopeHeader {
        event_id: envelope.event_id.map(|id| id.to_string()),
        dsn: envelope.dsn.as_deref(),
        sent_at: sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    serde_json::to_writer(&mut *writer, &header).map_err(io::Error::other)?;
    writer.write_all(b"\n")?;

    for item in &envelope.items {
        write_item(item, writer)?;
    }
    Ok(())
}

fn write_item<W: Write>(item: &EnvelopeItem, writer: &mut W) -> io::Result<()> {
    let encoded;
    let payload: &[u8] = match item.payload() {
        ItemPayload::Json(value) => {
            encoded = serde_json::to_vec(value).map_err(io::Error::other)?;
            &encoded
        }
        ItemPayload::Bytes(bytes) => bytes,
    };
    let header = ItemHeader {
        item_type: item.item_type().as_str(),
        length: payload.len(),
        content_type: item.content_type(),
        filename: item.filename(),
    };
    serde_json::to_writer(&mut *writer, &header).map_err(io::Error::other)?;
    writer.write_all(b"\n")?;
    writer.write_all(payload)?;
    writer.write_all(b"\n")
}
