use std::fmt;

/// Kind of payload carried by an [`EnvelopeItem`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemType {
    Event,
    Transaction,
    Attachment,
    Session,
    /// Any item type not modelled explicitly.
    Other(String),
}

impl ItemType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Event => "event",
            Self::Transaction => "transaction",
            Self::Attachment => "attachment",
            Self::Session => "session",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of an item, serialised lazily.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemPayload {
    Json(serde_json::Value),
    Bytes(Vec<u8>),
}

/// One entry in an envelope.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvelopeItem {
    item_type: ItemType,
    payload: ItemPayload,
    content_type: Option<String>,
    filename: Option<String>,
}

impl EnvelopeItem {
    pub fn new(item_type: ItemType, payload: ItemPayload) -> Self {
        Self {
            item_type,
            payload,
            content_type: None,
            filename: None,
        }
    }

    /// An error or message event.
    pub fn event(event: serde_json::Value) -> Self {
        Self::new(ItemType::Event, ItemPayload::Json(event))
    }

    /// A performance transaction.
    pub fn transaction(transaction: serde_json::Value) -> Self {
        Self::new(ItemType::Transaction, ItemPayload::Json(transaction))
    }

    /// A binary attachment.
    pub fn attachment(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: Some(filename.into()),
            ..Self::new(ItemType::Attachment, ItemPayload::Bytes(bytes))
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn item_type(&self) -> &ItemType {
        &self.item_type
    }

    pub fn payload(&self) -> &ItemPayload {
        &self.payload
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }
}
