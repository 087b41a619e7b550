use crate::journal::error::{ValidationError, require_text};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewJournalEntry {
    pub title: String,
    pub content: String,
}

impl NewJournalEntry {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)
    }
}

/// A field of a partial update.
///
/// A key missing from the payload deserializes to [`Patch::Absent`] through `#[serde(default)]`.
/// A key that is present has to hold a valid `T`, an explicit `null` for a text field is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Present(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::Present)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Present(value) => value.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JournalEntryUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub content: Patch<String>,
}

impl JournalEntryUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Patch::Present(title) = &self.title {
            require_text("title", title)?;
        }
        if let Patch::Present(content) = &self.content {
            require_text("content", content)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_absent() && self.content.is_absent()
    }
}
