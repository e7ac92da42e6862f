use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Location, Media};

/// Payload for creating a post. The id is assigned by the server.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PostDescriptor {
    pub name: String,
    pub media: Media,
    pub location: Location,
    pub description: String,
    pub mood: String,
    pub positive_reflection: String,
    pub negative_reflection: String,
    pub physical_effort: u8,
    pub economic_effort: u8,
    pub actual_expense: f64,
    pub tags: Vec<String>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub special: bool,
    #[serde(default)]
    pub folder_id: Option<u64>,
}

/// Partial field set for editing a post.
///
/// Unset fields are left out of the serialized object and keep their
/// previous value on the server.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EditPostDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_reflection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_reflection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_effort: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub economic_effort: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_expense: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<bool>,
    /// Moves the post into another folder. Clearing the association
    /// is not expressible through an edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
}
