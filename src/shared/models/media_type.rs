//! Media type documents (DVD, Blu-ray, streaming, ...)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_text, SharedError};

/// A physical or digital format a movie can be held on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaType {
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Unique display name
    pub media_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /api/media-types` and `PUT /api/media-types/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTypeInput {
    pub media_type: Option<String>,
    pub description: Option<String>,
}

impl MediaTypeInput {
    pub fn into_media_type(self, id: Uuid) -> Result<MediaType, SharedError> {
        Ok(MediaType {
            id,
            media_type: require_text("mediaType", self.media_type)?,
            description: self.description,
        })
    }

    pub fn apply_to(self, media: &mut MediaType) -> Result<(), SharedError> {
        if let Some(name) = self.media_type {
            media.media_type = require_text("mediaType", Some(name))?;
        }
        if let Some(description) = self.description {
            media.description = Some(description);
        }
        Ok(())
    }
}
