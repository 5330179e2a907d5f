//! Media attachment read model.

use serde::{Deserialize, Serialize};

/// Kind of an uploaded attachment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    /// Still image
    #[serde(alias = "image")]
    Image,
    /// Looping video without sound
    #[serde(alias = "gifv")]
    Gifv,
    /// Video
    #[serde(alias = "video")]
    Video,
    /// Audio
    #[serde(alias = "audio")]
    Audio,
    /// Anything else
    #[serde(other)]
    Unknown,
}

impl MediaType {
    /// Attachment kind for a MIME content type.
    #[must_use]
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.starts_with("image/gif") {
            Self::Gifv
        } else if content_type.starts_with("image/") {
            Self::Image
        } else if content_type.starts_with("video/") {
            Self::Video
        } else if content_type.starts_with("audio/") {
            Self::Audio
        } else {
            Self::Unknown
        }
    }
}

/// An attachment as returned by the upload endpoint and inside objects.
///
/// The upload endpoint answers in snake case, the GraphQL schema in camel
/// case; both spellings are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Media ID
    pub id: String,
    /// Attachment kind
    #[serde(rename = "type", alias = "mediaType")]
    pub media_type: MediaType,
    /// Original file URL
    pub url: String,
    /// Thumbnail URL
    #[serde(default, alias = "preview_url")]
    pub preview_url: Option<String>,
    /// Alt text
    #[serde(default)]
    pub description: Option<String>,
    /// Blurhash placeholder
    #[serde(default)]
    pub blurhash: Option<String>,
    /// Hidden behind a warning
    #[serde(default)]
    pub sensitive: bool,
    /// Width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels
    #[serde(default)]
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_from_content_type() {
        assert_eq!(MediaType::from_content_type("image/png"), MediaType::Image);
        assert_eq!(MediaType::from_content_type("image/gif"), MediaType::Gifv);
        assert_eq!(MediaType::from_content_type("video/mp4"), MediaType::Video);
        assert_eq!(MediaType::from_content_type("audio/ogg"), MediaType::Audio);
        assert_eq!(
            MediaType::from_content_type("application/pdf"),
            MediaType::Unknown
        );
    }

    #[test]
    fn test_upload_response_snake_case() {
        let media: Media = serde_json::from_value(serde_json::json!({
            "id": "m1",
            "type": "IMAGE",
            "url": "https://cdn.example/m1.png",
            "preview_url": "https://cdn.example/m1.small.png",
            "description": "a cat"
        }))
        .unwrap();

        assert_eq!(media.media_type, MediaType::Image);
        assert_eq!(
            media.preview_url.as_deref(),
            Some("https://cdn.example/m1.small.png")
        );
        assert!(!media.sensitive);
    }

    #[test]
    fn test_unknown_media_type() {
        let media: Media = serde_json::from_value(serde_json::json!({
            "id": "m2",
            "type": "HOLOGRAM",
            "url": "https://cdn.example/m2"
        }))
        .unwrap();
        assert_eq!(media.media_type, MediaType::Unknown);
    }
}
