//! Multipart media upload.

use bytes::Bytes;
use fedigraph_common::{ClientError, ClientResult};
use fedigraph_types::MediaType;
use reqwest::multipart::{Form, Part};
use validator::Validate;

/// A file to upload as a media attachment.
///
/// The bytes travel as the `file` part of a `multipart/form-data` body,
/// never inside a JSON document.
#[derive(Debug, Clone, Validate)]
pub struct MediaUpload {
    pub bytes: Bytes,
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
    #[validate(length(min = 3))]
    pub content_type: String,
    /// Alt text.
    #[validate(length(max = 1500))]
    pub description: Option<String>,
    /// Focal point, each coordinate in `[-1, 1]`.
    pub focus: Option<(f32, f32)>,
    pub sensitive: bool,
}

impl MediaUpload {
    #[must_use]
    pub fn new(
        bytes: impl Into<Bytes>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            description: None,
            focus: None,
            sensitive: false,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn focus(mut self, x: f32, y: f32) -> Self {
        self.focus = Some((x, y));
        self
    }

    #[must_use]
    pub const fn sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    /// Attachment kind implied by the content type.
    #[must_use]
    pub fn media_type(&self) -> MediaType {
        MediaType::from_content_type(&self.content_type)
    }

    /// Validate before anything is sent.
    pub fn check(&self) -> ClientResult<()> {
        self.validate()?;

        if self.bytes.is_empty() {
            return Err(ClientError::Validation("file: upload is empty".to_string()));
        }
        let in_range = |v: f32| (-1.0..=1.0).contains(&v);
        if let Some((x, y)) = self.focus.filter(|&(x, y)| !in_range(x) || !in_range(y)) {
            return Err(ClientError::Validation(format!(
                "focus: ({x}, {y}) is outside [-1, 1]"
            )));
        }
        Ok(())
    }

    /// Build the multipart body: a `file` part plus optional `description`,
    /// `focus` and `sensitive` text parts.
    pub fn into_form(self) -> ClientResult<Form> {
        let part = Part::bytes(self.bytes.to_vec())
            .file_name(self.file_name)
            .mime_str(&self.content_type)?;

        let mut form = Form::new().part("file", part);
        if let Some(description) = self.description {
            form = form.text("description", description);
        }
        if let Some((x, y)) = self.focus {
            form = form.text("focus", format!("{x},{y}"));
        }
        if self.sensitive {
            form = form.text("sensitive", "true");
        }
        Ok(form)
    }
}
