use crate::error::Error as PhotoQuestError;
use anyhow::{Context, bail};
use reqwest::multipart::Part;
use std::{fs, path::Path};

/// Maximum size of the uploaded photo, 5 MiB.
pub const MAX_PHOTO_SIZE: usize = 5 * 1024 * 1024;

/// Photo (or avatar) sent to the API as a part of the multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl PhotoUpload {
    /// Reads the photo from the file at the specified path.
    pub fn read<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read(path).with_context(|| format!("Cannot read photo file {path:?}."))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());
        let content_type = match path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .as_deref()
        {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("heic") => "image/heic",
            _ => "application/octet-stream",
        };

        Ok(Self {
            file_name,
            content_type: content_type.to_string(),
            content,
        })
    }

    /// Checks that the upload is an image the API accepts.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.content_type.starts_with("image/") {
            bail!(PhotoQuestError::validation("Please select an image file."));
        }

        if self.content.len() > MAX_PHOTO_SIZE {
            bail!(PhotoQuestError::validation("Please select an image under 5MB."));
        }

        Ok(())
    }

    /// Converts upload to the multipart form part.
    pub fn into_part(self) -> anyhow::Result<Part> {
        Part::bytes(self.content)
            .file_name(self.file_name)
            .mime_str(&self.content_type)
            .context("Cannot prepare photo upload.")
    }
}
