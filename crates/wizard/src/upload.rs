//! File-input collaborator: turns a picked file into an [`OfferingImage`].
//!
//! Reading the file is the caller's job (it is usually asynchronous in the host
//! UI); this module only decides whether the bytes are acceptable and encodes
//! them as a data URI.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use thiserror::Error;

use crate::image::{ImageRole, OfferingImage};

/// MIME types accepted for offering images.
pub const ACCEPTED_MIME_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/jpg", "image/webp"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("unsupported image type: {0:?}")]
    UnsupportedType(String),
}

/// A file as handed over by the host's file picker or drop zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub contents: Bytes,
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        contents: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            contents: contents.into(),
        }
    }

    /// MIME type without parameters, lowercased (`Image/PNG; q=1` -> `image/png`).
    pub fn essence(&self) -> String {
        self.mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }

    pub fn is_accepted(&self) -> bool {
        ACCEPTED_MIME_TYPES.contains(&self.essence().as_str())
    }
}

/// Validate and encode an upload for the given slot.
pub fn read_image(upload: &ImageUpload, role: ImageRole) -> Result<OfferingImage, UploadError> {
    if !upload.is_accepted() {
        return Err(UploadError::UnsupportedType(upload.mime_type.clone()));
    }

    let url = format!(
        "data:{};base64,{}",
        upload.essence(),
        STANDARD.encode(&upload.contents)
    );
    Ok(OfferingImage::new(role.generate_id(), url).with_raw_file(upload.contents.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_types_are_encoded_as_data_uris() {
        let upload = ImageUpload::new("logo.png", "image/png", &b"\x89PNG"[..]);
        let image = read_image(&upload, ImageRole::Thumbnail).unwrap();
        assert_eq!(image.url, "data:image/png;base64,iVBORw==");
        assert!(image.id.as_str().starts_with("thumbnail-"));
        assert_eq!(image.raw_file.as_deref(), Some(&b"\x89PNG"[..]));
    }

    #[test]
    fn mime_parameters_and_case_are_ignored() {
        let upload = ImageUpload::new("a.webp", "Image/WebP; charset=binary", vec![1u8, 2, 3]);
        assert!(upload.is_accepted());
        let image = read_image(&upload, ImageRole::Gallery).unwrap();
        assert!(image.url.starts_with("data:image/webp;base64,"));
        assert!(image.id.as_str().starts_with("gallery-"));
    }

    #[test]
    fn other_types_are_rejected() {
        for mime in ["text/plain", "image/gif", "application/pdf", ""] {
            let upload = ImageUpload::new("f", mime, vec![1u8]);
            assert_eq!(
                read_image(&upload, ImageRole::Gallery),
                Err(UploadError::UnsupportedType(mime.to_string()))
            );
        }
    }

    #[test]
    fn empty_files_encode_to_an_empty_payload() {
        let upload = ImageUpload::new("empty.jpg", "image/jpeg", Vec::<u8>::new());
        let image = read_image(&upload, ImageRole::Thumbnail).unwrap();
        assert_eq!(image.url, "data:image/jpeg;base64,");
        assert!(image.id.as_str().starts_with("thumbnail-"));
    }
}
