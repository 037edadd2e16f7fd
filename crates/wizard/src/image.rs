//! Offering images: one thumbnail slot plus an ordered gallery.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use offerwiz_core::{Entity, ImageId};

/// Where an uploaded image goes; decides its id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageRole {
    Thumbnail,
    Gallery,
}

impl ImageRole {
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ImageRole::Thumbnail => "thumbnail-",
            ImageRole::Gallery => "gallery-",
        }
    }

    pub fn generate_id(&self) -> ImageId {
        ImageId::generate(self.id_prefix())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferingImage {
    pub id: ImageId,
    /// `data:` URI with the base64-encoded file contents.
    pub url: String,
    /// Original file bytes, kept for a later upload step. Never serialized.
    #[serde(skip)]
    pub raw_file: Option<Bytes>,
}

impl OfferingImage {
    pub fn new(id: impl Into<ImageId>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            raw_file: None,
        }
    }

    pub fn with_raw_file(mut self, raw: Bytes) -> Self {
        self.raw_file = Some(raw);
        self
    }
}

impl Entity for OfferingImage {
    type Id = ImageId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
