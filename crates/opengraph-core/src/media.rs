use serde::Serialize;

/// Media channel a page asset belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Root property name for this channel.
    pub fn property(&self) -> &'static str {
        match self {
            MediaKind::Image => "og:image",
            MediaKind::Video => "og:video",
            MediaKind::Audio => "og:audio",
        }
    }

    /// Attribute key carrying the MIME type. Images use `type`, audio and
    /// video use `mime`.
    pub(crate) fn mime_key(&self) -> &'static str {
        match self {
            MediaKind::Image => "type",
            MediaKind::Video | MediaKind::Audio => "mime",
        }
    }

    /// Audio assets carry neither dimensions nor alt text.
    pub(crate) fn has_visual_fields(&self) -> bool {
        !matches!(self, MediaKind::Audio)
    }
}

/// One image/audio/video entry after scalar-or-sequence normalization.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MediaEntry {
    Plain(String),
    Structured(Media),
}

/// Structured description of a media asset beyond its bare URL.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Media {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}
