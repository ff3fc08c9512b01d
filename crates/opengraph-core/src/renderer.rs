//! Deterministic tag renderer.
//!
//! Turns an immutable [`OpenGraphRecord`] into the fixed-order sequence of
//! `(property, content)` pairs consumed by the markup layer. Absent optional
//! values emit nothing; `og:title`, `og:type`, and `og:description` are always
//! emitted, empty or not, matching the upstream behavior this renderer is
//! snapshot-compatible with.

use crate::media::{Media, MediaEntry, MediaKind};
use crate::record::{
    ArticleDetail, BookDetail, Determiner, ObjectType, OpenGraphRecord, ProfileDetail,
};
use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// One tag emission: becomes one `<meta property=... content=... />` element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub property: String,
    pub content: String,
}

impl Tag {
    pub fn new(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            content: content.into(),
        }
    }
}

/// Renders the full ordered tag sequence for a record.
pub fn render(record: &OpenGraphRecord) -> Vec<Tag> {
    let mut tags = Vec::new();

    if let Some(site_name) = &record.site_name {
        tags.push(Tag::new("og:site_name", site_name));
    }
    tags.push(Tag::new("og:title", record.title.as_deref().unwrap_or("")));
    tags.push(Tag::new("og:type", record.object.name()));
    if let Some(url) = &record.url {
        tags.push(Tag::new("og:url", url.as_str()));
    }
    tags.push(Tag::new("og:description", &record.description));
    if record.determiner != Determiner::Blank {
        tags.push(Tag::new("og:determiner", record.determiner.as_str()));
    }
    if let Some(locale) = &record.locale {
        tags.push(Tag::new("og:locale", locale));
    }
    for alternate in &record.locale_alternate {
        tags.push(Tag::new("og:locale:alternate", alternate));
    }

    match &record.object {
        ObjectType::Website => {}
        ObjectType::Article(detail) => render_article(detail, &mut tags),
        ObjectType::Book(detail) => render_book(detail, &mut tags),
        ObjectType::Profile(detail) => render_profile(detail, &mut tags),
    }

    for entry in &record.images {
        render_media(MediaKind::Image, entry, &mut tags);
    }
    for entry in &record.audio {
        render_media(MediaKind::Audio, entry, &mut tags);
    }
    for entry in &record.videos {
        render_media(MediaKind::Video, entry, &mut tags);
    }

    tags
}

fn push_timestamp(tags: &mut Vec<Tag>, property: &'static str, value: Option<&Timestamp>) {
    if let Some(ts) = value {
        tags.push(Tag::new(property, ts.to_string()));
    }
}

fn render_article(detail: &ArticleDetail, tags: &mut Vec<Tag>) {
    push_timestamp(tags, "article:published_time", detail.published_time.as_ref());
    push_timestamp(tags, "article:modified_time", detail.modified_time.as_ref());
    push_timestamp(
        tags,
        "article:expiration_time",
        detail.expiration_time.as_ref(),
    );
    if let Some(section) = &detail.section {
        tags.push(Tag::new("article:section", section));
    }
    for author in &detail.author {
        tags.push(Tag::new("article:author", author));
    }
    for tag in &detail.tag {
        tags.push(Tag::new("article:tag", tag));
    }
}

fn render_book(detail: &BookDetail, tags: &mut Vec<Tag>) {
    push_timestamp(tags, "book:release_date", detail.release_date.as_ref());
    if let Some(isbn) = &detail.isbn {
        tags.push(Tag::new("book:isbn", isbn));
    }
    for author in &detail.author {
        tags.push(Tag::new("book:author", author));
    }
    for tag in &detail.tag {
        tags.push(Tag::new("book:tag", tag));
    }
}

fn render_profile(detail: &ProfileDetail, tags: &mut Vec<Tag>) {
    if let Some(first_name) = &detail.first_name {
        tags.push(Tag::new("profile:first_name", first_name));
    }
    if let Some(last_name) = &detail.last_name {
        tags.push(Tag::new("profile:last_name", last_name));
    }
    if let Some(username) = &detail.username {
        tags.push(Tag::new("profile:username", username));
    }
    if let Some(gender) = &detail.gender {
        tags.push(Tag::new("profile:gender", gender));
    }
}

fn render_media(kind: MediaKind, entry: &MediaEntry, tags: &mut Vec<Tag>) {
    match entry {
        MediaEntry::Plain(url) => tags.push(Tag::new(kind.property(), url)),
        MediaEntry::Structured(media) => render_structured_media(kind, media, tags),
    }
}

fn render_structured_media(kind: MediaKind, media: &Media, tags: &mut Vec<Tag>) {
    let root = kind.property();
    // The root url tag has no presence check; an empty url still emits.
    tags.push(Tag::new(root, &media.url));
    if let Some(secure_url) = &media.secure_url {
        tags.push(Tag::new(format!("{root}:secure_url"), secure_url));
    }
    if let Some(mime) = &media.mime {
        tags.push(Tag::new(format!("{root}:type"), mime));
    }
    if kind.has_visual_fields() {
        if let Some(width) = media.width {
            tags.push(Tag::new(format!("{root}:width"), width.to_string()));
        }
        if let Some(height) = media.height {
            tags.push(Tag::new(format!("{root}:height"), height.to_string()));
        }
        if let Some(alt) = &media.alt {
            tags.push(Tag::new(format!("{root}:alt"), alt));
        }
    }
}
