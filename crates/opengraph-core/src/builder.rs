//! Builds an [`OpenGraphRecord`] from caller attributes merged with the
//! process-wide defaults snapshot.
//!
//! Unknown attribute keys are ignored, both at the top level and inside the
//! type-detail builders; each builder reads only the keys it recognizes.
//! Values of the wrong shape, unparsable timestamps, unparsable URLs, and
//! unsupported `type` names fail fast with an [`OpenGraphError`] so garbage
//! never reaches the renderer.

use crate::attrs::Attrs;
use crate::errors::OpenGraphError;
use crate::media::{Media, MediaEntry, MediaKind};
use crate::record::{
    ArticleDetail, BookDetail, Determiner, ObjectType, OpenGraphRecord, ProfileDetail,
};
use crate::timestamp::Timestamp;
use serde_json::{Map, Value};
use url::Url;

/// Merges `attrs` over `defaults` and shapes the result into a record.
///
/// Pure function of its inputs; the defaults snapshot is threaded in
/// explicitly rather than read from global state.
pub fn build(attrs: &Attrs, defaults: &Attrs) -> Result<OpenGraphRecord, OpenGraphError> {
    let merged = Attrs::merged(attrs, defaults);

    let object = match merged.get("type") {
        None => ObjectType::Website,
        Some(value) => match expect_str(value, "type")? {
            "website" => ObjectType::Website,
            "article" => ObjectType::Article(article_detail(&merged)?),
            "book" => ObjectType::Book(book_detail(&merged)?),
            "profile" => ObjectType::Profile(profile_detail(&merged)?),
            other => return Err(OpenGraphError::UnknownObjectType(other.to_string())),
        },
    };

    Ok(OpenGraphRecord {
        title: opt_string(&merged, "title")?,
        object,
        url: opt_url(&merged, "url")?,
        description: opt_string(&merged, "description")?.unwrap_or_default(),
        determiner: determiner(&merged)?,
        locale: opt_string(&merged, "locale")?,
        locale_alternate: string_list(&merged, "locale_alternate")?,
        site_name: opt_string(&merged, "site_name")?,
        images: media_entries(&merged, "image", MediaKind::Image)?,
        audio: media_entries(&merged, "audio", MediaKind::Audio)?,
        videos: media_entries(&merged, "video", MediaKind::Video)?,
    })
}

fn article_detail(attrs: &Attrs) -> Result<ArticleDetail, OpenGraphError> {
    Ok(ArticleDetail {
        published_time: opt_timestamp(attrs, "published_time")?,
        modified_time: opt_timestamp(attrs, "modified_time")?,
        expiration_time: opt_timestamp(attrs, "expiration_time")?,
        section: opt_string(attrs, "section")?,
        author: string_list(attrs, "author")?,
        tag: string_list(attrs, "tag")?,
    })
}

fn book_detail(attrs: &Attrs) -> Result<BookDetail, OpenGraphError> {
    Ok(BookDetail {
        release_date: opt_timestamp(attrs, "release_date")?,
        isbn: opt_string(attrs, "isbn")?,
        author: string_list(attrs, "author")?,
        tag: string_list(attrs, "tag")?,
    })
}

fn profile_detail(attrs: &Attrs) -> Result<ProfileDetail, OpenGraphError> {
    Ok(ProfileDetail {
        first_name: opt_string(attrs, "first_name")?,
        last_name: opt_string(attrs, "last_name")?,
        username: opt_string(attrs, "username")?,
        gender: opt_string(attrs, "gender")?,
    })
}

fn determiner(attrs: &Attrs) -> Result<Determiner, OpenGraphError> {
    match attrs.get("determiner") {
        None => Ok(Determiner::default()),
        Some(value) => {
            Determiner::parse(expect_str(value, "determiner")?).ok_or(
                OpenGraphError::InvalidAttribute {
                    key: "determiner",
                    expected: "one of a, an, the, auto, blank",
                },
            )
        }
    }
}

fn expect_str<'a>(value: &'a Value, key: &'static str) -> Result<&'a str, OpenGraphError> {
    value
        .as_str()
        .ok_or(OpenGraphError::InvalidAttribute {
            key,
            expected: "a string",
        })
}

fn opt_string(attrs: &Attrs, key: &'static str) -> Result<Option<String>, OpenGraphError> {
    match attrs.get(key) {
        None => Ok(None),
        Some(value) => expect_str(value, key).map(|s| Some(s.to_string())),
    }
}

fn opt_timestamp(attrs: &Attrs, key: &'static str) -> Result<Option<Timestamp>, OpenGraphError> {
    match attrs.get(key) {
        None => Ok(None),
        Some(value) => {
            let raw = expect_str(value, key)?;
            Timestamp::parse(raw)
                .map(Some)
                .map_err(|source| OpenGraphError::InvalidTimestamp {
                    key,
                    value: raw.to_string(),
                    source,
                })
        }
    }
}

fn opt_url(attrs: &Attrs, key: &'static str) -> Result<Option<Url>, OpenGraphError> {
    match attrs.get(key) {
        None => Ok(None),
        Some(value) => {
            let raw = expect_str(value, key)?;
            Url::parse(raw)
                .map(Some)
                .map_err(|source| OpenGraphError::InvalidUrl {
                    key,
                    value: raw.to_string(),
                    source,
                })
        }
    }
}

/// Normalizes an absent-or-scalar-or-sequence value to an ordered list.
fn string_list(attrs: &Attrs, key: &'static str) -> Result<Vec<String>, OpenGraphError> {
    match attrs.get(key) {
        None => Ok(Vec::new()),
        Some(Value::String(s)) => Ok(vec![s.clone()]),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| expect_str(item, key).map(str::to_string))
            .collect(),
        Some(_) => Err(OpenGraphError::InvalidAttribute {
            key,
            expected: "a string or a sequence of strings",
        }),
    }
}

fn media_entries(
    attrs: &Attrs,
    key: &'static str,
    kind: MediaKind,
) -> Result<Vec<MediaEntry>, OpenGraphError> {
    match attrs.get(key) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| media_entry(item, key, kind))
            .collect(),
        Some(value) => Ok(vec![media_entry(value, key, kind)?]),
    }
}

fn media_entry(
    value: &Value,
    key: &'static str,
    kind: MediaKind,
) -> Result<MediaEntry, OpenGraphError> {
    match value {
        Value::String(url) => Ok(MediaEntry::Plain(url.clone())),
        Value::Object(fields) => structured_media(fields, key, kind).map(MediaEntry::Structured),
        _ => Err(OpenGraphError::InvalidAttribute {
            key,
            expected: "a url string or a media object",
        }),
    }
}

fn structured_media(
    fields: &Map<String, Value>,
    key: &'static str,
    kind: MediaKind,
) -> Result<Media, OpenGraphError> {
    // A missing url still renders as an empty root tag, so default it here.
    let url = match fields.get("url") {
        None => String::new(),
        Some(value) => expect_str(value, key)?.to_string(),
    };
    let mut media = Media {
        url,
        secure_url: field_string(fields, "secure_url", key)?,
        mime: field_string(fields, kind.mime_key(), key)?,
        ..Media::default()
    };
    if kind.has_visual_fields() {
        media.width = field_dimension(fields, "width", key)?;
        media.height = field_dimension(fields, "height", key)?;
        media.alt = field_string(fields, "alt", key)?;
    }
    Ok(media)
}

fn field_string(
    fields: &Map<String, Value>,
    name: &str,
    key: &'static str,
) -> Result<Option<String>, OpenGraphError> {
    match fields.get(name) {
        None => Ok(None),
        Some(value) => expect_str(value, key).map(|s| Some(s.to_string())),
    }
}

/// Dimensions arrive as JSON numbers or numeric strings.
fn field_dimension(
    fields: &Map<String, Value>,
    name: &str,
    key: &'static str,
) -> Result<Option<u32>, OpenGraphError> {
    let invalid = OpenGraphError::InvalidAttribute {
        key,
        expected: "a non-negative integer dimension",
    };
    match fields.get(name) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or(invalid),
        Some(Value::String(s)) => s.parse::<u32>().map(Some).map_err(|_| invalid),
        Some(_) => Err(invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Attrs {
        Attrs::from_value(value).expect("attrs object")
    }

    #[test]
    fn defaults_to_website_with_no_detail() {
        let record = build(&attrs(json!({"title": "Home"})), &Attrs::new()).expect("build");
        assert_eq!(record.object, ObjectType::Website);
        assert_eq!(record.title.as_deref(), Some("Home"));
    }

    #[test]
    fn article_type_builds_article_detail_only() {
        let record = build(
            &attrs(json!({
                "type": "article",
                "published_time": "2011-09-17",
                "section": "Sports",
                "author": ["Alice", "Bob"],
            })),
            &Attrs::new(),
        )
        .expect("build");
        match record.object {
            ObjectType::Article(detail) => {
                assert_eq!(detail.section.as_deref(), Some("Sports"));
                assert_eq!(detail.author, vec!["Alice", "Bob"]);
                assert!(detail.tag.is_empty());
            }
            other => panic!("expected article detail, got {other:?}"),
        }
    }

    #[test]
    fn book_type_builds_book_detail() {
        let record = build(
            &attrs(json!({"type": "book", "isbn": "978-3-16-148410-0", "tag": "classic"})),
            &Attrs::new(),
        )
        .expect("build");
        match record.object {
            ObjectType::Book(detail) => {
                assert_eq!(detail.isbn.as_deref(), Some("978-3-16-148410-0"));
                assert_eq!(detail.tag, vec!["classic"]);
            }
            other => panic!("expected book detail, got {other:?}"),
        }
    }

    #[test]
    fn profile_type_builds_profile_detail() {
        let record = build(
            &attrs(json!({"type": "profile", "first_name": "Ada", "username": "ada"})),
            &Attrs::new(),
        )
        .expect("build");
        match record.object {
            ObjectType::Profile(detail) => {
                assert_eq!(detail.first_name.as_deref(), Some("Ada"));
                assert_eq!(detail.username.as_deref(), Some("ada"));
                assert_eq!(detail.last_name, None);
            }
            other => panic!("expected profile detail, got {other:?}"),
        }
    }

    #[test]
    fn unknown_type_fails_fast() {
        let err = build(&attrs(json!({"type": "movie"})), &Attrs::new()).unwrap_err();
        assert!(matches!(err, OpenGraphError::UnknownObjectType(name) if name == "movie"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let record = build(
            &attrs(json!({"title": "X", "twitter_card": "summary"})),
            &Attrs::new(),
        )
        .expect("build");
        assert_eq!(record.title.as_deref(), Some("X"));
    }

    #[test]
    fn invalid_timestamp_fails_fast() {
        let err = build(
            &attrs(json!({"type": "article", "published_time": "whenever"})),
            &Attrs::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            OpenGraphError::InvalidTimestamp { key: "published_time", .. }
        ));
    }

    #[test]
    fn invalid_url_fails_fast() {
        let err = build(&attrs(json!({"url": "not a url"})), &Attrs::new()).unwrap_err();
        assert!(matches!(err, OpenGraphError::InvalidUrl { key: "url", .. }));
    }

    #[test]
    fn scalar_media_normalizes_to_one_entry() {
        let record = build(
            &attrs(json!({"image": "https://example.com/rock.jpg"})),
            &Attrs::new(),
        )
        .expect("build");
        assert_eq!(
            record.images,
            vec![MediaEntry::Plain("https://example.com/rock.jpg".into())]
        );
    }

    #[test]
    fn audio_object_ignores_visual_fields() {
        let record = build(
            &attrs(json!({"audio": {"url": "a.mp3", "mime": "audio/mpeg", "alt": "ignored", "width": 10}})),
            &Attrs::new(),
        )
        .expect("build");
        match &record.audio[0] {
            MediaEntry::Structured(media) => {
                assert_eq!(media.mime.as_deref(), Some("audio/mpeg"));
                assert_eq!(media.alt, None);
                assert_eq!(media.width, None);
            }
            other => panic!("expected structured audio, got {other:?}"),
        }
    }

    #[test]
    fn image_mime_comes_from_type_key() {
        let record = build(
            &attrs(json!({"image": {"url": "a.jpg", "type": "image/jpeg", "width": "100"}})),
            &Attrs::new(),
        )
        .expect("build");
        match &record.images[0] {
            MediaEntry::Structured(media) => {
                assert_eq!(media.mime.as_deref(), Some("image/jpeg"));
                assert_eq!(media.width, Some(100));
            }
            other => panic!("expected structured image, got {other:?}"),
        }
    }

    #[test]
    fn defaults_fill_unset_fields() {
        let record = build(
            &attrs(json!({"title": "X"})),
            &attrs(json!({"site_name": "IMDb", "title": "fallback"})),
        )
        .expect("build");
        assert_eq!(record.title.as_deref(), Some("X"));
        assert_eq!(record.site_name.as_deref(), Some("IMDb"));
    }
}
