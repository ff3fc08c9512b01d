use crate::media::MediaEntry;
use crate::timestamp::Timestamp;
use serde::Serialize;
use url::Url;

/// Word that should appear before the object title in a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Determiner {
    A,
    An,
    The,
    Auto,
    Blank,
}

impl Default for Determiner {
    fn default() -> Self {
        Determiner::Blank
    }
}

impl Determiner {
    /// Parses the protocol spelling; the empty string is an alias for blank.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "a" => Some(Determiner::A),
            "an" => Some(Determiner::An),
            "the" => Some(Determiner::The),
            "auto" => Some(Determiner::Auto),
            "blank" | "" => Some(Determiner::Blank),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Determiner::A => "a",
            Determiner::An => "an",
            Determiner::The => "the",
            Determiner::Auto => "auto",
            Determiner::Blank => "",
        }
    }
}

/// Object type plus its type-specific detail payload.
///
/// Carrying the detail inside the variant makes a mismatched detail
/// unrepresentable; only the builder's type dispatch can construct one.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectType {
    Website,
    Article(ArticleDetail),
    Book(BookDetail),
    Profile(ProfileDetail),
}

impl ObjectType {
    /// Literal tag name emitted as `og:type`.
    pub fn name(&self) -> &'static str {
        match self {
            ObjectType::Website => "website",
            ObjectType::Article(_) => "article",
            ObjectType::Book(_) => "book",
            ObjectType::Profile(_) => "profile",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ArticleDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BookDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Immutable Open Graph record for one page, built fresh per render request.
///
/// Scalar-or-sequence inputs are already normalized to `Vec`s here, so the
/// renderer never branches on input shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OpenGraphRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub object: ObjectType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
    pub description: String,
    pub determiner: Determiner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locale_alternate: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<MediaEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audio: Vec<MediaEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<MediaEntry>,
}

impl OpenGraphRecord {
    /// Bare website record with every optional field unset.
    pub fn website() -> Self {
        Self {
            title: None,
            object: ObjectType::Website,
            url: None,
            description: String::new(),
            determiner: Determiner::default(),
            locale: None,
            locale_alternate: Vec::new(),
            site_name: None,
            images: Vec::new(),
            audio: Vec::new(),
            videos: Vec::new(),
        }
    }
}
