//! Site-wide Open Graph defaults.
//!
//! The host application deserializes a [`SiteDefaults`] snapshot once at
//! startup, validates it, lowers it to an attribute mapping, and threads that
//! mapping into every `opengraph_core::build` call. The snapshot is never
//! mutated afterwards.

use opengraph_core::Attrs;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SITE_DEFAULTS_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SITE_DEFAULTS_SCHEMA_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SiteDefaults {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub determiner: Option<String>,
    /// Fallback `og:type`; per-page attributes normally override this.
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self {
            schema_version: SITE_DEFAULTS_SCHEMA_VERSION,
            site_name: None,
            locale: None,
            determiner: None,
            object_type: None,
            description: None,
            url: None,
            image: None,
        }
    }
}

impl SiteDefaults {
    pub fn validate(&self) -> Result<(), SiteDefaultsError> {
        if self.schema_version != SITE_DEFAULTS_SCHEMA_VERSION {
            return Err(SiteDefaultsError::UnsupportedSchemaVersion {
                expected: SITE_DEFAULTS_SCHEMA_VERSION,
                got: self.schema_version,
            });
        }
        Ok(())
    }

    /// Lowers the snapshot into the builder's defaults mapping; only set
    /// fields appear.
    pub fn to_attrs(&self) -> Attrs {
        let mut attrs = Attrs::new();
        let fields = [
            ("site_name", &self.site_name),
            ("locale", &self.locale),
            ("determiner", &self.determiner),
            ("type", &self.object_type),
            ("description", &self.description),
            ("url", &self.url),
            ("image", &self.image),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                attrs.insert(key, Value::String(value.clone()));
            }
        }
        attrs
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SiteDefaultsError {
    UnsupportedSchemaVersion { expected: u32, got: u32 },
}

impl std::fmt::Display for SiteDefaultsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteDefaultsError::UnsupportedSchemaVersion { expected, got } => write!(
                f,
                "unsupported schema version: expected {expected}, got {got}"
            ),
        }
    }
}

impl std::error::Error for SiteDefaultsError {}
