use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{DeckError, DeckResult};

/// The input JSON document: an ordered list of slide descriptors plus an
/// optional deck title carried into the document properties.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slides: Vec<SlideSpec>,
}

/// One manifest entry. Both fields are optional and whitespace-trimmed; an
/// entry without an image produces no slide.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SlideSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: Option<String>,
}

/// Treats an explicit JSON `null` the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

impl Manifest {
    pub fn from_path(path: &Path) -> DeckResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| DeckError::parse(format!("read manifest '{}': {e}", path.display())))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| DeckError::parse(format!("parse manifest '{}': {e}", path.display())))
    }

    pub fn title_trimmed(&self) -> Option<&str> {
        trimmed_non_empty(self.title.as_deref())
    }
}

impl SlideSpec {
    pub fn title_trimmed(&self) -> Option<&str> {
        trimmed_non_empty(self.title.as_deref())
    }

    pub fn image_trimmed(&self) -> Option<&str> {
        trimmed_non_empty(self.image.as_deref())
    }
}

fn trimmed_non_empty(s: Option<&str>) -> Option<&str> {
    let t = s?.trim();
    (!t.is_empty()).then_some(t)
}
