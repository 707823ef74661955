//! Catalog wire types
//!
//! Shapes returned by the public creature catalog API. Unknown fields are
//! ignored; the real payloads are far larger than what the form needs.

use serde::{Deserialize, Serialize};

use pokeform_domain::{DomainError, SelectOption};

/// Base URL of the front-facing sprite images, keyed by creature id.
pub const SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// One entry of a catalog listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Reference URL of the detail record, ending in the creature id
    pub url: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Creature id: the last non-empty path segment of the reference URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` if the URL has no path segment.
    pub fn catalog_id(&self) -> Result<String, DomainError> {
        let path = match url::Url::parse(&self.url) {
            Ok(parsed) => parsed.path().to_string(),
            Err(_) => self.url.clone(),
        };
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .next_back()
            .map(str::to_string)
            .ok_or_else(|| DomainError::parse(format!("No id in catalog url: {}", self.url)))
    }

    /// Sprite URL derived from the catalog id, when one can be extracted.
    pub fn sprite_url(&self) -> Option<String> {
        self.catalog_id()
            .ok()
            .map(|id| format!("{}/{}.png", SPRITE_BASE_URL, id))
    }

    /// Option for the team multi-select: key is the raw name, label is capitalized.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an entry with a blank name.
    pub fn to_option(&self) -> Result<SelectOption, DomainError> {
        let option = SelectOption::try_new(self.name.clone(), capitalize(&self.name))?;
        Ok(match self.sprite_url() {
            Some(image) => option.with_image(image),
            None => {
                tracing::warn!(name = %self.name, url = %self.url, "Catalog entry without id");
                option
            }
        })
    }
}

/// One page of the catalog listing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<CatalogEntry>,
}

impl CatalogPage {
    /// Selectable options in listing order; unusable entries are skipped.
    pub fn to_options(&self) -> Vec<SelectOption> {
        self.results
            .iter()
            .filter_map(|entry| match entry.to_option() {
                Ok(option) => Some(option),
                Err(e) => {
                    tracing::warn!(url = %entry.url, error = %e, "Skipping catalog entry");
                    None
                }
            })
            .collect()
    }
}

/// Artwork URLs of a creature
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

/// A `{name, url}` reference to another catalog resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Category (type) slot of a creature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Detail record fetched per team member at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

impl CreatureDetail {
    pub fn sprite_url(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }

    /// Category names in slot order
    pub fn categories(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.kind.name.as_str()).collect()
    }

    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
