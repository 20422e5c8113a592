use serde::{Deserialize, Serialize};

/// A section of the menu (e.g. "Starters").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display position; ties are broken by id.
    #[serde(default)]
    pub position: u32,
}

/// A dish or drink offered on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in minor units of `currency`.
    pub price_cents: u64,
    /// ISO 4217 code, e.g. `EUR`.
    pub currency: String,
    pub category_id: String,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<MenuItemImage>,
}

/// Picture attached to a [`MenuItem`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItemImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// The image shown in listings. At most one per item.
    #[serde(default)]
    pub primary: bool,
}

fn default_available() -> bool {
    true
}

impl MenuItem {
    pub fn primary_image(&self) -> Option<&MenuItemImage> {
        self.images.iter().find(|image| image.primary)
    }
}
