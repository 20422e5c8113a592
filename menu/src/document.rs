//! Menu document parsing and validation.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::types::{MenuCategory, MenuItem};

/// A full menu: categories plus the items filed under them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Menu {
    #[serde(default)]
    pub categories: Vec<MenuCategory>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// Load and validate a menu from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read menu {}", path.display()))?;
        Self::from_json_str(&contents).with_context(|| format!("load menu {}", path.display()))
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let menu: Menu = serde_json::from_str(contents).context("parse menu json")?;
        menu.validate()?;
        Ok(menu)
    }

    /// Pretty-printed JSON with trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = serde_json::to_string_pretty(self).context("serialize menu json")?;
        buf.push('\n');
        Ok(buf)
    }

    pub fn validate(&self) -> Result<()> {
        let mut category_ids = BTreeSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() {
                bail!("category.id must be non-empty");
            }
            if category.name.trim().is_empty() {
                bail!("category {} name must be non-empty", category.id);
            }
            if !category_ids.insert(category.id.as_str()) {
                bail!("duplicate category.id {}", category.id);
            }
        }

        let mut item_ids = BTreeSet::new();
        for item in &self.items {
            if item.id.trim().is_empty() {
                bail!("item.id must be non-empty");
            }
            if !item_ids.insert(item.id.as_str()) {
                bail!("duplicate item.id {}", item.id);
            }
            validate_item(item, &category_ids).with_context(|| format!("item {} invalid", item.id))?;
        }
        Ok(())
    }

    /// Categories ordered by `(position, id)`.
    pub fn sorted_categories(&self) -> Vec<&MenuCategory> {
        let mut categories: Vec<&MenuCategory> = self.categories.iter().collect();
        categories.sort_by(|left, right| {
            left.position
                .cmp(&right.position)
                .then_with(|| left.id.cmp(&right.id))
        });
        categories
    }

    /// Items filed under `category_id`, ordered by name.
    pub fn items_in(&self, category_id: &str) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self
            .items
            .iter()
            .filter(|item| item.category_id == category_id)
            .collect();
        items.sort_by(|left, right| left.name.cmp(&right.name));
        items
    }
}

fn validate_item(item: &MenuItem, category_ids: &BTreeSet<&str>) -> Result<()> {
    if item.name.trim().is_empty() {
        bail!("name must be non-empty");
    }
    if !category_ids.contains(item.category_id.as_str()) {
        bail!("unknown category_id {}", item.category_id);
    }
    if item.currency.len() != 3 || !item.currency.chars().all(|ch| ch.is_ascii_uppercase()) {
        bail!("currency must be a 3-letter uppercase code");
    }
    for (index, image) in item.images.iter().enumerate() {
        if image.url.trim().is_empty() {
            bail!("images[{}].url must be non-empty", index);
        }
    }
    if item.images.iter().filter(|image| image.primary).count() > 1 {
        bail!("at most one image may be primary");
    }
    Ok(())
}
