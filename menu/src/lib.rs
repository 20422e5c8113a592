//! Restaurant menu data contracts.
//!
//! Plain serde shapes for menus exchanged as JSON: [`MenuCategory`],
//! [`MenuItem`] and [`MenuItemImage`], grouped in a [`Menu`] document that is
//! validated on load.

mod document;
mod types;

pub use document::Menu;
pub use types::{MenuCategory, MenuItem, MenuItemImage};
