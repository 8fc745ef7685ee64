//! Presentation views built from catalog items.
//!
//! Only this layer substitutes cosmetic defaults: a placeholder image when the
//! item has no usable image reference, and percent-encoded navigation links.

use serde::Serialize;
use wisata_core::{Item, Recommendation};

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=Image+Unavailable";

/// Image to display: the item's own when it looks like an http(s) URL
pub fn display_image(item: &Item) -> String {
    match item.attributes.image_url.as_deref() {
        Some(url) if url.starts_with("http") => url.to_string(),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Link to the item's detail route
pub fn item_link(name: &str) -> String {
    format!("/items/{}", urlencoding::encode(name))
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemCard {
    pub name: String,
    pub image_url: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl ItemCard {
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            image_url: display_image(item),
            link: item_link(&item.name),
            score: None,
        }
    }
}

impl From<&Recommendation<'_>> for ItemCard {
    fn from(rec: &Recommendation<'_>) -> Self {
        Self {
            score: Some(rec.score),
            ..Self::from_item(rec.item)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemDetail {
    pub name: String,
    pub image_url: String,
    pub category: String,
    pub opening_hours: String,
    pub ticket_price: String,
    pub maps_url: Option<String>,
    pub description: String,
    pub facilities: Option<String>,
    pub recommendations: Vec<ItemCard>,
}

impl ItemDetail {
    pub fn new(item: &Item, recommendations: Vec<ItemCard>) -> Self {
        let attrs = &item.attributes;
        Self {
            name: item.name.clone(),
            image_url: display_image(item),
            category: attrs.category.clone(),
            opening_hours: attrs.opening_hours.clone(),
            ticket_price: attrs.ticket_price.clone(),
            maps_url: attrs.maps_url.clone(),
            description: attrs.description.clone(),
            facilities: attrs.facilities.clone(),
            recommendations,
        }
    }
}
