use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodCategory {
    Meal,
    Snack,
    Beverage,
    Fruits,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodStatus {
    Available,
    Claimed,
    Expired,
}

/// A posted food offer. Wire format is camelCase JSON with RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodListing {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub description: String,
    pub category: FoodCategory,
    pub quantity: String,
    pub expiry_time: DateTime<Utc>,
    pub location_name: String,
    pub coordinates: Coordinates,
    pub image_url: String,
    pub status: FoodStatus,
    pub created_at: DateTime<Utc>,
    pub is_safety_checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<String>,
}

impl FoodListing {
    /// Advisory only: expiry is never enforced by a scheduler, the feed
    /// just renders expired items differently.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_time < now
    }
}

/// POST /listings body: a listing minus the store-assigned fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub description: String,
    pub category: FoodCategory,
    pub quantity: String,
    pub expiry_time: DateTime<Utc>,
    pub location_name: String,
    pub coordinates: Coordinates,
    pub image_url: String,
    pub is_safety_checked: bool,
}

impl ListingDraft {
    /// Caller-side validation; the store itself accepts anything.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("a title is required".to_string());
        }
        if self.image_url.trim().is_empty() {
            return Err("a photo is required".to_string());
        }
        if !self.is_safety_checked {
            return Err("the safety acknowledgement is required".to_string());
        }
        Ok(())
    }

    /// Build the full listing. Both the remote store and the mirror fallback
    /// go through here so the two paths produce the same field set.
    pub fn into_listing(self, id: String, now: DateTime<Utc>) -> FoodListing {
        FoodListing {
            id,
            user_id: self.user_id,
            user_name: self.user_name,
            title: self.title,
            description: self.description,
            category: self.category,
            quantity: self.quantity,
            expiry_time: self.expiry_time,
            location_name: self.location_name,
            coordinates: self.coordinates,
            image_url: self.image_url,
            status: FoodStatus::Available,
            created_at: now,
            is_safety_checked: self.is_safety_checked,
            claimed_by: None,
        }
    }
}

/// PATCH /listings/{id} body: every field optional, present fields overwrite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FoodCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_safety_checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FoodStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<String>,
}

impl ListingPatch {
    pub fn status(status: FoodStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply(&self, listing: &mut FoodListing) {
        if let Some(title) = &self.title {
            listing.title = title.clone();
        }
        if let Some(description) = &self.description {
            listing.description = description.clone();
        }
        if let Some(category) = self.category {
            listing.category = category;
        }
        if let Some(quantity) = &self.quantity {
            listing.quantity = quantity.clone();
        }
        if let Some(expiry_time) = self.expiry_time {
            listing.expiry_time = expiry_time;
        }
        if let Some(location_name) = &self.location_name {
            listing.location_name = location_name.clone();
        }
        if let Some(coordinates) = self.coordinates {
            listing.coordinates = coordinates;
        }
        if let Some(image_url) = &self.image_url {
            listing.image_url = image_url.clone();
        }
        if let Some(is_safety_checked) = self.is_safety_checked {
            listing.is_safety_checked = is_safety_checked;
        }
        if let Some(status) = self.status {
            listing.status = status;
        }
        if let Some(claimed_by) = &self.claimed_by {
            listing.claimed_by = Some(claimed_by.clone());
        }
    }
}
