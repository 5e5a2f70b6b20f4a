//! The in-process table standing in for a database. Restarting the server
//! clears it; the seeded demo listing comes back.

use chrono::Utc;
use sharebite_models::{
    FoodListing, FoodRequest, ListingDraft, ListingPatch, RequestDraft, RequestPatch, lifecycle,
    seed,
};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteError {
    NotFound,
    Forbidden,
}

pub struct StoreTable {
    listings: RwLock<Vec<FoodListing>>,
    requests: RwLock<Vec<FoodRequest>>,
}

impl StoreTable {
    pub fn seeded() -> Self {
        Self {
            listings: RwLock::new(seed::demo_listings()),
            requests: RwLock::new(Vec::new()),
        }
    }

    pub async fn list_listings(&self) -> Vec<FoodListing> {
        self.listings.read().await.clone()
    }

    /// Newest first, like the feed renders them.
    pub async fn create_listing(&self, draft: ListingDraft) -> FoodListing {
        let listing = draft.into_listing(uuid::Uuid::new_v4().to_string(), Utc::now());
        self.listings.write().await.insert(0, listing.clone());
        listing
    }

    /// Unknown ids are a silent no-op; the ack is the same either way.
    pub async fn patch_listing(&self, id: &str, patch: &ListingPatch) {
        let mut listings = self.listings.write().await;
        *listings = lifecycle::apply_listing_patch(&listings, id, patch);
    }

    pub async fn delete_listing(&self, id: &str, requester_id: &str) -> Result<(), DeleteError> {
        let mut listings = self.listings.write().await;
        let listing = listings
            .iter()
            .find(|l| l.id == id)
            .ok_or(DeleteError::NotFound)?;
        if !lifecycle::can_delete(listing, requester_id) {
            return Err(DeleteError::Forbidden);
        }
        listings.retain(|l| l.id != id);
        Ok(())
    }

    pub async fn list_requests(&self) -> Vec<FoodRequest> {
        self.requests.read().await.clone()
    }

    pub async fn create_request(&self, draft: RequestDraft) -> FoodRequest {
        let request = draft.into_request(uuid::Uuid::new_v4().to_string(), Utc::now());
        self.requests.write().await.push(request.clone());
        request
    }

    /// An accepted request claims its listing in the same write; callers
    /// observing the store after the ack see both changes.
    pub async fn patch_request(&self, id: &str, patch: &RequestPatch) {
        let mut listings = self.listings.write().await;
        let mut requests = self.requests.write().await;
        let (new_requests, new_listings) =
            lifecycle::apply_request_status_change(&requests, &listings, id, patch.status);
        *requests = new_requests;
        *listings = new_listings;
    }
}
