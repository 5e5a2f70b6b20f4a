//! The single read/write surface the rest of the app talks to.
//!
//! Policy: remote wins when reachable; the mirror is the read/write store
//! of record when not; no reconciliation is attempted when connectivity
//! returns (the next successful list simply overwrites the mirror). Within
//! one call the order is fixed: remote attempt first, mirror second, so an
//! awaited result is fully settled.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use sharebite_models::{
    FoodListing, FoodRequest, ListingDraft, ListingPatch, RequestDraft, RequestPatch,
    RequestStatus, lifecycle, seed,
};
use sharebite_storage::Storage;

use crate::error::SyncError;
use crate::remote::{RemoteError, RemoteStore};

/// Which store actually served the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Remote,
    Mirror,
}

/// Tagged operation result: the fallback decision is part of the return
/// value instead of being buried in each call site.
#[derive(Debug, Clone, PartialEq)]
pub struct Synced<T> {
    pub source: Source,
    pub value: T,
}

impl<T> Synced<T> {
    fn remote(value: T) -> Self {
        Self {
            source: Source::Remote,
            value,
        }
    }

    fn mirror(value: T) -> Self {
        Self {
            source: Source::Mirror,
            value,
        }
    }
}

fn local_id() -> String {
    format!("local-{}", uuid::Uuid::new_v4())
}

pub struct SyncCoordinator {
    remote: Arc<dyn RemoteStore>,
    storage: Arc<Storage>,
}

impl SyncCoordinator {
    pub fn new(remote: Arc<dyn RemoteStore>, storage: Arc<Storage>) -> Self {
        Self { remote, storage }
    }

    fn cached_listings(&self) -> Result<Vec<FoodListing>, SyncError> {
        Ok(self
            .storage
            .listings
            .get()?
            .unwrap_or_else(seed::demo_listings))
    }

    /// Remote success overwrites the mirror wholesale; failure returns the
    /// last snapshot unchanged (or the seeded default feed).
    pub async fn list_listings(&self) -> Result<Synced<Vec<FoodListing>>, SyncError> {
        match self.remote.list_listings().await {
            Ok(listings) => {
                self.storage.listings.save(&listings)?;
                Ok(Synced::remote(listings))
            }
            Err(_) => {
                tracing::warn!("listings refresh fell back to the mirror");
                Ok(Synced::mirror(self.cached_listings()?))
            }
        }
    }

    pub async fn list_requests(&self) -> Result<Synced<Vec<FoodRequest>>, SyncError> {
        match self.remote.list_requests().await {
            Ok(requests) => {
                self.storage.requests.save(&requests)?;
                Ok(Synced::remote(requests))
            }
            Err(_) => {
                tracing::warn!("requests refresh fell back to the mirror");
                Ok(Synced::mirror(self.storage.requests.get()?))
            }
        }
    }

    /// Both paths produce a structurally identical listing; only the id
    /// format betrays the origin. The remote result is mirrored too, for
    /// offline continuity.
    pub async fn create_listing(&self, draft: ListingDraft) -> Result<Synced<FoodListing>, SyncError> {
        draft.validate().map_err(SyncError::Validation)?;
        let (listing, source) = match self.remote.create_listing(&draft).await {
            Ok(listing) => (listing, Source::Remote),
            Err(_) => (draft.into_listing(local_id(), Utc::now()), Source::Mirror),
        };

        let mut listings = self.cached_listings()?;
        listings.insert(0, listing.clone());
        self.storage.listings.save(&listings)?;

        Ok(Synced { source, value: listing })
    }

    pub async fn create_request(&self, draft: RequestDraft) -> Result<Synced<FoodRequest>, SyncError> {
        let (request, source) = match self.remote.create_request(&draft).await {
            Ok(request) => (request, Source::Remote),
            Err(_) => (draft.into_request(local_id(), Utc::now()), Source::Mirror),
        };

        let mut requests = self.storage.requests.get()?;
        requests.push(request.clone());
        self.storage.requests.save(&requests)?;

        Ok(Synced { source, value: request })
    }

    /// Remote first, mirror always: the mirror receives the same patch even
    /// when the remote ack was a bare fire-and-forget `{success:true}`.
    /// A missing id degrades to a silent no-op.
    pub async fn patch_listing(
        &self,
        id: &str,
        patch: &ListingPatch,
    ) -> Result<Synced<()>, SyncError> {
        let source = match self.remote.patch_listing(id, patch).await {
            Ok(()) => Source::Remote,
            Err(_) => Source::Mirror,
        };

        let listings = self.cached_listings()?;
        let listings = lifecycle::apply_listing_patch(&listings, id, patch);
        self.storage.listings.save(&listings)?;

        Ok(Synced { source, value: () })
    }

    /// Status changes run through the lifecycle engine on the mirror side
    /// regardless of the remote outcome, so an accepted request claims the
    /// mirrored listing exactly like the remote store claims its own.
    pub async fn patch_request(
        &self,
        id: &str,
        patch: &RequestPatch,
    ) -> Result<Synced<()>, SyncError> {
        let source = match self.remote.patch_request(id, patch).await {
            Ok(()) => Source::Remote,
            Err(_) => Source::Mirror,
        };

        let requests = self.storage.requests.get()?;
        let listings = self.cached_listings()?;
        let (requests, listings) =
            lifecycle::apply_request_status_change(&requests, &listings, id, patch.status);
        self.storage.requests.save(&requests)?;
        self.storage.listings.save(&listings)?;

        Ok(Synced { source, value: () })
    }

    /// Ownership is arbitrated by whichever store is reachable. A remote
    /// 404 is logged and treated as an idempotent no-op; Forbidden is the
    /// one failure that must interrupt the user.
    pub async fn delete_listing(
        &self,
        id: &str,
        requester_id: &str,
    ) -> Result<Synced<()>, SyncError> {
        match self.remote.delete_listing(id, requester_id).await {
            Ok(()) => {
                self.remove_from_mirror(id)?;
                Ok(Synced::remote(()))
            }
            Err(RemoteError::Forbidden) => Err(SyncError::Forbidden),
            Err(RemoteError::NotFound) => {
                tracing::warn!(%id, "deleted listing unknown to the remote store");
                self.remove_from_mirror(id)?;
                Ok(Synced::remote(()))
            }
            Err(RemoteError::Unreachable) => {
                let listings = self.cached_listings()?;
                let listing = listings
                    .iter()
                    .find(|l| l.id == id)
                    .ok_or(SyncError::NotFound("listing"))?;
                if !lifecycle::can_delete(listing, requester_id) {
                    return Err(SyncError::Forbidden);
                }
                let listings: Vec<_> = listings.into_iter().filter(|l| l.id != id).collect();
                self.storage.listings.save(&listings)?;
                Ok(Synced::mirror(()))
            }
        }
    }

    fn remove_from_mirror(&self, id: &str) -> Result<(), SyncError> {
        let listings: Vec<_> = self
            .cached_listings()?
            .into_iter()
            .filter(|l| l.id != id)
            .collect();
        self.storage.listings.save(&listings)?;
        Ok(())
    }

    /// Mirror-only: contact details never travel through the remote store.
    pub fn share_contact(
        &self,
        request_id: &str,
        contact: &str,
    ) -> Result<FoodRequest, SyncError> {
        let requests = self.storage.requests.get()?;
        let request = requests
            .iter()
            .find(|r| r.id == request_id)
            .ok_or(SyncError::NotFound("request"))?;
        if request.status != RequestStatus::Accepted {
            return Err(SyncError::Validation(
                "contact can only be shared on an accepted request".to_string(),
            ));
        }

        let requests = lifecycle::apply_contact_share(&requests, request_id, contact);
        self.storage.requests.save(&requests)?;
        requests
            .into_iter()
            .find(|r| r.id == request_id)
            .ok_or(SyncError::NotFound("request"))
    }

    pub async fn liveness(&self) -> bool {
        self.remote.liveness().await
    }
}
