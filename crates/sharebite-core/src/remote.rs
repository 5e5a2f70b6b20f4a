//! Thin HTTP binding to the authoritative store.
//!
//! The `RemoteStore` trait exists so the coordinator can be exercised
//! against in-memory fakes; `HttpRemote` is the real reqwest-backed
//! implementation. Unavailability is a first-class outcome, not an
//! exception: any transport error, timeout or non-2xx status collapses to
//! `RemoteError::Unreachable` and the caller falls back to the mirror.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;
use sharebite_models::{
    FoodListing, FoodRequest, ListingDraft, ListingPatch, RequestDraft, RequestPatch,
};

/// Hard ceiling on the liveness probe so the online/offline badge settles
/// quickly no matter how long the connection attempt would otherwise take.
const LIVENESS_TIMEOUT: Duration = Duration::from_millis(1500);

/// Mutating calls must not hang on an unresponsive transport either; the
/// fallback path triggers on unresponsiveness, not only on hard failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("remote store unreachable")]
    Unreachable,
    #[error("not found on the remote store")]
    NotFound,
    #[error("refused by the remote store")]
    Forbidden,
}

#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn list_listings(&self) -> Result<Vec<FoodListing>, RemoteError>;
    async fn create_listing(&self, draft: &ListingDraft) -> Result<FoodListing, RemoteError>;
    async fn patch_listing(&self, id: &str, patch: &ListingPatch) -> Result<(), RemoteError>;
    async fn delete_listing(&self, id: &str, requester_id: &str) -> Result<(), RemoteError>;
    async fn list_requests(&self) -> Result<Vec<FoodRequest>, RemoteError>;
    async fn create_request(&self, draft: &RequestDraft) -> Result<FoodRequest, RemoteError>;
    async fn patch_request(&self, id: &str, patch: &RequestPatch) -> Result<(), RemoteError>;

    /// Bounded-time reachability check; advisory only, never gates
    /// correctness.
    async fn liveness(&self) -> bool;
}

pub struct HttpRemote {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3001";

    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn expect_json<T: DeserializeOwned>(
        &self,
        path: &str,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<T, RemoteError> {
        match response {
            Ok(resp) if resp.status().is_success() => {
                resp.json().await.map_err(|_| RemoteError::Unreachable)
            }
            Ok(resp) => {
                tracing::warn!(%path, status = %resp.status(), "remote call rejected");
                Err(RemoteError::Unreachable)
            }
            Err(err) => {
                tracing::warn!(%path, error = %err, "remote call failed; backend might be offline");
                Err(RemoteError::Unreachable)
            }
        }
    }

    async fn expect_success(
        &self,
        path: &str,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<(), RemoteError> {
        self.expect_json::<serde_json::Value>(path, response)
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl RemoteStore for HttpRemote {
    async fn list_listings(&self) -> Result<Vec<FoodListing>, RemoteError> {
        let resp = self.client.get(self.url("/listings")).send().await;
        self.expect_json("/listings", resp).await
    }

    async fn create_listing(&self, draft: &ListingDraft) -> Result<FoodListing, RemoteError> {
        let resp = self
            .client
            .post(self.url("/listings"))
            .json(draft)
            .send()
            .await;
        self.expect_json("/listings", resp).await
    }

    async fn patch_listing(&self, id: &str, patch: &ListingPatch) -> Result<(), RemoteError> {
        let path = format!("/listings/{id}");
        let resp = self.client.patch(self.url(&path)).json(patch).send().await;
        self.expect_success(&path, resp).await
    }

    /// The remote store is the sole arbiter of ownership when reachable:
    /// 403 and 404 come back as distinct errors instead of collapsing to
    /// the unreachable sentinel.
    async fn delete_listing(&self, id: &str, requester_id: &str) -> Result<(), RemoteError> {
        let path = format!("/listings/{id}");
        let resp = self
            .client
            .delete(self.url(&path))
            .json(&json!({ "requesterId": requester_id }))
            .send()
            .await;
        match resp {
            Ok(resp) if resp.status().is_success() => Ok(()),
            Ok(resp) if resp.status() == reqwest::StatusCode::FORBIDDEN => {
                Err(RemoteError::Forbidden)
            }
            Ok(resp) if resp.status() == reqwest::StatusCode::NOT_FOUND => {
                Err(RemoteError::NotFound)
            }
            Ok(resp) => {
                tracing::warn!(%path, status = %resp.status(), "remote delete rejected");
                Err(RemoteError::Unreachable)
            }
            Err(err) => {
                tracing::warn!(%path, error = %err, "remote delete failed; backend might be offline");
                Err(RemoteError::Unreachable)
            }
        }
    }

    async fn list_requests(&self) -> Result<Vec<FoodRequest>, RemoteError> {
        let resp = self.client.get(self.url("/requests")).send().await;
        self.expect_json("/requests", resp).await
    }

    async fn create_request(&self, draft: &RequestDraft) -> Result<FoodRequest, RemoteError> {
        let resp = self
            .client
            .post(self.url("/requests"))
            .json(draft)
            .send()
            .await;
        self.expect_json("/requests", resp).await
    }

    async fn patch_request(&self, id: &str, patch: &RequestPatch) -> Result<(), RemoteError> {
        let path = format!("/requests/{id}");
        let resp = self.client.patch(self.url(&path)).json(patch).send().await;
        self.expect_success(&path, resp).await
    }

    async fn liveness(&self) -> bool {
        self.client
            .get(self.url("/listings"))
            .timeout(LIVENESS_TIMEOUT)
            .send()
            .await
            .map(|resp| resp.status().is_success())
            .unwrap_or(false)
    }
}
