use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

/// A pickup request filed by one user against one listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRequest {
    pub id: String,
    pub listing_id: String,
    pub requester_id: String,
    pub requester_name: String,
    pub poster_id: String,
    pub status: RequestStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_shared: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_contact: Option<String>,
}

/// POST /requests body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDraft {
    pub listing_id: String,
    pub requester_id: String,
    pub requester_name: String,
    pub poster_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RequestDraft {
    pub fn into_request(self, id: String, now: DateTime<Utc>) -> FoodRequest {
        FoodRequest {
            id,
            listing_id: self.listing_id,
            requester_id: self.requester_id,
            requester_name: self.requester_name,
            poster_id: self.poster_id,
            status: RequestStatus::Pending,
            timestamp: now,
            message: self.message,
            contact_shared: None,
            shared_contact: None,
        }
    }
}

/// PATCH /requests/{id} body. Contact sharing never goes over the wire, so
/// the only patchable field is the status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RequestPatch {
    pub status: RequestStatus,
}
