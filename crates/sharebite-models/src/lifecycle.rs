//! The only place that knows the legal entity state transitions.
//!
//! Every function here is pure and total: the same inputs always yield the
//! same outputs, so the identical logic can run against the remote store and
//! the local mirror without divergence. A missing id is never an error; the
//! input comes back unchanged and the caller decides whether that matters
//! (the server turns it into a 404 for deletes, the mirror treats it as a
//! no-op).

use crate::listing::{FoodListing, FoodStatus, ListingPatch};
use crate::request::{FoodRequest, RequestStatus};

/// Rewrite a request's status and, when the new status is `accepted`, claim
/// the referenced listing for the requester. Rejected/completed transitions
/// leave the listings untouched. Other pending requests on the same listing
/// are left dangling on purpose; see the request dashboard for how they are
/// presented.
pub fn apply_request_status_change(
    requests: &[FoodRequest],
    listings: &[FoodListing],
    request_id: &str,
    new_status: RequestStatus,
) -> (Vec<FoodRequest>, Vec<FoodListing>) {
    let target = requests.iter().find(|r| r.id == request_id);

    let listings = match (target, new_status) {
        (Some(request), RequestStatus::Accepted) => listings
            .iter()
            .map(|l| {
                if l.id == request.listing_id {
                    let mut claimed = l.clone();
                    claimed.status = FoodStatus::Claimed;
                    claimed.claimed_by = Some(request.requester_id.clone());
                    claimed
                } else {
                    l.clone()
                }
            })
            .collect(),
        _ => listings.to_vec(),
    };

    let requests = requests
        .iter()
        .map(|r| {
            if r.id == request_id {
                let mut updated = r.clone();
                updated.status = new_status;
                updated
            } else {
                r.clone()
            }
        })
        .collect();

    (requests, listings)
}

/// Merge patch fields into the matching listing. Does not re-derive request
/// state: a listing claimed by one accepted request does not auto-reject the
/// other pending requests on it.
pub fn apply_listing_patch(
    listings: &[FoodListing],
    id: &str,
    patch: &ListingPatch,
) -> Vec<FoodListing> {
    listings
        .iter()
        .map(|l| {
            if l.id == id {
                let mut updated = l.clone();
                patch.apply(&mut updated);
                updated
            } else {
                l.clone()
            }
        })
        .collect()
}

/// Only the original donor may delete a listing.
pub fn can_delete(listing: &FoodListing, requester_id: &str) -> bool {
    listing.user_id == requester_id
}

/// Attach shared contact details to a request. Accepted is the only state
/// from which a donor may share contact; anything else is a no-op.
pub fn apply_contact_share(
    requests: &[FoodRequest],
    request_id: &str,
    contact: &str,
) -> Vec<FoodRequest> {
    requests
        .iter()
        .map(|r| {
            if r.id == request_id && r.status == RequestStatus::Accepted {
                let mut updated = r.clone();
                updated.contact_shared = Some(true);
                updated.shared_contact = Some(contact.to_string());
                updated
            } else {
                r.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{Coordinates, FoodCategory};
    use crate::request::RequestDraft;
    use chrono::{Duration, Utc};

    fn listing(id: &str, owner: &str) -> FoodListing {
        FoodListing {
            id: id.to_string(),
            user_id: owner.to_string(),
            user_name: "Owner".to_string(),
            title: "Idli batter".to_string(),
            description: "Half a tub".to_string(),
            category: FoodCategory::Other,
            quantity: "1 tub".to_string(),
            expiry_time: Utc::now() + Duration::hours(8),
            location_name: "Hostel C".to_string(),
            coordinates: Coordinates {
                lat: 12.97,
                lng: 77.59,
            },
            image_url: "https://example.com/idli.jpg".to_string(),
            status: FoodStatus::Available,
            created_at: Utc::now(),
            is_safety_checked: true,
            claimed_by: None,
        }
    }

    fn request(id: &str, listing_id: &str, requester: &str) -> FoodRequest {
        RequestDraft {
            listing_id: listing_id.to_string(),
            requester_id: requester.to_string(),
            requester_name: "Requester".to_string(),
            poster_id: "u1".to_string(),
            message: None,
        }
        .into_request(id.to_string(), Utc::now())
    }

    #[test]
    fn accept_claims_the_referenced_listing() {
        let listings = vec![listing("l1", "u1"), listing("l2", "u1")];
        let requests = vec![request("r1", "l1", "u2")];

        let (requests, listings) =
            apply_request_status_change(&requests, &listings, "r1", RequestStatus::Accepted);

        assert_eq!(requests[0].status, RequestStatus::Accepted);
        assert_eq!(listings[0].status, FoodStatus::Claimed);
        assert_eq!(listings[0].claimed_by.as_deref(), Some("u2"));
        // the unrelated listing is untouched
        assert_eq!(listings[1].status, FoodStatus::Available);
        assert!(listings[1].claimed_by.is_none());
    }

    #[test]
    fn reject_and_complete_do_not_cascade() {
        let listings = vec![listing("l1", "u1")];
        let requests = vec![request("r1", "l1", "u2")];

        for status in [RequestStatus::Rejected, RequestStatus::Completed] {
            let (requests, listings) =
                apply_request_status_change(&requests, &listings, "r1", status);
            assert_eq!(requests[0].status, status);
            assert_eq!(listings[0].status, FoodStatus::Available);
            assert!(listings[0].claimed_by.is_none());
        }
    }

    #[test]
    fn unknown_request_id_is_a_no_op() {
        let listings = vec![listing("l1", "u1")];
        let requests = vec![request("r1", "l1", "u2")];

        let (out_requests, out_listings) =
            apply_request_status_change(&requests, &listings, "missing", RequestStatus::Accepted);

        assert_eq!(out_requests, requests);
        assert_eq!(out_listings, listings);
    }

    #[test]
    fn accept_is_idempotent() {
        let listings = vec![listing("l1", "u1")];
        let requests = vec![request("r1", "l1", "u2")];

        let (r1, l1) =
            apply_request_status_change(&requests, &listings, "r1", RequestStatus::Accepted);
        let (r2, l2) = apply_request_status_change(&r1, &l1, "r1", RequestStatus::Accepted);

        assert_eq!(r1, r2);
        assert_eq!(l1, l2);
    }

    #[test]
    fn accept_leaves_sibling_pending_requests_dangling() {
        let listings = vec![listing("l1", "u1")];
        let requests = vec![request("r1", "l1", "u2"), request("r2", "l1", "u3")];

        let (requests, listings) =
            apply_request_status_change(&requests, &listings, "r1", RequestStatus::Accepted);

        assert_eq!(listings[0].claimed_by.as_deref(), Some("u2"));
        assert_eq!(requests[1].status, RequestStatus::Pending);
    }

    #[test]
    fn listing_patch_targets_one_listing() {
        let listings = vec![listing("l1", "u1"), listing("l2", "u1")];
        let patch = ListingPatch {
            status: Some(FoodStatus::Expired),
            ..ListingPatch::default()
        };

        let patched = apply_listing_patch(&listings, "l2", &patch);
        assert_eq!(patched[0].status, FoodStatus::Available);
        assert_eq!(patched[1].status, FoodStatus::Expired);

        // unknown id leaves everything unchanged
        let untouched = apply_listing_patch(&listings, "nope", &patch);
        assert_eq!(untouched, listings);
    }

    #[test]
    fn listing_patch_is_idempotent() {
        let listings = vec![listing("l1", "u1")];
        let patch = ListingPatch {
            status: Some(FoodStatus::Claimed),
            claimed_by: Some("u2".to_string()),
            ..ListingPatch::default()
        };

        let once = apply_listing_patch(&listings, "l1", &patch);
        let twice = apply_listing_patch(&once, "l1", &patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn only_the_donor_can_delete() {
        let l = listing("l1", "u1");
        assert!(can_delete(&l, "u1"));
        assert!(!can_delete(&l, "u2"));
        assert!(!can_delete(&l, ""));
    }

    #[test]
    fn contact_share_requires_accepted() {
        let pending = vec![request("r1", "l1", "u2")];
        let untouched = apply_contact_share(&pending, "r1", "+91 9876543210");
        assert_eq!(untouched, pending);

        let (accepted, _) = apply_request_status_change(
            &pending,
            &[listing("l1", "u1")],
            "r1",
            RequestStatus::Accepted,
        );
        let shared = apply_contact_share(&accepted, "r1", "+91 9876543210");
        assert_eq!(shared[0].contact_shared, Some(true));
        assert_eq!(shared[0].shared_contact.as_deref(), Some("+91 9876543210"));
    }
}
