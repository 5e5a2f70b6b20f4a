use chrono::{Duration, Utc};

use crate::listing::{Coordinates, FoodCategory, FoodListing, FoodStatus};

/// Demo listing shared by the remote store's initial table and the mirror's
/// default when nothing has ever been cached.
pub fn demo_listings() -> Vec<FoodListing> {
    vec![FoodListing {
        id: "1".to_string(),
        user_id: "user2".to_string(),
        user_name: "Ananya Sharma".to_string(),
        title: "Extra Home-cooked Biryani".to_string(),
        description: "Freshly prepared chicken biryani. Too much for me to finish.".to_string(),
        category: FoodCategory::Meal,
        quantity: "2 servings".to_string(),
        expiry_time: Utc::now() + Duration::hours(4),
        location_name: "Hostel A, Wing 2".to_string(),
        coordinates: Coordinates {
            lat: 12.9716,
            lng: 77.5946,
        },
        image_url: "https://picsum.photos/seed/biryani/600/400".to_string(),
        status: FoodStatus::Available,
        is_safety_checked: true,
        created_at: Utc::now(),
        claimed_by: None,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_listing_is_available_and_unexpired() {
        let listings = demo_listings();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].status, FoodStatus::Available);
        assert!(!listings[0].is_expired(Utc::now()));
    }
}
