pub mod lifecycle;
pub mod listing;
pub mod request;
pub mod seed;
pub mod user;

pub use listing::{Coordinates, FoodCategory, FoodListing, FoodStatus, ListingDraft, ListingPatch};
pub use request::{FoodRequest, RequestDraft, RequestPatch, RequestStatus};
pub use user::{ProfileUpdate, User, UserRole};
