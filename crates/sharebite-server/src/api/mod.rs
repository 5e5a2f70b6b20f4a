pub mod listings;
pub mod requests;
pub mod state;

pub use state::AppState;
