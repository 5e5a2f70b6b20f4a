//! Identity without authentication: a user record derived from the email
//! string and persisted in the mirror until logout.

use std::sync::Arc;

use sharebite_models::{Coordinates, ProfileUpdate, User};
use sharebite_storage::Storage;

use crate::error::SyncError;

pub struct SessionManager {
    storage: Arc<Storage>,
}

impl SessionManager {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn login(&self, email: &str) -> Result<User, SyncError> {
        let user = User::from_email(email);
        self.storage.session.save_user(&user)?;
        tracing::info!(user_id = %user.id, "logged in");
        Ok(user)
    }

    pub fn current_user(&self) -> Result<Option<User>, SyncError> {
        Ok(self.storage.session.get_user()?)
    }

    /// Returns `None` when nobody is logged in.
    pub fn update_profile(&self, update: &ProfileUpdate) -> Result<Option<User>, SyncError> {
        let Some(mut user) = self.storage.session.get_user()? else {
            return Ok(None);
        };
        if let Some(name) = &update.name {
            user.name = name.clone();
        }
        if let Some(avatar) = &update.avatar {
            user.avatar = Some(avatar.clone());
        }
        self.storage.session.save_user(&user)?;
        Ok(Some(user))
    }

    pub fn update_location(&self, location: Coordinates) -> Result<Option<User>, SyncError> {
        let Some(mut user) = self.storage.session.get_user()? else {
            return Ok(None);
        };
        user.location = Some(location);
        self.storage.session.save_user(&user)?;
        Ok(Some(user))
    }

    /// Clears the identity only; the listing/request mirrors are a cache,
    /// not session state.
    pub fn logout(&self) -> Result<(), SyncError> {
        self.storage.session.clear_user()?;
        Ok(())
    }
}
