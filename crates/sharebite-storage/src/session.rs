use std::sync::Arc;

use anyhow::Result;
use redb::{Database, ReadableDatabase};
use sharebite_models::User;

use crate::SESSION_TABLE;

const CURRENT_USER_KEY: &str = "current_user";

/// The logged-in identity. Cleared on logout; the collection mirrors are a
/// cache, not session state, and live in their own table.
pub struct SessionStore {
    db: Arc<Database>,
}

impl SessionStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn get_user(&self) -> Result<Option<User>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        if let Some(data) = table.get(CURRENT_USER_KEY)? {
            let user: User = serde_json::from_slice(data.value())?;
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    pub fn save_user(&self, user: &User) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            let serialized = serde_json::to_vec(user)?;
            table.insert(CURRENT_USER_KEY, serialized.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn clear_user(&self) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.remove(CURRENT_USER_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
