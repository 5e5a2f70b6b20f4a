use std::sync::Arc;

use anyhow::Result;
use redb::{Database, ReadableDatabase};
use sharebite_models::FoodListing;

use crate::MIRROR_TABLE;

const LISTINGS_KEY: &str = "listings";

/// Last-known listings snapshot. `None` means nothing was ever cached,
/// which callers typically replace with the seeded default feed.
pub struct ListingMirror {
    db: Arc<Database>,
}

impl ListingMirror {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn get(&self) -> Result<Option<Vec<FoodListing>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(MIRROR_TABLE)?;

        if let Some(data) = table.get(LISTINGS_KEY)? {
            let listings: Vec<FoodListing> = serde_json::from_slice(data.value())?;
            Ok(Some(listings))
        } else {
            Ok(None)
        }
    }

    /// Full overwrite; the mirror never merges.
    pub fn save(&self, listings: &[FoodListing]) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(MIRROR_TABLE)?;
            let serialized = serde_json::to_vec(listings)?;
            table.insert(LISTINGS_KEY, serialized.as_slice())?;
        }
        write_txn.commit()?;
        tracing::debug!(count = listings.len(), "saved listings mirror");
        Ok(())
    }
}
